//! Error types for regression mathematics.

/// Errors that can occur during regression computations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Dimension mismatch between inputs.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// Fewer observations than regressors (non-identifiable system).
    #[error("insufficient data: {rows} rows for {cols} columns")]
    InsufficientData {
        /// Number of observations.
        rows: usize,
        /// Number of design matrix columns.
        cols: usize,
    },

    /// Singular or nearly singular normal-equations matrix.
    #[error("singular design matrix (pivot {pivot:e})")]
    Singular {
        /// Magnitude of the failing pivot.
        pivot: f64,
    },

    /// Empty data.
    #[error("empty data provided")]
    EmptyData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MathError::InsufficientData { rows: 3, cols: 6 };
        assert_eq!(err.to_string(), "insufficient data: 3 rows for 6 columns");

        let err = MathError::DimensionMismatch { expected: 10, actual: 5 };
        assert!(err.to_string().contains("10") && err.to_string().contains("5"));
    }
}
