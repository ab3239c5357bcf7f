//! Error and skip taxonomy for model fitting.

use fundattr_math::MathError;
use fundattr_primitives::{CategoryKey, Ticker};

/// Reasons a fund's regression produced no result.
///
/// All of these are recovered at per-fund granularity: the fund is skipped
/// and category aggregation continues. None of them aborts the enclosing
/// aggregation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    /// The participating series could not be reconciled into equal-length
    /// windows, e.g. due to missing months or no date overlap.
    #[error("misaligned series: window row counts {lengths:?}")]
    Misaligned {
        /// Row count each series produced over the window.
        lengths: Vec<usize>,
    },

    /// The design matrix was empty, non-identifiable, or singular.
    #[error("insufficient data: {rows} rows for {cols} columns")]
    InsufficientData {
        /// Number of observations in the window.
        rows: usize,
        /// Number of design matrix columns.
        cols: usize,
    },

    /// The fund has fewer than the minimum usable return periods.
    #[error("ineligible fund: only {periods} usable return periods")]
    Ineligible {
        /// Usable return periods the fund actually has.
        periods: usize,
    },
}

/// Fatal errors: violated preconditions in the external data, never
/// produced by a recoverable per-fund condition.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// No benchmark series was supplied for a category that needs one.
    #[error("no benchmark series for category {0}")]
    MissingBenchmark(CategoryKey),

    /// A fund's ticker is absent from the category configuration.
    #[error("ticker {0} missing from category configuration")]
    UnknownTicker(Ticker),

    /// A fund's recorded category disagrees with the configuration.
    #[error("ticker {ticker} configured as {configured} but recorded as {recorded}")]
    CategoryMismatch {
        /// The offending fund ticker.
        ticker: Ticker,
        /// Category in the configuration.
        configured: CategoryKey,
        /// Category carried on the fund record.
        recorded: CategoryKey,
    },

    /// Math error that is not classified as a per-fund skip.
    #[error("math error: {0}")]
    Math(#[from] MathError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_reason_display() {
        let reason = SkipReason::Misaligned { lengths: vec![118, 117] };
        assert_eq!(reason.to_string(), "misaligned series: window row counts [118, 117]");

        let reason = SkipReason::Ineligible { periods: 59 };
        assert!(reason.to_string().contains("59"));
    }

    #[test]
    fn model_error_display() {
        let err = ModelError::MissingBenchmark(CategoryKey::new("US Equity", "Small Blend"));
        assert_eq!(err.to_string(), "no benchmark series for category US Equity / Small Blend");

        let err = ModelError::UnknownTicker(Ticker::new("ZZZZX"));
        assert!(err.to_string().contains("ZZZZX"));
    }
}
