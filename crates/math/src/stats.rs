//! Descriptive statistics for cross-sectional aggregation.

use crate::MathError;

/// Arithmetic mean. NaN for empty input, so aggregates over zero funds
/// stay explicitly undefined rather than silently zero.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (ddof = 0). NaN for empty input.
#[must_use]
pub fn std_pop(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Pearson correlation coefficient between two equal-length slices.
///
/// A zero-variance input propagates as NaN rather than an error, so
/// statistics computed over many funds remain computable with the
/// degenerate entry flagged.
///
/// # Errors
/// `DimensionMismatch` when the slices differ in length; `EmptyData` when
/// they are empty.
pub fn pearson(a: &[f64], b: &[f64]) -> Result<f64, MathError> {
    if a.len() != b.len() {
        return Err(MathError::DimensionMismatch { expected: a.len(), actual: b.len() });
    }
    if a.is_empty() {
        return Err(MathError::EmptyData);
    }

    let mean_a = mean(a);
    let mean_b = mean(b);

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        let da = x - mean_a;
        let db = y - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    let denom = (var_a * var_b).sqrt();
    if denom == 0.0 {
        return Ok(f64::NAN);
    }
    Ok(cov / denom)
}
