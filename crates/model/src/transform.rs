//! Excess-return construction for regression inputs.

use ndarray::Array1;

/// Scale applied to fractional NAV returns to match the percentage-point
/// units of the factor data.
pub(crate) const PCT_SCALE: f64 = 100.0;

/// Excess fund returns for the regression response.
///
/// NAV returns are fractional (0.01 = 1%) and are scaled by 100 before
/// subtracting the risk-free rate, which is already in percentage points.
#[must_use]
pub fn excess_fund_returns(nav_returns: &[f64], rf: &[f64]) -> Array1<f64> {
    debug_assert_eq!(nav_returns.len(), rf.len());
    Array1::from_iter(nav_returns.iter().zip(rf).map(|(r, rf)| r * PCT_SCALE - rf))
}

/// Excess benchmark returns for the single-index CAPM regressor.
///
/// Index percent changes are already in percentage points: no scaling.
#[must_use]
pub fn excess_benchmark_returns(pct_change: &[f64], rf: &[f64]) -> Array1<f64> {
    debug_assert_eq!(pct_change.len(), rf.len());
    Array1::from_iter(pct_change.iter().zip(rf).map(|(chg, rf)| chg - rf))
}
