//! Fitted regression results.

use serde::{Deserialize, Serialize};

use crate::INTERCEPT;

/// Named coefficients from a fitted factor regression.
///
/// Always contains the intercept under the name `"const"` as the first
/// entry. Coefficients keep the order of the design matrix columns; lookup
/// is by name. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionResult {
    coefficients: Vec<(String, f64)>,
    std_errors: Vec<(String, f64)>,
    r_squared: f64,
}

impl RegressionResult {
    /// Create a new regression result.
    #[must_use]
    pub fn new(
        coefficients: Vec<(String, f64)>,
        std_errors: Vec<(String, f64)>,
        r_squared: f64,
    ) -> Self {
        debug_assert_eq!(coefficients.len(), std_errors.len());
        debug_assert!(coefficients.first().is_some_and(|(n, _)| n == INTERCEPT));
        Self { coefficients, std_errors, r_squared }
    }

    /// Coefficient for a named factor.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.coefficients.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    /// HC0 standard error for a named factor.
    #[must_use]
    pub fn std_error(&self, name: &str) -> Option<f64> {
        self.std_errors.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    /// Regression intercept: the fund's risk-adjusted excess return.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.get(INTERCEPT).unwrap_or(f64::NAN)
    }

    /// All coefficient names in design matrix order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.coefficients.iter().map(|(n, _)| n.as_str())
    }

    /// All named coefficients in design matrix order.
    #[must_use]
    pub fn coefficients(&self) -> &[(String, f64)] {
        &self.coefficients
    }

    /// R-squared of the fit.
    #[must_use]
    pub const fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Number of coefficients, including the intercept.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Check if the result holds no coefficients.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}
