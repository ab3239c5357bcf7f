//! Fama-French factor definitions and the monthly factor data set.

use std::fmt;

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::Date;

/// Column name of the regression intercept.
pub const INTERCEPT: &str = "const";

/// Column name of the benchmark excess-return regressor in the benchmark
/// CAPM variant.
pub const BENCHMARK_FACTOR: &str = "benchmark";

/// Fama-French factor identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factor {
    /// Market return in excess of the risk-free rate.
    MktRf,
    /// Size: small minus big.
    Smb,
    /// Value: high minus low book-to-market.
    Hml,
    /// Profitability: robust minus weak.
    Rmw,
    /// Investment: conservative minus aggressive.
    Cma,
}

impl Factor {
    /// All five factors in canonical order.
    pub const ALL: [Self; 5] = [Self::MktRf, Self::Smb, Self::Hml, Self::Rmw, Self::Cma];

    /// Canonical column name, matching the Fama-French research data files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MktRf => "Mkt-RF",
            Self::Smb => "SMB",
            Self::Hml => "HML",
            Self::Rmw => "RMW",
            Self::Cma => "CMA",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Monthly Fama-French factor returns plus the risk-free rate.
///
/// All values are in percentage-point units (1.0 = 1%). Dates are strictly
/// increasing; all columns have the same length as `dates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorSet {
    /// Observation dates.
    pub dates: Vec<Date>,
    /// Market excess return.
    #[serde(skip)]
    pub mkt_rf: Array1<f64>,
    /// Size factor return.
    #[serde(skip)]
    pub smb: Array1<f64>,
    /// Value factor return.
    #[serde(skip)]
    pub hml: Array1<f64>,
    /// Profitability factor return.
    #[serde(skip)]
    pub rmw: Array1<f64>,
    /// Investment factor return.
    #[serde(skip)]
    pub cma: Array1<f64>,
    /// Risk-free rate.
    #[serde(skip)]
    pub rf: Array1<f64>,
}

impl FactorSet {
    /// Create a new factor set.
    #[must_use]
    pub fn new(
        dates: Vec<Date>,
        mkt_rf: Array1<f64>,
        smb: Array1<f64>,
        hml: Array1<f64>,
        rmw: Array1<f64>,
        cma: Array1<f64>,
        rf: Array1<f64>,
    ) -> Self {
        debug_assert_eq!(dates.len(), mkt_rf.len());
        debug_assert_eq!(dates.len(), smb.len());
        debug_assert_eq!(dates.len(), hml.len());
        debug_assert_eq!(dates.len(), rmw.len());
        debug_assert_eq!(dates.len(), cma.len());
        debug_assert_eq!(dates.len(), rf.len());
        Self { dates, mkt_rf, smb, hml, rmw, cma, rf }
    }

    /// Number of observations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if the factor set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Return column for a factor.
    #[must_use]
    pub const fn column(&self, factor: Factor) -> &Array1<f64> {
        match factor {
            Factor::MktRf => &self.mkt_rf,
            Factor::Smb => &self.smb,
            Factor::Hml => &self.hml,
            Factor::Rmw => &self.rmw,
            Factor::Cma => &self.cma,
        }
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn factor_names() {
        assert_eq!(Factor::MktRf.name(), "Mkt-RF");
        assert_eq!(Factor::Smb.name(), "SMB");
        assert_eq!(Factor::Hml.name(), "HML");
        assert_eq!(Factor::Rmw.name(), "RMW");
        assert_eq!(Factor::Cma.name(), "CMA");
        assert_eq!(Factor::ALL.len(), 5);
    }

    #[test]
    fn factor_display() {
        assert_eq!(Factor::MktRf.to_string(), "Mkt-RF");
    }

    #[test]
    fn column_access() {
        let dates = vec![Date::from_ymd_opt(2024, 1, 31).unwrap()];
        let factors = FactorSet::new(
            dates,
            array![1.0],
            array![2.0],
            array![3.0],
            array![4.0],
            array![5.0],
            array![0.4],
        );

        assert_eq!(factors.len(), 1);
        assert_eq!(factors.column(Factor::MktRf)[0], 1.0);
        assert_eq!(factors.column(Factor::Cma)[0], 5.0);
        assert_eq!(factors.rf[0], 0.4);
    }
}
