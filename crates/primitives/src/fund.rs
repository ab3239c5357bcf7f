//! Mutual fund type definitions.

use derive_more::Display;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::{CategoryKey, Date};

/// Minimum number of usable return periods for a fund to be eligible for
/// regression: five years of monthly data.
pub const MIN_RETURN_PERIODS: usize = 60;

/// Mutual fund ticker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct Ticker(pub String);

impl Ticker {
    /// Create a new ticker.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Monthly net-asset-value history for a single mutual fund.
///
/// The periodic NAV return is derived at construction:
/// `nav_return[t] = nav[t] / nav[t-1] - 1`. The first record has no prior
/// NAV, so `nav_return[0]` is NaN and must never be used as a regression
/// response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundRecord {
    /// Fund ticker.
    pub ticker: Ticker,
    /// Morningstar category label.
    pub category: CategoryKey,
    /// Observation dates, strictly increasing.
    pub dates: Vec<Date>,
    /// Net asset value per share.
    #[serde(skip)]
    pub nav: Array1<f64>,
    /// Fractional month-over-month NAV return; `nav_return[0]` is NaN.
    #[serde(skip)]
    pub nav_return: Array1<f64>,
}

impl FundRecord {
    /// Create a new fund record, deriving periodic NAV returns.
    #[must_use]
    pub fn new(ticker: Ticker, category: CategoryKey, dates: Vec<Date>, nav: Array1<f64>) -> Self {
        debug_assert_eq!(dates.len(), nav.len());
        let mut nav_return = Array1::from_elem(nav.len(), f64::NAN);
        for t in 1..nav.len() {
            nav_return[t] = nav[t] / nav[t - 1] - 1.0;
        }
        Self { ticker, category, dates, nav, nav_return }
    }

    /// Number of observations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if the history is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Number of defined return periods (one fewer than observations).
    #[must_use]
    pub const fn usable_returns(&self) -> usize {
        self.dates.len().saturating_sub(1)
    }

    /// Whether the fund has enough return history for regression.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.usable_returns() >= MIN_RETURN_PERIODS
    }
}
