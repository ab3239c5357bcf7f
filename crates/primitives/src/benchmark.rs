//! Benchmark index series.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::{CategoryKey, Date, Ticker};

/// Monthly history of a category's representative benchmark index.
///
/// Percent changes are in percentage-point units, directly comparable to
/// scaled fund returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSeries {
    /// Benchmark index ticker, e.g. "RU10VATR".
    pub ticker: Ticker,
    /// Human-readable index name, e.g. "Russell 1000 Value TR USD".
    pub name: String,
    /// Category the index represents.
    pub category: CategoryKey,
    /// Observation dates, strictly increasing.
    pub dates: Vec<Date>,
    /// Month-over-month percent change of the total-return index.
    #[serde(skip)]
    pub pct_change: Array1<f64>,
}

impl BenchmarkSeries {
    /// Create a new benchmark series.
    #[must_use]
    pub fn new(
        ticker: Ticker,
        name: impl Into<String>,
        category: CategoryKey,
        dates: Vec<Date>,
        pct_change: Array1<f64>,
    ) -> Self {
        debug_assert_eq!(dates.len(), pct_change.len());
        Self { ticker, name: name.into(), category, dates, pct_change }
    }

    /// Number of observations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if the series is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
