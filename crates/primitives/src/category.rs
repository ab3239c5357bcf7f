//! Morningstar category labels and universe configuration.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Ticker;

/// Two-level Morningstar category label: asset class plus style category,
/// e.g. "US Equity" / "Large Value".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryKey {
    /// Asset class, e.g. "US Equity".
    pub asset_class: String,
    /// Style category, e.g. "Large Value".
    pub category: String,
}

impl CategoryKey {
    /// Create a new category key.
    #[must_use]
    pub fn new(asset_class: impl Into<String>, category: impl Into<String>) -> Self {
        Self { asset_class: asset_class.into(), category: category.into() }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.asset_class, self.category)
    }
}

/// Immutable lookup tables for the fund universe.
///
/// Maps each fund ticker to its category and each category to the ticker of
/// its representative benchmark index. Built once by the data provider and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryConfig {
    fund_categories: HashMap<Ticker, CategoryKey>,
    benchmarks: HashMap<CategoryKey, Ticker>,
}

impl CategoryConfig {
    /// Create a configuration from ticker-to-category and
    /// category-to-benchmark pairs.
    #[must_use]
    pub fn new(
        fund_categories: impl IntoIterator<Item = (Ticker, CategoryKey)>,
        benchmarks: impl IntoIterator<Item = (CategoryKey, Ticker)>,
    ) -> Self {
        Self {
            fund_categories: fund_categories.into_iter().collect(),
            benchmarks: benchmarks.into_iter().collect(),
        }
    }

    /// Category of a fund ticker, if known.
    #[must_use]
    pub fn category_of(&self, ticker: &Ticker) -> Option<&CategoryKey> {
        self.fund_categories.get(ticker)
    }

    /// Benchmark index ticker for a category, if configured.
    #[must_use]
    pub fn benchmark_of(&self, category: &CategoryKey) -> Option<&Ticker> {
        self.benchmarks.get(category)
    }

    /// Number of configured fund tickers.
    #[must_use]
    pub fn n_funds(&self) -> usize {
        self.fund_categories.len()
    }

    /// Number of configured benchmark categories.
    #[must_use]
    pub fn n_categories(&self) -> usize {
        self.benchmarks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display() {
        let key = CategoryKey::new("US Equity", "Mid-Cap Growth");
        assert_eq!(key.to_string(), "US Equity / Mid-Cap Growth");
    }

    #[test]
    fn config_lookup() {
        let large_value = CategoryKey::new("US Equity", "Large Value");
        let config = CategoryConfig::new(
            [(Ticker::new("DODGX"), large_value.clone())],
            [(large_value.clone(), Ticker::new("RU10VATR"))],
        );

        assert_eq!(config.category_of(&Ticker::new("DODGX")), Some(&large_value));
        assert_eq!(config.category_of(&Ticker::new("MISSING")), None);
        assert_eq!(config.benchmark_of(&large_value), Some(&Ticker::new("RU10VATR")));
        assert_eq!(config.n_funds(), 1);
        assert_eq!(config.n_categories(), 1);
    }
}
