//! Cross-sectional aggregation of per-fund regression results.

use std::collections::HashMap;

use fundattr_math::{mean, std_pop};
use fundattr_primitives::{
    BenchmarkSeries, CategoryConfig, CategoryKey, FactorSet, FundRecord, INTERCEPT,
    RegressionResult, Ticker,
};

use crate::{FitOutcome, ModelError, SkipReason, variants};

/// Which factor regression to run across funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelVariant {
    /// Single-factor market model.
    Capm,
    /// Market, size, value.
    ThreeFactor,
    /// Market, size, value, profitability, investment.
    FiveFactor,
    /// Category benchmark index replacing the market factor.
    BenchmarkCapm,
}

/// Cross-sectional summary of one category's fitted funds.
///
/// Produced once per (category, variant) request and never mutated.
/// Summary statistics over zero fitted funds are NaN, never zero; the
/// reporting layer must handle that explicitly.
#[derive(Debug, Clone)]
pub struct CategoryAggregate {
    /// The category summarized.
    pub category: CategoryKey,
    /// Successful per-fund fits, in input order.
    pub results: Vec<(Ticker, RegressionResult)>,
    /// Funds that produced no result, with the reason.
    pub skipped: Vec<(Ticker, SkipReason)>,
    /// Mean of fund alphas.
    pub alpha_mean: f64,
    /// Population (ddof = 0) standard deviation of fund alphas.
    pub alpha_std: f64,
    /// Mean of each non-intercept coefficient across fitted funds.
    pub coefficient_means: Vec<(String, f64)>,
    /// Tickers ranked by alpha, best first.
    pub ranked: Vec<Ticker>,
    /// Top-N tickers by alpha, from the aggregation request.
    pub top: Vec<Ticker>,
    /// Funds with alpha above mean + one stdev.
    pub above: Vec<Ticker>,
    /// Funds with alpha below mean - one stdev.
    pub below: Vec<Ticker>,
}

impl CategoryAggregate {
    /// Number of funds that produced no result.
    #[must_use]
    pub const fn skip_count(&self) -> usize {
        self.skipped.len()
    }

    /// Fund with the maximum alpha, if any fund fitted.
    #[must_use]
    pub fn top_performer(&self) -> Option<&Ticker> {
        self.ranked.first()
    }

    /// Mean and population stdev of a named coefficient over a subset of
    /// fitted funds, e.g. the beta of the above-one-stdev outliers.
    #[must_use]
    pub fn coefficient_stats(&self, tickers: &[Ticker], name: &str) -> (f64, f64) {
        let values: Vec<f64> = tickers
            .iter()
            .filter_map(|ticker| {
                self.results
                    .iter()
                    .find(|(t, _)| t == ticker)
                    .and_then(|(_, result)| result.get(name))
            })
            .collect();
        (mean(&values), std_pop(&values))
    }

    /// Print a concise summary of the aggregate.
    pub fn print_summary(&self) {
        println!("\n{:=<72}", "");
        println!("CATEGORY ATTRIBUTION: {}", self.category);
        println!("{:=<72}", "");
        println!("Funds fitted: {}   skipped: {}", self.results.len(), self.skip_count());
        println!("Alpha mean: {:>9.4}   stdev: {:>9.4}", self.alpha_mean, self.alpha_std);
        for (name, value) in &self.coefficient_means {
            println!("  mean {name:<12} {value:>9.4}");
        }
        if let Some(best) = self.top_performer() {
            println!("Top performer: {best}");
        }
        if !self.above.is_empty() {
            println!("Above one stdev: {}", join_tickers(&self.above));
        }
        if !self.below.is_empty() {
            println!("Below one stdev: {}", join_tickers(&self.below));
        }
        println!("{:=<72}\n", "");
    }
}

fn join_tickers(tickers: &[Ticker]) -> String {
    tickers.iter().map(Ticker::as_str).collect::<Vec<_>>().join(", ")
}

/// Run `variant` for every fund in a single category.
///
/// Skipped funds are collected with their reasons and never abort the
/// aggregation; statistics are computed over the complete set of
/// successful fits.
///
/// # Errors
/// `MissingBenchmark` when the benchmark CAPM is requested without a
/// benchmark series.
pub fn aggregate_category(
    category: CategoryKey,
    funds: &[&FundRecord],
    factors: &FactorSet,
    benchmark: Option<&BenchmarkSeries>,
    variant: ModelVariant,
    top_n: usize,
) -> Result<CategoryAggregate, ModelError> {
    let mut results: Vec<(Ticker, RegressionResult)> = Vec::new();
    let mut skipped: Vec<(Ticker, SkipReason)> = Vec::new();

    for fund in funds {
        let outcome = match variant {
            ModelVariant::Capm => variants::capm(fund, factors),
            ModelVariant::ThreeFactor => variants::three_factor(fund, factors, None, None),
            ModelVariant::FiveFactor => variants::five_factor(fund, factors, None, None),
            ModelVariant::BenchmarkCapm => {
                let benchmark =
                    benchmark.ok_or_else(|| ModelError::MissingBenchmark(category.clone()))?;
                variants::benchmark_capm(fund, factors, benchmark, None, None)
            }
        };

        match outcome {
            FitOutcome::Fitted(result) => results.push((fund.ticker.clone(), result)),
            FitOutcome::Skipped(reason) => skipped.push((fund.ticker.clone(), reason)),
        }
    }

    let alphas: Vec<f64> = results.iter().map(|(_, r)| r.alpha()).collect();
    let alpha_mean = mean(&alphas);
    let alpha_std = std_pop(&alphas);

    let mut coefficient_means = Vec::new();
    if let Some((_, first)) = results.first() {
        for name in first.names().filter(|n| *n != INTERCEPT) {
            let values: Vec<f64> =
                results.iter().filter_map(|(_, r)| r.get(name)).collect();
            coefficient_means.push((name.to_string(), mean(&values)));
        }
    }

    let mut order: Vec<usize> = (0..results.len()).collect();
    order.sort_by(|&a, &b| {
        alphas[b].partial_cmp(&alphas[a]).unwrap_or(std::cmp::Ordering::Equal)
    });
    let ranked: Vec<Ticker> = order.iter().map(|&i| results[i].0.clone()).collect();
    let top: Vec<Ticker> = ranked.iter().take(top_n).cloned().collect();

    // NaN thresholds (empty category) classify nothing as an outlier.
    let above: Vec<Ticker> = results
        .iter()
        .zip(&alphas)
        .filter(|&(_, &alpha)| alpha > alpha_mean + alpha_std)
        .map(|((ticker, _), _)| ticker.clone())
        .collect();
    let below: Vec<Ticker> = results
        .iter()
        .zip(&alphas)
        .filter(|&(_, &alpha)| alpha < alpha_mean - alpha_std)
        .map(|((ticker, _), _)| ticker.clone())
        .collect();

    Ok(CategoryAggregate {
        category,
        results,
        skipped,
        alpha_mean,
        alpha_std,
        coefficient_means,
        ranked,
        top,
        above,
        below,
    })
}

/// Run `variant` across every category in the universe.
///
/// Funds are grouped by the category on their record; every ticker must be
/// present in the configuration with a matching category, and for the
/// benchmark CAPM every populated category must have a benchmark series.
///
/// # Errors
/// `UnknownTicker` or `CategoryMismatch` when a fund disagrees with the
/// configuration; `MissingBenchmark` for an uncovered benchmark-CAPM
/// category.
pub fn aggregate_all(
    config: &CategoryConfig,
    funds: &[FundRecord],
    factors: &FactorSet,
    benchmarks: &HashMap<CategoryKey, BenchmarkSeries>,
    variant: ModelVariant,
    top_n: usize,
) -> Result<Vec<CategoryAggregate>, ModelError> {
    let mut by_category: Vec<(CategoryKey, Vec<&FundRecord>)> = Vec::new();
    for fund in funds {
        let configured = config
            .category_of(&fund.ticker)
            .ok_or_else(|| ModelError::UnknownTicker(fund.ticker.clone()))?;
        if configured != &fund.category {
            return Err(ModelError::CategoryMismatch {
                ticker: fund.ticker.clone(),
                configured: configured.clone(),
                recorded: fund.category.clone(),
            });
        }

        match by_category.iter_mut().find(|(c, _)| c == &fund.category) {
            Some((_, group)) => group.push(fund),
            None => by_category.push((fund.category.clone(), vec![fund])),
        }
    }

    let mut aggregates = Vec::with_capacity(by_category.len());
    for (category, group) in by_category {
        let benchmark = benchmarks.get(&category);
        if variant == ModelVariant::BenchmarkCapm && benchmark.is_none() {
            return Err(ModelError::MissingBenchmark(category));
        }
        aggregates.push(aggregate_category(category, &group, factors, benchmark, variant, top_n)?);
    }

    Ok(aggregates)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use fundattr_primitives::Date;
    use ndarray::Array1;

    use super::*;

    fn monthly_dates(n: usize) -> Vec<Date> {
        (0..n)
            .map(|m| Date::from_ymd_opt(2000 + (m / 12) as i32, (m % 12) as u32 + 1, 28).unwrap())
            .collect()
    }

    fn factor_set(n: usize) -> FactorSet {
        FactorSet::new(
            monthly_dates(n),
            Array1::from_iter((0..n).map(|i| (i as f64 * 0.7).sin() * 3.0)),
            Array1::from_iter((0..n).map(|i| (i as f64 * 1.3).cos() * 2.0)),
            Array1::from_iter((0..n).map(|i| (i as f64 * 2.1 + 0.5).sin())),
            Array1::from_iter((0..n).map(|i| (i as f64 * 0.9).cos() * 1.5)),
            Array1::from_iter((0..n).map(|i| (i as f64 * 1.7).sin() * 0.8)),
            Array1::from_elem(n, 0.3),
        )
    }

    fn category() -> CategoryKey {
        CategoryKey::new("US Equity", "Large Blend")
    }

    /// Fund whose CAPM alpha is exactly `alpha` with unit beta.
    fn fund_with_alpha(ticker: &str, factors: &FactorSet, alpha: f64) -> FundRecord {
        let n = factors.len();
        let mut nav = Array1::from_elem(n, 100.0);
        for t in 1..n {
            let excess = alpha + factors.mkt_rf[t];
            nav[t] = nav[t - 1] * (1.0 + (excess + factors.rf[t]) / 100.0);
        }
        FundRecord::new(Ticker::new(ticker), category(), factors.dates.clone(), nav)
    }

    fn short_fund(ticker: &str) -> FundRecord {
        FundRecord::new(
            Ticker::new(ticker),
            category(),
            monthly_dates(24),
            Array1::from_elem(24, 10.0),
        )
    }

    #[test]
    fn outlier_classification_population_stdev() {
        let factors = factor_set(72);
        let funds: Vec<FundRecord> = [("A", 1.0), ("B", 2.0), ("C", 3.0), ("D", 100.0)]
            .iter()
            .map(|(t, a)| fund_with_alpha(t, &factors, *a))
            .collect();
        let refs: Vec<&FundRecord> = funds.iter().collect();

        let agg = aggregate_category(category(), &refs, &factors, None, ModelVariant::Capm, 2)
            .unwrap();

        assert_eq!(agg.results.len(), 4);
        assert_eq!(agg.skip_count(), 0);
        assert_relative_eq!(agg.alpha_mean, 26.5, epsilon = 1e-6);
        assert_relative_eq!(agg.alpha_std, 1801.25_f64.sqrt(), epsilon = 1e-6);
        // 100 > 26.5 + 42.44; no alpha is below 26.5 - 42.44.
        assert_eq!(agg.above, vec![Ticker::new("D")]);
        assert!(agg.below.is_empty());
        assert_eq!(agg.top_performer(), Some(&Ticker::new("D")));
        assert_eq!(agg.ranked, vec![
            Ticker::new("D"),
            Ticker::new("C"),
            Ticker::new("B"),
            Ticker::new("A")
        ]);
        assert_eq!(agg.top, vec![Ticker::new("D"), Ticker::new("C")]);
    }

    #[test]
    fn coefficient_means_cover_factors() {
        let factors = factor_set(72);
        let funds: Vec<FundRecord> = [("A", 0.5), ("B", 1.5)]
            .iter()
            .map(|(t, a)| fund_with_alpha(t, &factors, *a))
            .collect();
        let refs: Vec<&FundRecord> = funds.iter().collect();

        let agg = aggregate_category(category(), &refs, &factors, None, ModelVariant::Capm, 5)
            .unwrap();

        assert_eq!(agg.coefficient_means.len(), 1);
        let (name, beta_mean) = &agg.coefficient_means[0];
        assert_eq!(name, "Mkt-RF");
        assert_relative_eq!(*beta_mean, 1.0, epsilon = 1e-6);

        let (beta_mean, beta_std) = agg.coefficient_stats(&agg.ranked, "Mkt-RF");
        assert_relative_eq!(beta_mean, 1.0, epsilon = 1e-6);
        assert_relative_eq!(beta_std, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn all_skipped_category_has_undefined_statistics() {
        let factors = factor_set(72);
        let funds = [short_fund("S1"), short_fund("S2")];
        let refs: Vec<&FundRecord> = funds.iter().collect();

        let agg = aggregate_category(category(), &refs, &factors, None, ModelVariant::Capm, 5)
            .unwrap();

        assert!(agg.results.is_empty());
        assert_eq!(agg.skip_count(), 2);
        assert!(agg.alpha_mean.is_nan());
        assert!(agg.alpha_std.is_nan());
        assert!(agg.ranked.is_empty());
        assert!(agg.above.is_empty() && agg.below.is_empty());
        assert!(agg.skipped.iter().all(|(_, r)| matches!(r, SkipReason::Ineligible { .. })));
    }

    #[test]
    fn skip_reasons_recorded_alongside_results() {
        let factors = factor_set(72);
        let good = fund_with_alpha("GOOD", &factors, 1.0);
        let young = short_fund("YOUNG");
        let funds = [good, young];
        let refs: Vec<&FundRecord> = funds.iter().collect();

        let agg = aggregate_category(category(), &refs, &factors, None, ModelVariant::Capm, 5)
            .unwrap();

        assert_eq!(agg.results.len(), 1);
        assert_eq!(agg.skipped.len(), 1);
        assert_eq!(agg.skipped[0].0, Ticker::new("YOUNG"));
    }

    #[test]
    fn benchmark_capm_requires_benchmark() {
        let factors = factor_set(72);
        let funds = [fund_with_alpha("A", &factors, 1.0)];
        let refs: Vec<&FundRecord> = funds.iter().collect();

        let result = aggregate_category(
            category(),
            &refs,
            &factors,
            None,
            ModelVariant::BenchmarkCapm,
            5,
        );

        assert!(matches!(result, Err(ModelError::MissingBenchmark(_))));
    }

    #[test]
    fn aggregate_all_groups_by_category() {
        let factors = factor_set(72);
        let growth = CategoryKey::new("US Equity", "Large Growth");
        let mut fund_a = fund_with_alpha("A", &factors, 1.0);
        fund_a.category = category();
        let mut fund_b = fund_with_alpha("B", &factors, 2.0);
        fund_b.category = growth.clone();

        let config = CategoryConfig::new(
            [
                (Ticker::new("A"), category()),
                (Ticker::new("B"), growth.clone()),
            ],
            [],
        );

        let aggregates = aggregate_all(
            &config,
            &[fund_a, fund_b],
            &factors,
            &HashMap::new(),
            ModelVariant::ThreeFactor,
            5,
        )
        .unwrap();

        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].category, category());
        assert_eq!(aggregates[1].category, growth);
        assert!(aggregates.iter().all(|a| a.results.len() == 1));
    }

    #[test]
    fn aggregate_all_rejects_unknown_ticker() {
        let factors = factor_set(72);
        let fund = fund_with_alpha("GHOST", &factors, 1.0);
        let config = CategoryConfig::default();

        let result = aggregate_all(
            &config,
            &[fund],
            &factors,
            &HashMap::new(),
            ModelVariant::Capm,
            5,
        );

        assert!(matches!(result, Err(ModelError::UnknownTicker(_))));
    }

    #[test]
    fn aggregate_all_rejects_category_mismatch() {
        let factors = factor_set(72);
        let fund = fund_with_alpha("DRIFT", &factors, 1.0);
        let config = CategoryConfig::new(
            [(Ticker::new("DRIFT"), CategoryKey::new("US Equity", "Small Value"))],
            [],
        );

        let result = aggregate_all(
            &config,
            &[fund],
            &factors,
            &HashMap::new(),
            ModelVariant::Capm,
            5,
        );

        assert!(matches!(result, Err(ModelError::CategoryMismatch { .. })));
    }

    #[test]
    fn aggregate_all_requires_benchmark_for_benchmark_capm() {
        let factors = factor_set(72);
        let fund = fund_with_alpha("A", &factors, 1.0);
        let config = CategoryConfig::new([(Ticker::new("A"), category())], []);

        let result = aggregate_all(
            &config,
            &[fund],
            &factors,
            &HashMap::new(),
            ModelVariant::BenchmarkCapm,
            5,
        );

        assert!(matches!(result, Err(ModelError::MissingBenchmark(_))));
    }
}
