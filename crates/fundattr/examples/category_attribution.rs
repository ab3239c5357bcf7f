//! Example: Category-Level Performance Attribution with Synthetic Data
//!
//! This example demonstrates the full attribution pipeline:
//! 1. Build a synthetic universe of funds across two categories
//! 2. Run the five-factor model for every fund
//! 3. Aggregate per-category statistics and outliers
//! 4. Compare a benchmark-relative CAPM for one category

use std::collections::HashMap;

use ndarray::Array1;
use rand::{Rng, SeedableRng, rngs::StdRng};

use fundattr::{
    model::{ModelVariant, aggregate_all, benchmark_correlation},
    primitives::{
        BenchmarkSeries, CategoryConfig, CategoryKey, Date, FactorSet, FundRecord, Ticker,
    },
};

const MONTHS: usize = 120;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Category Performance Attribution ===\n");

    let mut rng = StdRng::seed_from_u64(7);
    let factors = synthetic_factors(&mut rng);

    let large_blend = CategoryKey::new("US Equity", "Large Blend");
    let small_value = CategoryKey::new("US Equity", "Small Value");

    // =========================================================================
    // BUILD THE FUND UNIVERSE
    // =========================================================================

    let blend_specs = [("ALPHX", 0.25, 1.0), ("BETAX", 0.05, 1.1), ("GAMMX", -0.10, 0.9)];
    let value_specs = [("DELTX", 0.15, 0.95), ("EPSIX", 0.40, 1.05)];

    let mut funds = Vec::new();
    let mut config_entries = Vec::new();
    for (ticker, alpha, beta) in blend_specs {
        funds.push(synthetic_fund(&mut rng, ticker, large_blend.clone(), &factors, alpha, beta));
        config_entries.push((Ticker::new(ticker), large_blend.clone()));
    }
    for (ticker, alpha, beta) in value_specs {
        funds.push(synthetic_fund(&mut rng, ticker, small_value.clone(), &factors, alpha, beta));
        config_entries.push((Ticker::new(ticker), small_value.clone()));
    }

    let benchmark = synthetic_benchmark(&mut rng, &factors, large_blend.clone());
    let config = CategoryConfig::new(
        config_entries,
        [(large_blend.clone(), benchmark.ticker.clone())],
    );
    let benchmarks: HashMap<CategoryKey, BenchmarkSeries> =
        [(large_blend.clone(), benchmark.clone())].into();

    println!(
        "Universe: {} funds, {} categories, {} months of data\n",
        funds.len(),
        config.n_funds(),
        MONTHS
    );

    // =========================================================================
    // FIVE-FACTOR ATTRIBUTION PER CATEGORY
    // =========================================================================

    let aggregates = aggregate_all(
        &config,
        &funds,
        &factors,
        &benchmarks,
        ModelVariant::FiveFactor,
        3,
    )?;
    for aggregate in &aggregates {
        aggregate.print_summary();
    }

    // =========================================================================
    // BENCHMARK-RELATIVE VIEW FOR LARGE BLEND
    // =========================================================================

    println!("Benchmark-relative CAPM for {large_blend}:");
    let blend_funds: Vec<FundRecord> =
        funds.iter().filter(|f| f.category == large_blend).cloned().collect();
    let blend_config = CategoryConfig::new(
        blend_funds.iter().map(|f| (f.ticker.clone(), large_blend.clone())),
        [(large_blend.clone(), benchmark.ticker.clone())],
    );
    let aggregates = aggregate_all(
        &blend_config,
        &blend_funds,
        &factors,
        &benchmarks,
        ModelVariant::BenchmarkCapm,
        3,
    )?;
    for aggregate in &aggregates {
        aggregate.print_summary();
    }

    for fund in &blend_funds {
        if let Some(corr) = benchmark_correlation(fund, &benchmark, None, None) {
            println!("  corr({}, {}) = {corr:.4}", fund.ticker, benchmark.ticker);
        }
    }

    Ok(())
}

fn monthly_dates() -> Vec<Date> {
    (0..MONTHS)
        .map(|m| {
            Date::from_ymd_opt(2015 + (m / 12) as i32, (m % 12) as u32 + 1, 28).unwrap()
        })
        .collect()
}

fn synthetic_factors(rng: &mut StdRng) -> FactorSet {
    let draw = |rng: &mut StdRng, scale: f64| {
        Array1::from_iter((0..MONTHS).map(|_| rng.gen_range(-1.0..1.0) * scale))
    };
    FactorSet::new(
        monthly_dates(),
        draw(rng, 4.0),
        draw(rng, 2.0),
        draw(rng, 2.0),
        draw(rng, 1.5),
        draw(rng, 1.5),
        Array1::from_elem(MONTHS, 0.3),
    )
}

/// A fund whose excess return is `alpha + beta * Mkt-RF` plus noise.
fn synthetic_fund(
    rng: &mut StdRng,
    ticker: &str,
    category: CategoryKey,
    factors: &FactorSet,
    alpha: f64,
    beta: f64,
) -> FundRecord {
    let mut nav = Array1::from_elem(MONTHS, 100.0);
    for t in 1..MONTHS {
        let excess = alpha + beta * factors.mkt_rf[t] + rng.gen_range(-0.5..0.5);
        nav[t] = nav[t - 1] * (1.0 + (excess + factors.rf[t]) / 100.0);
    }
    FundRecord::new(Ticker::new(ticker), category, factors.dates.clone(), nav)
}

fn synthetic_benchmark(
    rng: &mut StdRng,
    factors: &FactorSet,
    category: CategoryKey,
) -> BenchmarkSeries {
    let pct_change = Array1::from_iter(
        (0..MONTHS).map(|t| factors.mkt_rf[t] + factors.rf[t] + rng.gen_range(-0.2..0.2)),
    );
    BenchmarkSeries::new(
        Ticker::new("RUITR"),
        "Russell 1000 TR USD",
        category,
        factors.dates.clone(),
        pct_change,
    )
}
