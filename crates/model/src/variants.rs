//! Model variants: parametrized fits of the factor regression engine.
//!
//! All four named models are thin presets over [`fit_factors`] (or its
//! three-series sibling [`benchmark_capm`]), so the variants cannot drift
//! apart in how they align windows, build responses, or fit.

use fundattr_math::{MathError, ols, pearson};
use fundattr_primitives::{
    BENCHMARK_FACTOR, BenchmarkSeries, Date, Factor, FactorSet, FundRecord, INTERCEPT,
    RegressionResult,
};
use ndarray::{Array1, Array2};

use crate::{
    SkipReason,
    align::align,
    transform::{PCT_SCALE, excess_benchmark_returns, excess_fund_returns},
};

/// Outcome of fitting one model variant for one fund.
///
/// A skipped fund is not an error: callers pattern-match and move on,
/// never substituting a default coefficient.
#[derive(Debug, Clone)]
pub enum FitOutcome {
    /// The regression succeeded.
    Fitted(RegressionResult),
    /// The fund produced no result; the reason says why.
    Skipped(SkipReason),
}

impl FitOutcome {
    /// Whether the fit succeeded.
    #[must_use]
    pub const fn is_fitted(&self) -> bool {
        matches!(self, Self::Fitted(_))
    }

    /// The fitted result, if any.
    #[must_use]
    pub fn fitted(self) -> Option<RegressionResult> {
        match self {
            Self::Fitted(result) => Some(result),
            Self::Skipped(_) => None,
        }
    }

    /// The skip reason, if the fund was skipped.
    #[must_use]
    pub const fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Self::Fitted(_) => None,
            Self::Skipped(reason) => Some(reason),
        }
    }
}

/// Single-factor market model (CAPM) over the default window.
#[must_use]
pub fn capm(fund: &FundRecord, factors: &FactorSet) -> FitOutcome {
    fit_factors(fund, factors, &[Factor::MktRf], None, None)
}

/// Fama-French three-factor model: market, size, value.
#[must_use]
pub fn three_factor(
    fund: &FundRecord,
    factors: &FactorSet,
    start: Option<Date>,
    end: Option<Date>,
) -> FitOutcome {
    fit_factors(fund, factors, &[Factor::MktRf, Factor::Smb, Factor::Hml], start, end)
}

/// Fama-French five-factor model: adds profitability and investment.
#[must_use]
pub fn five_factor(
    fund: &FundRecord,
    factors: &FactorSet,
    start: Option<Date>,
    end: Option<Date>,
) -> FitOutcome {
    fit_factors(fund, factors, &Factor::ALL, start, end)
}

/// Regress a fund's excess returns on an arbitrary factor subset over an
/// explicit or default date window.
///
/// Aligns the fund and factor histories, builds the response
/// `nav_return * 100 - RF` and the design `[const | subset columns]`, and
/// fits OLS with HC0 standard errors. Ineligible funds, misaligned
/// windows, and non-identifiable or singular designs all come back as
/// [`FitOutcome::Skipped`].
#[must_use]
pub fn fit_factors(
    fund: &FundRecord,
    factors: &FactorSet,
    subset: &[Factor],
    start: Option<Date>,
    end: Option<Date>,
) -> FitOutcome {
    if !fund.is_eligible() {
        return FitOutcome::Skipped(SkipReason::Ineligible { periods: fund.usable_returns() });
    }

    let window = match align(&[&fund.dates, &factors.dates], start, end) {
        Ok(window) => window,
        Err(reason) => return FitOutcome::Skipped(reason),
    };

    let fund_rows = response_rows(&window.rows[0]);
    let factor_rows = &window.rows[1];
    if fund_rows.len() != factor_rows.len() {
        return FitOutcome::Skipped(SkipReason::Misaligned {
            lengths: vec![fund_rows.len(), factor_rows.len()],
        });
    }

    let rf = gather(&factors.rf, factor_rows);
    let nav_returns = gather(&fund.nav_return, fund_rows);
    let y = excess_fund_returns(&nav_returns, &rf);

    let n = factor_rows.len();
    let mut x = Array2::ones((n, subset.len() + 1));
    for (j, &factor) in subset.iter().enumerate() {
        let column = factors.column(factor);
        for (i, &row) in factor_rows.iter().enumerate() {
            x[[i, j + 1]] = column[row];
        }
    }

    let mut names = Vec::with_capacity(subset.len() + 1);
    names.push(INTERCEPT.to_string());
    names.extend(subset.iter().map(|f| f.name().to_string()));

    finish_fit(&y, &x, names)
}

/// Single-index CAPM against the fund's category benchmark.
///
/// The benchmark excess return replaces the market factor; its coefficient
/// is reported under the name `"benchmark"`, so access is name-based like
/// every other variant.
#[must_use]
pub fn benchmark_capm(
    fund: &FundRecord,
    factors: &FactorSet,
    benchmark: &BenchmarkSeries,
    start: Option<Date>,
    end: Option<Date>,
) -> FitOutcome {
    if !fund.is_eligible() {
        return FitOutcome::Skipped(SkipReason::Ineligible { periods: fund.usable_returns() });
    }

    let window = match align(&[&fund.dates, &factors.dates, &benchmark.dates], start, end) {
        Ok(window) => window,
        Err(reason) => return FitOutcome::Skipped(reason),
    };

    let fund_rows = response_rows(&window.rows[0]);
    let factor_rows = &window.rows[1];
    let bench_rows = &window.rows[2];
    if fund_rows.len() != factor_rows.len() {
        return FitOutcome::Skipped(SkipReason::Misaligned {
            lengths: vec![fund_rows.len(), factor_rows.len(), bench_rows.len()],
        });
    }

    let rf = gather(&factors.rf, factor_rows);
    let y = excess_fund_returns(&gather(&fund.nav_return, fund_rows), &rf);
    let regressor = excess_benchmark_returns(&gather(&benchmark.pct_change, bench_rows), &rf);

    let n = fund_rows.len();
    let mut x = Array2::ones((n, 2));
    for i in 0..n {
        x[[i, 1]] = regressor[i];
    }

    finish_fit(&y, &x, vec![INTERCEPT.to_string(), BENCHMARK_FACTOR.to_string()])
}

/// Pearson correlation between a fund's scaled NAV returns and a
/// benchmark's percent changes over the aligned window.
///
/// A descriptive statistic, not a fitted model. Returns `None` when the
/// windows cannot be aligned; a zero-variance input propagates as NaN.
#[must_use]
pub fn benchmark_correlation(
    fund: &FundRecord,
    benchmark: &BenchmarkSeries,
    start: Option<Date>,
    end: Option<Date>,
) -> Option<f64> {
    let window = align(&[&fund.dates, &benchmark.dates], start, end).ok()?;

    let fund_rows = response_rows(&window.rows[0]);
    let bench_rows = &window.rows[1];
    if fund_rows.len() != bench_rows.len() {
        return None;
    }

    let fund_pct: Vec<f64> =
        gather(&fund.nav_return, fund_rows).iter().map(|r| r * PCT_SCALE).collect();
    let bench_pct = gather(&benchmark.pct_change, bench_rows);

    pearson(&fund_pct, &bench_pct).ok()
}

/// Rows usable as a regression response: the fund's first record has no
/// defined return and is dropped.
fn response_rows(rows: &[usize]) -> &[usize] {
    if rows.first() == Some(&0) { &rows[1..] } else { rows }
}

fn gather(values: &Array1<f64>, rows: &[usize]) -> Vec<f64> {
    rows.iter().map(|&i| values[i]).collect()
}

fn finish_fit(y: &Array1<f64>, x: &Array2<f64>, names: Vec<String>) -> FitOutcome {
    match ols(y, x) {
        Ok(fit) => {
            let coefficients =
                names.iter().cloned().zip(fit.coefficients.iter().copied()).collect();
            let std_errors = names.into_iter().zip(fit.std_errors.iter().copied()).collect();
            FitOutcome::Fitted(RegressionResult::new(coefficients, std_errors, fit.r_squared))
        }
        Err(MathError::InsufficientData { rows, cols }) => {
            FitOutcome::Skipped(SkipReason::InsufficientData { rows, cols })
        }
        // Singular and degenerate designs are equally non-identifiable.
        Err(_) => FitOutcome::Skipped(SkipReason::InsufficientData {
            rows: x.nrows(),
            cols: x.ncols(),
        }),
    }
}
