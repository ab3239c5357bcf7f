#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/fundattr/fundattr/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod align;
pub use align::{AlignedWindow, align};

mod transform;
pub use transform::{excess_benchmark_returns, excess_fund_returns};

mod variants;
pub use variants::{
    FitOutcome, benchmark_capm, benchmark_correlation, capm, fit_factors, five_factor,
    three_factor,
};

mod aggregate;
pub use aggregate::{CategoryAggregate, ModelVariant, aggregate_all, aggregate_category};

mod error;
pub use error::{ModelError, SkipReason};

/// Re-export commonly used types.
pub mod prelude {
    pub use fundattr_primitives::{
        BenchmarkSeries, CategoryConfig, CategoryKey, Factor, FactorSet, FundRecord,
        RegressionResult, Ticker,
    };

    pub use super::{
        CategoryAggregate, FitOutcome, ModelError, ModelVariant, SkipReason, aggregate_all,
    };
}
