#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/fundattr/fundattr/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod fund;
pub use fund::{FundRecord, MIN_RETURN_PERIODS, Ticker};

mod category;
pub use category::{CategoryConfig, CategoryKey};

mod factor;
pub use factor::{BENCHMARK_FACTOR, Factor, FactorSet, INTERCEPT};

mod benchmark;
pub use benchmark::BenchmarkSeries;

mod result;
pub use result::RegressionResult;

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
