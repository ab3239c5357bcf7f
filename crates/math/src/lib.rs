#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/fundattr/fundattr/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod linalg;
pub use linalg::{OlsResult, ols};

mod stats;
pub use stats::{mean, pearson, std_pop};

mod error;
pub use error::MathError;
