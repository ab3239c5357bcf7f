//! # fundattr
//!
//! Factor-model performance attribution for mutual funds.
//!
//! This crate provides a unified interface to the fundattr ecosystem.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `math`: OLS regression and summary statistics
//! - `model`: Model variants and category aggregation
//!
//! ## Example
//!
//! ```rust,ignore
//! // With default features (all components):
//! use fundattr::primitives;
//! use fundattr::model;
//!
//! // Or with specific features only:
//! // [dependencies]
//! // fundattr = { version = "0.1", default-features = false, features = ["model"] }
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use fundattr_primitives as primitives;
#[cfg(feature = "math")]
#[doc(inline)]
pub use fundattr_math as math;
#[cfg(feature = "model")]
#[doc(inline)]
pub use fundattr_model as model;
