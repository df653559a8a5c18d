//! # pricer_core: Mathematical Foundation for European Option Greeks
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Standard normal distribution functions (`math::distributions`)
//! - Option parameter value type and bump selector (`types::params`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::{norm_cdf, norm_pdf};
//! use pricer_core::types::{OptionParams, Parameter};
//!
//! let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! assert!(!params.is_degenerate());
//!
//! let bumped = params.with_shift(Parameter::Spot, 1.0);
//! assert_eq!(bumped.spot(), 101.0);
//!
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
//! assert!(norm_pdf(0.0_f64) > 0.39);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionParams` and `Parameter`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
