//! Core option and error types.
//!
//! This module provides:
//! - `params`: `OptionParams` value type and the `Parameter` selector
//! - `error`: Structured error types for pricing operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionParams`], [`Parameter`] from `params`
//! - [`PricingError`] from `error`

pub mod error;
pub mod params;

pub use error::PricingError;
pub use params::{OptionParams, Parameter};
