//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from parameter construction and pricing operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Degenerate parameters (non-positive spot, strike, expiry or volatility)
/// are not errors; they price to zero. These variants cover genuine faults.
///
/// # Variants
/// - `InvalidInput`: Non-finite parameter or invalid bump size
/// - `NumericalInstability`: Computation produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("spot is NaN".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: spot is NaN");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}
