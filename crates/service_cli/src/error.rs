//! CLI error types.

use pricer_core::types::PricingError;
use pricer_risk::finite_difference::FdConfigError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the command-line driver.
#[derive(Debug, Error)]
pub enum CliError {
    /// Rejected option parameters.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Invalid configuration source.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid finite-difference settings.
    #[error("Finite-difference configuration error: {0}")]
    FdConfig(#[from] FdConfigError),

    /// JSON rendering failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
