//! Finite-difference configuration.
//!
//! Provides [`FdConfig`] for the bump size and the per-Greek tolerances
//! used when comparing finite differences against closed-form and adjoint
//! values.

use std::fmt;

use thiserror::Error;

/// One of the reported Greeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Greek {
    /// ∂V/∂S
    Delta,
    /// ∂²V/∂S²
    Gamma,
    /// ∂V/∂σ
    Vega,
    /// -∂V/∂T
    Theta,
    /// ∂V/∂r
    Rho,
    /// ∂V/∂K
    DualDelta,
}

impl Greek {
    /// All Greeks in report order.
    pub const ALL: [Greek; 6] = [
        Greek::Delta,
        Greek::Gamma,
        Greek::Vega,
        Greek::Theta,
        Greek::Rho,
        Greek::DualDelta,
    ];

    /// Lowercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            Greek::Delta => "delta",
            Greek::Gamma => "gamma",
            Greek::Vega => "vega",
            Greek::Theta => "theta",
            Greek::Rho => "rho",
            Greek::DualDelta => "dual_delta",
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bump size and verification tolerances.
///
/// # Default Values
///
/// | Field | Default |
/// |-------|---------|
/// | `epsilon` | 0.01 |
/// | `delta_tolerance` | 1e-3 |
/// | `gamma_tolerance` | 1e-1 |
/// | `vega_tolerance` | 5e-2 |
/// | `theta_tolerance` | 2e-3 |
/// | `rho_tolerance` | 5e-2 |
/// | `dual_delta_tolerance` | 1e-3 |
///
/// Vega and rho central differences carry up to about 2e-2 of truncation
/// error at the default bump away from the money.
///
/// # Examples
///
/// ```rust
/// use pricer_risk::finite_difference::{FdConfig, Greek};
///
/// let config = FdConfig::builder()
///     .epsilon(1e-3)
///     .vega_tolerance(1e-3)
///     .build()
///     .unwrap();
/// assert_eq!(config.tolerance(Greek::Vega), 1e-3);
/// assert_eq!(config.tolerance(Greek::Delta), 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FdConfig {
    /// Absolute bump applied to each parameter.
    pub epsilon: f64,
    /// Maximum |fd - reference| for delta.
    pub delta_tolerance: f64,
    /// Maximum |fd - reference| for gamma.
    pub gamma_tolerance: f64,
    /// Maximum |fd - reference| for vega.
    pub vega_tolerance: f64,
    /// Maximum |fd - reference| for theta.
    pub theta_tolerance: f64,
    /// Maximum |fd - reference| for rho.
    pub rho_tolerance: f64,
    /// Maximum |fd - reference| for the dual delta.
    pub dual_delta_tolerance: f64,
}

impl FdConfig {
    /// Default bump size.
    pub const DEFAULT_EPSILON: f64 = 0.01;

    /// Creates a new builder.
    pub fn builder() -> FdConfigBuilder {
        FdConfigBuilder::default()
    }

    /// Returns the tolerance for one Greek.
    #[inline]
    pub fn tolerance(&self, greek: Greek) -> f64 {
        match greek {
            Greek::Delta => self.delta_tolerance,
            Greek::Gamma => self.gamma_tolerance,
            Greek::Vega => self.vega_tolerance,
            Greek::Theta => self.theta_tolerance,
            Greek::Rho => self.rho_tolerance,
            Greek::DualDelta => self.dual_delta_tolerance,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`FdConfigError`] if the bump or any tolerance is not finite and positive.
    pub fn validate(&self) -> Result<(), FdConfigError> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(FdConfigError::InvalidEpsilon(self.epsilon));
        }
        for greek in Greek::ALL {
            let tolerance = self.tolerance(greek);
            if !tolerance.is_finite() || tolerance <= 0.0 {
                return Err(FdConfigError::InvalidTolerance { greek, tolerance });
            }
        }
        Ok(())
    }
}

impl Default for FdConfig {
    fn default() -> Self {
        Self {
            epsilon: Self::DEFAULT_EPSILON,
            delta_tolerance: 1e-3,
            gamma_tolerance: 1e-1,
            vega_tolerance: 5e-2,
            theta_tolerance: 2e-3,
            rho_tolerance: 5e-2,
            dual_delta_tolerance: 1e-3,
        }
    }
}

/// Builder for [`FdConfig`].
#[derive(Debug, Default)]
pub struct FdConfigBuilder {
    epsilon: Option<f64>,
    delta_tolerance: Option<f64>,
    gamma_tolerance: Option<f64>,
    vega_tolerance: Option<f64>,
    theta_tolerance: Option<f64>,
    rho_tolerance: Option<f64>,
    dual_delta_tolerance: Option<f64>,
}

impl FdConfigBuilder {
    /// Sets the bump size (default: 0.01).
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    /// Sets the delta tolerance (default: 1e-3).
    pub fn delta_tolerance(mut self, tolerance: f64) -> Self {
        self.delta_tolerance = Some(tolerance);
        self
    }

    /// Sets the gamma tolerance (default: 1e-1).
    pub fn gamma_tolerance(mut self, tolerance: f64) -> Self {
        self.gamma_tolerance = Some(tolerance);
        self
    }

    /// Sets the vega tolerance (default: 5e-2).
    pub fn vega_tolerance(mut self, tolerance: f64) -> Self {
        self.vega_tolerance = Some(tolerance);
        self
    }

    /// Sets the theta tolerance (default: 2e-3).
    pub fn theta_tolerance(mut self, tolerance: f64) -> Self {
        self.theta_tolerance = Some(tolerance);
        self
    }

    /// Sets the rho tolerance (default: 5e-2).
    pub fn rho_tolerance(mut self, tolerance: f64) -> Self {
        self.rho_tolerance = Some(tolerance);
        self
    }

    /// Sets the dual delta tolerance (default: 1e-3).
    pub fn dual_delta_tolerance(mut self, tolerance: f64) -> Self {
        self.dual_delta_tolerance = Some(tolerance);
        self
    }

    /// Builds the configuration, validating all fields.
    ///
    /// # Errors
    ///
    /// Returns [`FdConfigError`] if any field is invalid.
    pub fn build(self) -> Result<FdConfig, FdConfigError> {
        let defaults = FdConfig::default();
        let config = FdConfig {
            epsilon: self.epsilon.unwrap_or(defaults.epsilon),
            delta_tolerance: self.delta_tolerance.unwrap_or(defaults.delta_tolerance),
            gamma_tolerance: self.gamma_tolerance.unwrap_or(defaults.gamma_tolerance),
            vega_tolerance: self.vega_tolerance.unwrap_or(defaults.vega_tolerance),
            theta_tolerance: self.theta_tolerance.unwrap_or(defaults.theta_tolerance),
            rho_tolerance: self.rho_tolerance.unwrap_or(defaults.rho_tolerance),
            dual_delta_tolerance: self
                .dual_delta_tolerance
                .unwrap_or(defaults.dual_delta_tolerance),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Error type for [`FdConfig`] validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FdConfigError {
    /// Bump size not finite and positive.
    #[error("Invalid epsilon: must be finite and positive, got {0}")]
    InvalidEpsilon(f64),

    /// Tolerance not finite and positive.
    #[error("Invalid {greek} tolerance: must be finite and positive, got {tolerance}")]
    InvalidTolerance {
        /// Greek the tolerance belongs to
        greek: Greek,
        /// Rejected value
        tolerance: f64,
    },
}
