//! Black-Scholes option parameters.
//!
//! This module provides:
//! - `OptionParams`: the five market/contract inputs of a European option
//! - `Parameter`: selector naming one of those inputs, used for bumping

use std::fmt;

use super::error::PricingError;

/// Selector for one of the five pricing inputs.
///
/// # Examples
/// ```
/// use pricer_core::types::Parameter;
///
/// assert_eq!(Parameter::Volatility.symbol(), "sigma");
/// assert_eq!(Parameter::ALL.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Parameter {
    /// Spot price (S)
    Spot,
    /// Strike price (K)
    Strike,
    /// Time to expiry in years (T)
    Expiry,
    /// Risk-free interest rate (r)
    Rate,
    /// Volatility (σ)
    Volatility,
}

impl Parameter {
    /// All parameters in positional order (S, K, T, r, sigma).
    pub const ALL: [Parameter; 5] = [
        Parameter::Spot,
        Parameter::Strike,
        Parameter::Expiry,
        Parameter::Rate,
        Parameter::Volatility,
    ];

    /// Conventional symbol used on the command line and in reports.
    pub fn symbol(&self) -> &'static str {
        match self {
            Parameter::Spot => "S",
            Parameter::Strike => "K",
            Parameter::Expiry => "T",
            Parameter::Rate => "r",
            Parameter::Volatility => "sigma",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Market and contract inputs of a European option.
///
/// All values are finite. Non-positive spot, strike, expiry or volatility is
/// accepted and marks the parameter set as degenerate: such sets price to
/// zero rather than failing.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionParams;
///
/// let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert_eq!(params.spot(), 100.0);
/// assert!(!params.is_degenerate());
///
/// // Zero expiry is degenerate, not an error
/// let expired = OptionParams::new(100.0, 100.0, 0.0, 0.05, 0.2).unwrap();
/// assert!(expired.is_degenerate());
///
/// // Non-finite input is an error
/// assert!(OptionParams::new(f64::NAN, 100.0, 1.0, 0.05, 0.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParams {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
}

impl OptionParams {
    /// Creates a parameter set, rejecting non-finite values.
    ///
    /// # Arguments
    /// * `spot` - Spot price (S)
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiry in years (T)
    /// * `rate` - Risk-free rate, annualised (r)
    /// * `volatility` - Volatility, annualised (σ)
    ///
    /// # Errors
    /// `PricingError::InvalidInput` naming the first non-finite parameter.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        let params = Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        };

        for parameter in Parameter::ALL {
            let value = params.get(parameter);
            if !value.is_finite() {
                return Err(PricingError::InvalidInput(format!(
                    "{} must be finite, got {}",
                    parameter, value
                )));
            }
        }

        Ok(params)
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the value of the selected parameter.
    #[inline]
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Spot => self.spot,
            Parameter::Strike => self.strike,
            Parameter::Expiry => self.expiry,
            Parameter::Rate => self.rate,
            Parameter::Volatility => self.volatility,
        }
    }

    /// Returns a copy with `shift` added to the selected parameter.
    ///
    /// The result is not re-validated; a shift may turn a valid set into a
    /// degenerate one (e.g. expiry bumped below zero).
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{OptionParams, Parameter};
    ///
    /// let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
    /// let down = params.with_shift(Parameter::Volatility, -0.01);
    /// assert!((down.volatility() - 0.19).abs() < 1e-15);
    /// assert_eq!(down.spot(), 100.0);
    /// ```
    #[must_use]
    pub fn with_shift(&self, parameter: Parameter, shift: f64) -> Self {
        let mut shifted = *self;
        match parameter {
            Parameter::Spot => shifted.spot += shift,
            Parameter::Strike => shifted.strike += shift,
            Parameter::Expiry => shifted.expiry += shift,
            Parameter::Rate => shifted.rate += shift,
            Parameter::Volatility => shifted.volatility += shift,
        }
        shifted
    }

    /// True when the Black-Scholes formula is undefined for these inputs
    /// (S <= 0, K <= 0, T <= 0 or σ <= 0).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.spot <= 0.0 || self.strike <= 0.0 || self.expiry <= 0.0 || self.volatility <= 0.0
    }
}
