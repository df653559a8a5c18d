//! Black-Scholes pricing engine for a European call option.
//!
//! The engine runs in two stages:
//! 1. [`EuropeanOption`] holds the inputs.
//! 2. [`EuropeanOption::calculate`] runs the forward step and returns a
//!    [`PricedOption`] carrying the cached [`PricingState`]. Price and
//!    Greeks are pure reads on that value.
//!
//! Degenerate inputs (S <= 0, K <= 0, T <= 0 or σ <= 0) produce an all-zero
//! state and all-zero Greeks.

use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::types::{OptionParams, PricingError};
use tracing::trace;

use super::greeks::Greeks;

/// European call option under Black-Scholes dynamics.
///
/// # Examples
/// ```
/// use pricer_models::analytical::EuropeanOption;
///
/// let option = EuropeanOption::from_values(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let priced = option.calculate();
///
/// assert!((priced.price() - 10.4506).abs() < 1e-3);
/// assert!((priced.delta() - 0.6368).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuropeanOption {
    params: OptionParams,
}

impl EuropeanOption {
    /// Creates an option from validated parameters.
    #[inline]
    pub fn new(params: OptionParams) -> Self {
        Self { params }
    }

    /// Creates an option from raw values (S, K, T, r, σ).
    ///
    /// # Errors
    /// `PricingError::InvalidInput` if any value is non-finite.
    pub fn from_values(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        OptionParams::new(spot, strike, expiry, rate, volatility).map(Self::new)
    }

    /// Returns the option parameters.
    #[inline]
    pub fn params(&self) -> &OptionParams {
        &self.params
    }

    /// Runs the forward step.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    /// d₂ = d₁ - σ√T
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    pub fn calculate(&self) -> PricedOption {
        let state = if self.params.is_degenerate() {
            PricingState::default()
        } else {
            PricingState::compute(&self.params)
        };

        trace!(
            spot = self.params.spot(),
            strike = self.params.strike(),
            expiry = self.params.expiry(),
            rate = self.params.rate(),
            volatility = self.params.volatility(),
            d1 = state.d1,
            d2 = state.d2,
            price = state.price,
            "forward step"
        );

        PricedOption {
            params: self.params,
            state,
        }
    }
}

/// Intermediate quantities cached by the forward step.
///
/// All fields are zero for degenerate inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PricingState {
    /// Standardised moneyness d₁
    pub d1: f64,
    /// d₂ = d₁ - σ√T
    pub d2: f64,
    /// N(d₁)
    pub n_d1: f64,
    /// N(d₂)
    pub n_d2: f64,
    /// Call price
    pub price: f64,
}

impl PricingState {
    fn compute(params: &OptionParams) -> Self {
        let spot = params.spot();
        let strike = params.strike();
        let expiry = params.expiry();
        let rate = params.rate();
        let volatility = params.volatility();

        let vol_sqrt_t = volatility * expiry.sqrt();
        let log_moneyness = (spot / strike).ln();
        let drift = (rate + 0.5 * volatility * volatility) * expiry;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;
        let n_d1 = norm_cdf(d1);
        let n_d2 = norm_cdf(d2);
        let discount = (-rate * expiry).exp();

        Self {
            d1,
            d2,
            n_d1,
            n_d2,
            price: spot * n_d1 - strike * discount * n_d2,
        }
    }
}

/// A European option after the forward step.
///
/// Only [`EuropeanOption::calculate`] constructs this type, so every
/// accessor reads a populated state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricedOption {
    pub(crate) params: OptionParams,
    pub(crate) state: PricingState,
}

impl PricedOption {
    /// Returns the option parameters.
    #[inline]
    pub fn params(&self) -> &OptionParams {
        &self.params
    }

    /// Returns the cached forward state.
    #[inline]
    pub fn state(&self) -> PricingState {
        self.state
    }

    /// Returns the call price.
    #[inline]
    pub fn price(&self) -> f64 {
        self.state.price
    }

    /// Returns d₁.
    #[inline]
    pub fn d1(&self) -> f64 {
        self.state.d1
    }

    /// Returns d₂.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.state.d2
    }

    /// Returns N(d₁).
    #[inline]
    pub fn n_d1(&self) -> f64 {
        self.state.n_d1
    }

    /// Returns N(d₂).
    #[inline]
    pub fn n_d2(&self) -> f64 {
        self.state.n_d2
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// Delta = N(d₁), always in [0, 1].
    #[inline]
    pub fn delta(&self) -> f64 {
        self.state.n_d1
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), always non-negative.
    #[inline]
    pub fn gamma(&self) -> f64 {
        if self.params.is_degenerate() {
            return 0.0;
        }

        let vol_sqrt_t = self.params.volatility() * self.params.expiry().sqrt();
        norm_pdf(self.state.d1) / (self.params.spot() * vol_sqrt_t)
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·√T·φ(d₁), always non-negative.
    #[inline]
    pub fn vega(&self) -> f64 {
        if self.params.is_degenerate() {
            return 0.0;
        }

        self.params.spot() * self.params.expiry().sqrt() * norm_pdf(self.state.d1)
    }

    /// Computes Theta as time decay (-∂V/∂T).
    ///
    /// Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    #[inline]
    pub fn theta(&self) -> f64 {
        if self.params.is_degenerate() {
            return 0.0;
        }

        let spot = self.params.spot();
        let expiry = self.params.expiry();
        let rate = self.params.rate();
        let discount = (-rate * expiry).exp();

        let decay = -(spot * self.params.volatility() * norm_pdf(self.state.d1))
            / (2.0 * expiry.sqrt());
        decay - rate * self.params.strike() * discount * self.state.n_d2
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// Rho = K·T·e^(-rT)·N(d₂)
    #[inline]
    pub fn rho(&self) -> f64 {
        if self.params.is_degenerate() {
            return 0.0;
        }

        let expiry = self.params.expiry();
        let discount = (-self.params.rate() * expiry).exp();
        self.params.strike() * expiry * discount * self.state.n_d2
    }

    /// Computes the dual delta (∂V/∂K).
    ///
    /// Dual delta = -e^(-rT)·N(d₂), always non-positive.
    #[inline]
    pub fn dual_delta(&self) -> f64 {
        if self.params.is_degenerate() {
            return 0.0;
        }

        -(-self.params.rate() * self.params.expiry()).exp() * self.state.n_d2
    }

    /// Collects price and all closed-form Greeks.
    pub fn greeks(&self) -> Greeks {
        Greeks {
            price: self.price(),
            delta: self.delta(),
            gamma: self.gamma(),
            vega: self.vega(),
            theta: self.theta(),
            rho: self.rho(),
        }
    }
}
