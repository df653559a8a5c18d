//! Adjoint (reverse-mode) sensitivities of the Black-Scholes call price.
//!
//! The forward step evaluates this expression graph:
//!
//! ```text
//! sqrt_t     = √T
//! vol_sqrt_t = σ·sqrt_t
//! log_m      = ln(S/K)
//! drift      = (r + σ²/2)·T
//! d1         = (log_m + drift) / vol_sqrt_t
//! d2         = d1 - vol_sqrt_t
//! discount   = e^(-rT)
//! price      = S·N(d1) - K·discount·N(d2)
//! ```
//!
//! [`PricedOption::accumulate_adjoint`] walks it backwards. Each node's
//! adjoint is the sum over its consumers of (consumer adjoint × local
//! partial); leaf adjoints are added into the caller's accumulator.
//!
//! # Mathematical Background
//!
//! - Set output adjoint to the seed (1.0 for plain sensitivities)
//! - Propagate adjoints backward: adj(x) = Σ (adj(y) × ∂y/∂x)
//! - Collect adjoints at inputs → gradients

use std::ops::{Add, AddAssign};

use pricer_core::math::distributions::norm_pdf;
use pricer_core::types::Parameter;

use super::european::PricedOption;

/// Partial derivatives of the call price with respect to each input.
///
/// `d_expiry` is the raw derivative ∂V/∂T; [`AdjointSensitivities::theta`]
/// returns it in the time-decay convention.
///
/// # Examples
///
/// ```rust
/// use pricer_models::analytical::{AdjointSensitivities, EuropeanOption};
///
/// let priced = EuropeanOption::from_values(100.0, 100.0, 1.0, 0.05, 0.2)
///     .unwrap()
///     .calculate();
///
/// let adj = priced.adjoint();
/// assert!((adj.delta() - priced.delta()).abs() < 1e-12);
///
/// // Accumulate into an existing record
/// let mut total = AdjointSensitivities::default();
/// priced.accumulate_adjoint(1.0, &mut total);
/// priced.accumulate_adjoint(1.0, &mut total);
/// assert!((total.d_spot - 2.0 * adj.d_spot).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjointSensitivities {
    /// ∂V/∂S
    pub d_spot: f64,
    /// ∂V/∂K
    pub d_strike: f64,
    /// ∂V/∂T
    pub d_expiry: f64,
    /// ∂V/∂r
    pub d_rate: f64,
    /// ∂V/∂σ
    pub d_volatility: f64,
}

impl AdjointSensitivities {
    /// Returns the sensitivity to the selected parameter.
    #[inline]
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Spot => self.d_spot,
            Parameter::Strike => self.d_strike,
            Parameter::Expiry => self.d_expiry,
            Parameter::Rate => self.d_rate,
            Parameter::Volatility => self.d_volatility,
        }
    }

    /// Delta: ∂V/∂S.
    #[inline]
    pub fn delta(&self) -> f64 {
        self.d_spot
    }

    /// Vega: ∂V/∂σ.
    #[inline]
    pub fn vega(&self) -> f64 {
        self.d_volatility
    }

    /// Theta in the time-decay convention: -∂V/∂T.
    #[inline]
    pub fn theta(&self) -> f64 {
        -self.d_expiry
    }

    /// Rho: ∂V/∂r.
    #[inline]
    pub fn rho(&self) -> f64 {
        self.d_rate
    }

    /// Dual delta: ∂V/∂K.
    #[inline]
    pub fn dual_delta(&self) -> f64 {
        self.d_strike
    }
}

impl AddAssign for AdjointSensitivities {
    fn add_assign(&mut self, rhs: Self) {
        self.d_spot += rhs.d_spot;
        self.d_strike += rhs.d_strike;
        self.d_expiry += rhs.d_expiry;
        self.d_rate += rhs.d_rate;
        self.d_volatility += rhs.d_volatility;
    }
}

impl Add for AdjointSensitivities {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl PricedOption {
    /// Returns all five price sensitivities from a unit adjoint seed.
    ///
    /// All zero for degenerate inputs.
    pub fn adjoint(&self) -> AdjointSensitivities {
        let mut sensitivities = AdjointSensitivities::default();
        self.accumulate_adjoint(1.0, &mut sensitivities);
        sensitivities
    }

    /// Reverse sweep seeded with `adj_price`, adding leaf adjoints into `acc`.
    ///
    /// Contributes nothing for degenerate inputs.
    pub fn accumulate_adjoint(&self, adj_price: f64, acc: &mut AdjointSensitivities) {
        if self.params.is_degenerate() {
            return;
        }

        let spot = self.params.spot();
        let strike = self.params.strike();
        let expiry = self.params.expiry();
        let rate = self.params.rate();
        let volatility = self.params.volatility();

        // Primal values needed by the local partials
        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = volatility * sqrt_t;
        let discount = (-rate * expiry).exp();
        let d1 = self.state.d1;
        let d2 = self.state.d2;
        let n_d1 = self.state.n_d1;
        let n_d2 = self.state.n_d2;

        let mut adj = AdjointSensitivities::default();

        // price = S·N(d1) - K·discount·N(d2)
        adj.d_spot += adj_price * n_d1;
        let adj_n_d1 = adj_price * spot;
        adj.d_strike -= adj_price * discount * n_d2;
        let adj_discount = -adj_price * strike * n_d2;
        let adj_n_d2 = -adj_price * strike * discount;

        // N'(x) = φ(x)
        let mut adj_d1 = adj_n_d1 * norm_pdf(d1);
        let adj_d2 = adj_n_d2 * norm_pdf(d2);

        // discount = e^(-rT)
        adj.d_rate -= adj_discount * expiry * discount;
        adj.d_expiry -= adj_discount * rate * discount;

        // d2 = d1 - vol_sqrt_t
        adj_d1 += adj_d2;
        let mut adj_vol_sqrt_t = -adj_d2;

        // d1 = (log_m + drift) / vol_sqrt_t
        let adj_log_m = adj_d1 / vol_sqrt_t;
        let adj_drift = adj_d1 / vol_sqrt_t;
        adj_vol_sqrt_t -= adj_d1 * d1 / vol_sqrt_t;

        // drift = (r + σ²/2)·T
        adj.d_rate += adj_drift * expiry;
        adj.d_volatility += adj_drift * volatility * expiry;
        adj.d_expiry += adj_drift * (rate + 0.5 * volatility * volatility);

        // log_m = ln S - ln K
        adj.d_spot += adj_log_m / spot;
        adj.d_strike -= adj_log_m / strike;

        // vol_sqrt_t = σ·sqrt_t
        adj.d_volatility += adj_vol_sqrt_t * sqrt_t;
        let adj_sqrt_t = adj_vol_sqrt_t * volatility;

        // sqrt_t = √T
        adj.d_expiry += adj_sqrt_t / (2.0 * sqrt_t);

        *acc += adj;
    }
}
