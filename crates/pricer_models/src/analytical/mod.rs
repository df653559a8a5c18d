//! Analytical pricing of European call options.
//!
//! This module provides:
//! - Black-Scholes forward pricing with cached d1, d2, N(d1), N(d2)
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Adjoint (reverse-mode) sensitivities seeded from the price
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

pub mod adjoint;
pub mod european;
pub mod greeks;

// Re-export main types at module level
pub use adjoint::AdjointSensitivities;
pub use european::{EuropeanOption, PricedOption, PricingState};
pub use greeks::Greeks;
