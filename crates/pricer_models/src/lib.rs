//! # Pricer Models (L2: Business Logic)
//!
//! Black-Scholes pricing engine for a European call option.
//!
//! This crate provides:
//! - The forward pricing step (`EuropeanOption::calculate`)
//! - Closed-form Greeks read from the priced state
//! - A hand-expanded reverse-mode (adjoint) sweep producing the same
//!   sensitivities through chain-rule accumulation
//!
//! ## Design Principles
//!
//! - **Typestate**: Greeks live on [`analytical::PricedOption`], which only
//!   the forward step can produce, so nothing can be read before pricing
//! - **Degenerate inputs price to zero**: non-positive S, K, T or σ is a
//!   documented outcome, not an error
//! - **Value semantics**: every type is `Copy`; no shared mutable state

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
