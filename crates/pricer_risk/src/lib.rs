//! # Pricer Risk (L3: Validation)
//!
//! Bump-and-revalue Greeks and cross-checks against the analytic engine.
//!
//! This crate provides:
//! - A generic central-difference operation over any [`Parameter`] of a
//!   fallible price function
//! - The finite-difference Greeks (`delta_fd`, `gamma_fd`, `vega_fd`,
//!   `theta_fd`, `rho_fd`) plus the strike difference `dual_delta_fd`,
//!   which never fail: faults become `NaN`
//! - Bump configuration with per-Greek verification tolerances
//! - A verification report checking analytic and adjoint values against
//!   finite differences
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L3)             │
//! ├─────────────────────────────────────────┤
//! │  finite_difference/ - central diffs,    │
//! │                       FdConfig          │
//! │  verification       - report            │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  EuropeanOption, analytic + adjoint     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_risk::finite_difference::{delta_fd, gamma_fd};
//!
//! let delta = delta_fd(100.0, 100.0, 1.0, 0.05, 0.2, 0.01);
//! assert!((delta - 0.6368).abs() < 1e-3);
//!
//! // Faults never propagate
//! assert!(gamma_fd(f64::NAN, 100.0, 1.0, 0.05, 0.2, 0.01).is_nan());
//! ```
//!
//! [`Parameter`]: pricer_core::types::Parameter

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod finite_difference;
pub mod verification;
