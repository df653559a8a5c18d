//! Cross-checks of analytic, adjoint and finite-difference Greeks.
//!
//! Finite differences are the reference for both other methods.
//!
//! | Comparison | Tolerance |
//! |------------|-----------|
//! | Analytic vs FD | per Greek, from [`FdConfig`] |
//! | Adjoint vs FD | same per-Greek tolerance |
//!
//! Gamma has no adjoint counterpart; its row only checks the analytic
//! value. The dual delta row covers the strike sensitivity of the reverse
//! sweep. A `NaN` anywhere in a row fails it.
//!
//! # Usage
//!
//! ```rust
//! use pricer_core::types::OptionParams;
//! use pricer_risk::finite_difference::FdConfig;
//! use pricer_risk::verification::verify_greeks;
//!
//! let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let report = verify_greeks(&params, &FdConfig::default());
//! assert!(report.all_passed());
//! ```

use pricer_core::types::OptionParams;
use pricer_models::analytical::EuropeanOption;

use crate::finite_difference::{fd_greeks, FdConfig, Greek};

/// Result of verifying a single Greek.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreekVerification {
    /// Greek being verified.
    pub name: Greek,
    /// Closed-form value.
    pub analytic: f64,
    /// Adjoint value, where the reverse sweep produces one.
    pub adjoint: Option<f64>,
    /// Finite-difference value.
    pub finite_difference: f64,
    /// |analytic - finite_difference|
    pub abs_error: f64,
    /// |adjoint - finite_difference|, where an adjoint value exists.
    pub adjoint_abs_error: Option<f64>,
    /// Tolerance the errors were checked against.
    pub tolerance: f64,
    /// Whether every comparison in the row is within tolerance.
    pub passed: bool,
}

impl GreekVerification {
    /// Builds a row and evaluates it.
    pub fn new(
        name: Greek,
        analytic: f64,
        adjoint: Option<f64>,
        finite_difference: f64,
        tolerance: f64,
    ) -> Self {
        let abs_error = (analytic - finite_difference).abs();
        let adjoint_abs_error = adjoint.map(|adj| (adj - finite_difference).abs());
        // NaN comparisons are false
        let passed =
            abs_error <= tolerance && adjoint_abs_error.is_none_or(|error| error <= tolerance);

        Self {
            name,
            analytic,
            adjoint,
            finite_difference,
            abs_error,
            adjoint_abs_error,
            tolerance,
            passed,
        }
    }
}

/// Result of a complete verification run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerificationReport {
    /// Inputs the Greeks were evaluated at.
    pub params: OptionParams,
    /// Bump size used for the finite differences.
    pub epsilon: f64,
    /// One row per Greek, in report order.
    pub rows: Vec<GreekVerification>,
}

impl VerificationReport {
    /// Returns whether every row passed.
    pub fn all_passed(&self) -> bool {
        self.rows.iter().all(|row| row.passed)
    }

    /// Returns the rows that failed.
    pub fn failures(&self) -> impl Iterator<Item = &GreekVerification> {
        self.rows.iter().filter(|row| !row.passed)
    }

    /// Returns the row for one Greek.
    pub fn row(&self, greek: Greek) -> Option<&GreekVerification> {
        self.rows.iter().find(|row| row.name == greek)
    }

    /// One-line summary.
    pub fn summary(&self) -> String {
        let failed = self.failures().count();
        let status = if failed == 0 { "PASS" } else { "FAIL" };
        format!(
            "{} - {}/{} Greeks within tolerance at epsilon {}",
            status,
            self.rows.len() - failed,
            self.rows.len(),
            self.epsilon
        )
    }
}

/// Compares analytic, adjoint and finite-difference Greeks at `params`.
pub fn verify_greeks(params: &OptionParams, config: &FdConfig) -> VerificationReport {
    let priced = EuropeanOption::new(*params).calculate();
    let analytic = priced.greeks();
    let adjoint = priced.adjoint();
    let fd = fd_greeks(params, config.epsilon);

    let rows = Greek::ALL
        .into_iter()
        .map(|greek| {
            let (analytic_value, adjoint_value) = match greek {
                Greek::Delta => (analytic.delta, Some(adjoint.delta())),
                Greek::Gamma => (analytic.gamma, None),
                Greek::Vega => (analytic.vega, Some(adjoint.vega())),
                Greek::Theta => (analytic.theta, Some(adjoint.theta())),
                Greek::Rho => (analytic.rho, Some(adjoint.rho())),
                Greek::DualDelta => (priced.dual_delta(), Some(adjoint.dual_delta())),
            };
            GreekVerification::new(
                greek,
                analytic_value,
                adjoint_value,
                fd.get(greek),
                config.tolerance(greek),
            )
        })
        .collect();

    let report = VerificationReport {
        params: *params,
        epsilon: config.epsilon,
        rows,
    };

    for row in report.failures() {
        tracing::debug!(
            greek = %row.name,
            analytic = row.analytic,
            adjoint = ?row.adjoint,
            finite_difference = row.finite_difference,
            tolerance = row.tolerance,
            "verification failed"
        );
    }

    report
}
