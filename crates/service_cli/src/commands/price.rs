//! Price command implementation
//!
//! Prices one European call, computes its Greeks three ways and writes the
//! results in a fixed order: analytic block, adjoint block, finite-difference
//! block, execution times, then the optional verification report.

use std::fmt;
use std::time::Instant;

use pricer_core::types::OptionParams;
use pricer_models::analytical::{AdjointSensitivities, EuropeanOption, Greeks};
use pricer_risk::finite_difference::{fd_greeks, FdConfig, FdGreeks};
use pricer_risk::verification::{verify_greeks, GreekVerification, VerificationReport};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Wall-clock time of each stage, in microseconds.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Timings {
    pub analytic_us: u64,
    pub adjoint_us: u64,
    pub finite_difference_us: u64,
}

/// Everything the driver prints.
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub params: OptionParams,
    pub analytic: Greeks,
    pub adjoint: AdjointSensitivities,
    pub finite_difference: FdGreeks,
    pub timings: Timings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationReport>,
}

fn micros_since(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}

/// Run every pricing stage and collect the results.
pub fn evaluate(params: OptionParams, fd_config: &FdConfig, verify: bool) -> PriceReport {
    let start = Instant::now();
    let priced = EuropeanOption::new(params).calculate();
    let analytic = priced.greeks();
    let analytic_us = micros_since(start);

    let start = Instant::now();
    let adjoint = priced.adjoint();
    let adjoint_us = micros_since(start);

    let start = Instant::now();
    let finite_difference = fd_greeks(&params, fd_config.epsilon);
    let finite_difference_us = micros_since(start);

    let verification = verify.then(|| verify_greeks(&params, fd_config));

    PriceReport {
        params,
        analytic,
        adjoint,
        finite_difference,
        timings: Timings {
            analytic_us,
            adjoint_us,
            finite_difference_us,
        },
        verification,
    }
}

impl fmt::Display for PriceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.analytic;
        writeln!(f, "Price (analytic): {}", a.price)?;
        writeln!(f, "Delta (analytic): {}", a.delta)?;
        writeln!(f, "Gamma (analytic): {}", a.gamma)?;
        writeln!(f, "Vega (analytic): {}", a.vega)?;
        writeln!(f, "Theta (analytic): {}", a.theta)?;
        writeln!(f, "Rho (analytic): {}", a.rho)?;

        let adj = &self.adjoint;
        writeln!(f, "\nAdjoint Results:")?;
        writeln!(f, "Delta (adjoint): {}", adj.delta())?;
        writeln!(f, "Vega (adjoint): {}", adj.vega())?;
        writeln!(f, "Theta (adjoint): {}", adj.theta())?;
        writeln!(f, "Rho (adjoint): {}", adj.rho())?;
        writeln!(f, "Dual Delta (adjoint): {}", adj.dual_delta())?;

        let fd = &self.finite_difference;
        writeln!(f, "\nFinite Differences Results (epsilon = {}):", fd.epsilon)?;
        writeln!(f, "Delta (FD): {}", fd.delta)?;
        writeln!(f, "Gamma (FD): {}", fd.gamma)?;
        writeln!(f, "Vega (FD): {}", fd.vega)?;
        writeln!(f, "Theta (FD): {}", fd.theta)?;
        writeln!(f, "Rho (FD): {}", fd.rho)?;
        writeln!(f, "Dual Delta (FD): {}", fd.dual_delta)?;

        // Timing tools parse the "AAD Calculation Time" label
        let t = &self.timings;
        writeln!(f, "\nExecution Times:")?;
        writeln!(f, "Analytic Calculation Time: {} microseconds", t.analytic_us)?;
        writeln!(f, "AAD Calculation Time: {} microseconds", t.adjoint_us)?;
        writeln!(
            f,
            "Finite Differences Calculation Time: {} microseconds",
            t.finite_difference_us
        )?;

        if let Some(verification) = &self.verification {
            writeln!(f, "\nVerification: {}", verification.summary())?;
            for row in &verification.rows {
                write_verification_row(f, row)?;
            }
        }

        Ok(())
    }
}

fn write_verification_row(f: &mut fmt::Formatter<'_>, row: &GreekVerification) -> fmt::Result {
    write!(
        f,
        "{:<10} analytic={:<14.8} fd={:<14.8} error={:<10.3e} ",
        row.name.name(),
        row.analytic,
        row.finite_difference,
        row.abs_error
    )?;
    match (row.adjoint, row.adjoint_abs_error) {
        (Some(adjoint), Some(error)) => {
            write!(f, "adjoint={:<14.8} adjoint_error={:<10.3e} ", adjoint, error)?
        }
        _ => write!(f, "adjoint={:<14} adjoint_error={:<10} ", "-", "-")?,
    }
    writeln!(
        f,
        "tolerance={:<8.1e} {}",
        row.tolerance,
        if row.passed { "ok" } else { "FAIL" }
    )
}

/// Render the report as labelled lines.
pub fn render_table(report: &PriceReport) -> String {
    report.to_string()
}

/// Run the price command
pub fn run(params: OptionParams, config: &CliConfig, verify: bool) -> Result<()> {
    let fd_config = FdConfig::builder().epsilon(config.epsilon).build()?;

    info!(
        spot = params.spot(),
        strike = params.strike(),
        expiry = params.expiry(),
        rate = params.rate(),
        volatility = params.volatility(),
        epsilon = fd_config.epsilon,
        "Starting pricing"
    );

    let report = evaluate(params, &fd_config, verify);

    if let Some(verification) = &report.verification {
        for row in verification.failures() {
            warn!(
                greek = %row.name,
                abs_error = row.abs_error,
                adjoint_abs_error = ?row.adjoint_abs_error,
                tolerance = row.tolerance,
                "Greek outside tolerance"
            );
        }
    }

    let rendered = match config.format {
        OutputFormat::Table => render_table(&report),
        OutputFormat::Json => serde_json::to_string_pretty(&report)? + "\n",
    };
    print!("{}", rendered);

    info!("Pricing complete");
    Ok(())
}
