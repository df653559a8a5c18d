//! european-greeks - price a European call and compare its Greeks
//!
//! Computes the Black-Scholes price with closed-form, adjoint and
//! finite-difference Greeks and prints them with execution times.
//!
//! # Usage
//!
//! ```text
//! european-greeks <S> <K> <T> <r> <sigma> [--epsilon E] [--format table|json]
//!                 [--config FILE] [--verify] [-v]
//! ```
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate orchestrates the core, model
//! and risk layers behind a single command.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pricer_core::types::OptionParams;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use error::Result;

use config::{build_config, CliOverrides, OutputFormat};

/// Black-Scholes European call with analytic, adjoint and finite-difference Greeks
#[derive(Parser, Debug)]
#[command(name = "european-greeks")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Spot price
    #[arg(value_name = "S")]
    spot: f64,

    /// Strike price
    #[arg(value_name = "K")]
    strike: f64,

    /// Time to expiry in years
    #[arg(value_name = "T")]
    expiry: f64,

    /// Risk-free rate
    #[arg(value_name = "r")]
    rate: f64,

    /// Volatility
    #[arg(value_name = "sigma")]
    volatility: f64,

    /// Finite-difference bump size [default: 0.01]
    #[arg(short, long)]
    epsilon: Option<f64>,

    /// Output format [default: table]
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Configuration file path [default: european-greeks.toml if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Append an analytic vs finite-difference verification report
    #[arg(long)]
    verify: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Help and version are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let overrides = CliOverrides {
        config_file: cli.config.as_deref(),
        epsilon: cli.epsilon,
        format: cli.format,
        verbose: cli.verbose,
    };
    let config = build_config(&overrides, |key| std::env::var(key).ok())?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    debug!(?config, "Configuration loaded");

    let params = OptionParams::new(cli.spot, cli.strike, cli.expiry, cli.rate, cli.volatility)?;
    commands::price::run(params, &config, cli.verify)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("european-greeks").chain(args.iter().copied()))
    }

    #[test]
    fn test_positional_arguments() {
        let cli = parse(&["100", "100", "1", "0.05", "0.2"]).unwrap();
        assert_eq!(cli.spot, 100.0);
        assert_eq!(cli.volatility, 0.2);
        assert!(cli.epsilon.is_none());
        assert!(!cli.verify);
    }

    #[test]
    fn test_negative_rate_is_a_value() {
        let cli = parse(&["100", "100", "1", "-0.01", "0.2"]).unwrap();
        assert_eq!(cli.rate, -0.01);
    }

    #[test]
    fn test_flags() {
        let cli = parse(&[
            "100", "90", "0.5", "0.03", "0.3", "--epsilon", "0.001", "--format", "json",
            "--verify", "-v",
        ])
        .unwrap();
        assert_eq!(cli.epsilon, Some(0.001));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verify);
        assert!(cli.verbose);
    }

    #[test]
    fn test_wrong_argument_count_is_a_usage_error() {
        let err = parse(&["100", "100", "1", "0.05"]).unwrap_err();
        assert!(err.use_stderr());

        let err = parse(&["100", "100", "1", "0.05", "0.2", "7"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_unparsable_number_is_a_usage_error() {
        let err = parse(&["abc", "100", "1", "0.05", "0.2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_help_is_not_an_error_exit() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }
}
