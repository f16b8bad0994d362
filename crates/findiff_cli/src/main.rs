//! findiff CLI - Recursive Finite-Difference Derivative Estimation
//!
//! Command-line front end for `findiff_core`.
//!
//! # Commands
//!
//! - `findiff estimate -f <name> -p <x,...>` - Estimate a derivative of a catalog function
//! - `findiff sweep -f <name> -p <x,...>` - Tabulate the estimate over decades of step size
//! - `findiff functions` - List the catalog
//!
//! # Configuration
//!
//! Settings are read from `findiff.toml` (or `--config`), then `FINDIFF_*`
//! environment variables, then command-line flags. `RUST_LOG` overrides
//! the configured log level.

use clap::{Parser, Subcommand};
use findiff_core::math::finite_difference::Strategy;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod commands;
mod config;
mod error;
mod point;

pub use error::{CliError, Result};

use catalog::CatalogFunction;
use config::{build_config, CliArgs, LogLevel};
use point::Point;

/// Recursive finite-difference derivative estimator
#[derive(Parser)]
#[command(name = "findiff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Refuse estimates predicted to need more function evaluations
    #[arg(long, global = true)]
    max_evaluations: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the n-th order derivative of a catalog function
    Estimate {
        /// Catalog function name (see `findiff functions`)
        #[arg(short, long)]
        function: CatalogFunction,

        /// Evaluation point, comma-separated (e.g. 1.0,-2.0)
        #[arg(short, long, allow_hyphen_values = true)]
        point: Point,

        /// Derivative order
        #[arg(short, long)]
        order: Option<u32>,

        /// Step size h
        #[arg(short = 'H', long, allow_hyphen_values = true)]
        step: Option<f64>,

        /// Evaluation strategy (naive, shared-base, parallel)
        #[arg(short, long)]
        strategy: Option<Strategy>,
    },

    /// Tabulate estimates for step sizes 1e-FROM down to 1e-TO
    Sweep {
        /// Catalog function name (see `findiff functions`)
        #[arg(short, long)]
        function: CatalogFunction,

        /// Evaluation point, comma-separated (e.g. 1.0,-2.0)
        #[arg(short, long, allow_hyphen_values = true)]
        point: Point,

        /// Derivative order
        #[arg(short, long)]
        order: Option<u32>,

        /// Largest step exponent (step = 1e-FROM)
        #[arg(long, default_value = "1")]
        from: u32,

        /// Smallest step exponent (step = 1e-TO)
        #[arg(long, default_value = "16")]
        to: u32,

        /// Evaluation strategy (naive, shared-base, parallel)
        #[arg(short, long)]
        strategy: Option<Strategy>,
    },

    /// List the function catalog
    Functions,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let (order, step, strategy) = match &self.command {
            Commands::Estimate {
                order,
                step,
                strategy,
                ..
            } => (*order, *step, *strategy),
            Commands::Sweep {
                order, strategy, ..
            } => (*order, None, *strategy),
            Commands::Functions => (None, None, None),
        };

        CliArgs {
            config_file: self.config.clone(),
            order,
            step,
            strategy,
            max_evaluations: self.max_evaluations,
            log_level: if self.verbose {
                Some(LogLevel::Debug)
            } else {
                self.log_level
            },
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());

    info!(
        order = config.estimator.order,
        step = config.estimator.step,
        strategy = %config.estimator.strategy,
        max_evaluations = config.max_evaluations,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Estimate {
            function, point, ..
        } => commands::estimate::run(&config, function, point.coordinates()),
        Commands::Sweep {
            function,
            point,
            from,
            to,
            ..
        } => commands::sweep::run(&config, function, point.coordinates(), from, to),
        Commands::Functions => commands::functions::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_estimate() {
        let cli = Cli::try_parse_from([
            "findiff", "estimate", "-f", "rosenbrock", "-p", "-1.5,2", "-o", "2", "-H", "1e-3", "-s",
            "shared-base",
        ])
        .unwrap();

        match &cli.command {
            Commands::Estimate {
                function,
                point,
                order,
                step,
                strategy,
            } => {
                assert_eq!(*function, CatalogFunction::Rosenbrock);
                assert_eq!(point.coordinates(), &[-1.5, 2.0]);
                assert_eq!(*order, Some(2));
                assert_eq!(*step, Some(1e-3));
                assert_eq!(*strategy, Some(Strategy::SharedBase));
            }
            _ => panic!("expected estimate"),
        }

        let args = cli.config_args();
        assert_eq!(args.order, Some(2));
        assert_eq!(args.step, Some(1e-3));
        assert_eq!(args.strategy, Some(Strategy::SharedBase));
    }

    #[test]
    fn test_parse_sweep_defaults() {
        let cli = Cli::try_parse_from(["findiff", "sweep", "-f", "square", "-p", "2"]).unwrap();
        match cli.command {
            Commands::Sweep { from, to, .. } => {
                assert_eq!(from, 1);
                assert_eq!(to, 16);
            }
            _ => panic!("expected sweep"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_function() {
        assert!(Cli::try_parse_from(["findiff", "estimate", "-f", "gamma", "-p", "1"]).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_point() {
        assert!(Cli::try_parse_from(["findiff", "estimate", "-f", "square", "-p", "x"]).is_err());
    }

    #[test]
    fn test_verbose_sets_debug() {
        let cli = Cli::try_parse_from(["findiff", "-v", "functions"]).unwrap();
        assert_eq!(cli.config_args().log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn test_global_overrides() {
        let cli = Cli::try_parse_from([
            "findiff",
            "functions",
            "--max-evaluations",
            "50",
            "--log-level",
            "error",
        ])
        .unwrap();
        let args = cli.config_args();
        assert_eq!(args.max_evaluations, Some(50));
        assert_eq!(args.log_level, Some(LogLevel::Error));
    }
}
