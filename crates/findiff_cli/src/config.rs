//! CLI configuration management
//!
//! Loads settings from a TOML file, `FINDIFF_*` environment variables and
//! command-line flags.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file
//! 4. Default values

use findiff_core::math::finite_difference::{EstimatorConfig, Strategy};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "findiff.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration structure
///
/// ```toml
/// log_level = "info"
/// max_evaluations = 1000000
///
/// [estimator]
/// order = 2
/// step = 1e-3
/// strategy = "shared-base"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Estimator order, step and strategy
    pub estimator: EstimatorConfig<f64>,
    /// Refuse to run estimates predicted to need more evaluations than this
    pub max_evaluations: u64,
    /// Log level
    pub log_level: LogLevel,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            estimator: EstimatorConfig::default(),
            max_evaluations: 10_000_000,
            log_level: LogLevel::Warn,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `FINDIFF_*` overrides resolved through `lookup`.
    ///
    /// `lookup` maps a variable name to its value; [`build_config`] passes
    /// the process environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(order) = lookup("FINDIFF_ORDER") {
            self.estimator.order = parse_value("FINDIFF_ORDER", &order)?;
        }
        if let Some(step) = lookup("FINDIFF_STEP") {
            self.estimator.step = parse_value("FINDIFF_STEP", &step)?;
        }
        if let Some(strategy) = lookup("FINDIFF_STRATEGY") {
            self.estimator.strategy = Strategy::from_str(&strategy).map_err(|_| {
                ConfigError::InvalidValue {
                    key: "FINDIFF_STRATEGY",
                    value: strategy.clone(),
                }
            })?;
        }
        if let Some(limit) = lookup("FINDIFF_MAX_EVALUATIONS") {
            self.max_evaluations = parse_value("FINDIFF_MAX_EVALUATIONS", &limit)?;
        }
        if let Some(level) = lookup("FINDIFF_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(order) = cli.order {
            self.estimator.order = order;
        }
        if let Some(step) = cli.step {
            self.estimator.step = step;
        }
        if let Some(strategy) = cli.strategy {
            self.estimator.strategy = strategy;
        }
        if let Some(limit) = cli.max_evaluations {
            self.max_evaluations = limit;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
    }
}

fn parse_value<V: FromStr>(key: &'static str, value: &str) -> Result<V, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// CLI argument overrides
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Order override
    pub order: Option<u32>,
    /// Step size override
    pub step: Option<f64>,
    /// Strategy override
    pub strategy: Option<Strategy>,
    /// Evaluation budget override
    pub max_evaluations: Option<u64>,
    /// Log level override
    pub log_level: Option<LogLevel>,
}

/// Build configuration from all sources
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// Build configuration with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli);

    Ok(config)
}
