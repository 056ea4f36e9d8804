//! Configuration for the fiscal query agent
//!
//! Holds the Algerian rate table (VAT rates, IRG brackets, allowance
//! rules) as process-wide immutable data, plus a layered loader:
//! built-in defaults, optionally overridden by a TOML file and
//! `FISCAL_AGENT_`-prefixed environment variables.

pub mod fiscal;
pub mod settings;

pub use fiscal::{Allowances, FiscalConfig, TaxBracket, VatRates};
pub use settings::load_fiscal_config;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
