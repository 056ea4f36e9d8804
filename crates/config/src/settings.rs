//! Layered configuration loading
//!
//! Precedence, lowest to highest: built-in defaults, an optional TOML
//! file, then `FISCAL_AGENT_`-prefixed environment variables
//! (`__` separates nesting levels, e.g. `FISCAL_AGENT_VAT__NORMAL`).

use std::path::Path;

use crate::fiscal::FiscalConfig;
use crate::ConfigError;

/// Load and validate the fiscal rate table
pub fn load_fiscal_config(path: Option<&Path>) -> Result<FiscalConfig, ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        builder = builder.add_source(config::File::from(path));
        tracing::info!(path = %path.display(), "Loading fiscal config overrides");
    }

    builder = builder.add_source(
        config::Environment::with_prefix("FISCAL_AGENT").separator("__"),
    );

    let fiscal: FiscalConfig = builder.build()?.try_deserialize()?;
    fiscal.validate()?;

    tracing::debug!(
        brackets = fiscal.brackets.len(),
        vat_normal = %fiscal.vat.normal,
        "Fiscal config loaded"
    );

    Ok(fiscal)
}
