//! Multilingual fiscal query pipeline
//!
//! Features:
//! - Language detection across five variants (Arabic, Darija, French,
//!   English, Amazigh) via script blocks and keyword lists
//! - Entity extraction (amounts, dependents, exemption flags)
//! - VAT-vs-IRG intent classification by keyword scoring
//! - Progressive income-tax and VAT computation over the rate table
//! - Localized template rendering with mandatory French fallback
//!
//! Every component is a pure, synchronous function over immutable
//! inputs; queries can be processed fully in parallel.

pub mod agent;
pub mod calculator;
pub mod detector;
pub mod extractor;
pub mod intent;
pub mod renderer;

pub use agent::FiscalAgent;
pub use calculator::TaxCalculator;
pub use detector::LanguageDetector;
pub use extractor::EntityExtractor;
pub use intent::IntentClassifier;
pub use renderer::ResponseRenderer;

use thiserror::Error;

/// Pipeline errors
///
/// Extraction and classification are total and never appear here;
/// failures come from startup validation or rendering.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Missing template: no French fallback for {0}")]
    MissingTemplate(fiscal_agent_core::CalculationType),

    #[error("Config error: {0}")]
    Config(#[from] fiscal_agent_config::ConfigError),
}
