//! Fiscal query agent
//!
//! Composes the pipeline: language detection, entity extraction, intent
//! classification, tax calculation, and response rendering. One call per
//! query, no state retained between calls.

use std::collections::HashMap;
use std::sync::Arc;

use fiscal_agent_config::FiscalConfig;
use fiscal_agent_core::{CalculationType, QueryOutcome};

use crate::calculator::TaxCalculator;
use crate::detector::LanguageDetector;
use crate::extractor::EntityExtractor;
use crate::intent::IntentClassifier;
use crate::renderer::ResponseRenderer;
use crate::AgentError;

/// Multilingual fiscal query agent
///
/// Immutable after construction; a single instance can serve any number
/// of concurrent queries.
pub struct FiscalAgent {
    config: Arc<FiscalConfig>,
    detector: LanguageDetector,
    extractor: EntityExtractor,
    classifier: IntentClassifier,
    calculator: TaxCalculator,
    renderer: ResponseRenderer,
}

impl FiscalAgent {
    /// Create an agent over a validated rate table
    pub fn new(config: FiscalConfig) -> Result<Self, AgentError> {
        config.validate()?;
        let config = Arc::new(config);

        tracing::info!(
            vat_normal = %config.vat.normal,
            brackets = config.brackets.len(),
            "Fiscal agent initialized"
        );

        Ok(Self {
            detector: LanguageDetector::new(),
            extractor: EntityExtractor::new(),
            classifier: IntentClassifier::new(),
            calculator: TaxCalculator::new(config.clone()),
            renderer: ResponseRenderer::new()?,
            config,
        })
    }

    /// Create an agent with the built-in 2025 rate table
    pub fn with_defaults() -> Result<Self, AgentError> {
        Self::new(FiscalConfig::default())
    }

    /// Process one query end to end.
    ///
    /// Total: any internal error is converted into the failure envelope
    /// at this boundary instead of propagating.
    pub fn process(&self, query: &str) -> QueryOutcome {
        match self.run_pipeline(query) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Query processing failed");
                QueryOutcome::failure(e.to_string())
            }
        }
    }

    /// Process a query with a caller-supplied context map.
    ///
    /// The context is accepted for interface compatibility and is inert
    /// today; core logic never reads it.
    pub fn process_with_context(
        &self,
        query: &str,
        context: &HashMap<String, String>,
    ) -> QueryOutcome {
        if !context.is_empty() {
            tracing::debug!(keys = context.len(), "Ignoring caller context");
        }
        self.process(query)
    }

    /// The rate table this agent computes against
    pub fn config(&self) -> &FiscalConfig {
        &self.config
    }

    fn run_pipeline(&self, query: &str) -> Result<QueryOutcome, AgentError> {
        let language = self.detector.detect(query);
        let entities = self.extractor.extract(query, language);
        let calculation_type = self.classifier.classify(query, language);

        tracing::debug!(%language, %calculation_type, "Query understood");

        let result = match calculation_type {
            CalculationType::Vat => self.calculator.compute_vat(&entities),
            CalculationType::IncomeTax => self.calculator.compute_income_tax(&entities),
            CalculationType::General => self.calculator.general_help(language),
        };

        let response = self.renderer.render(&result, language)?;

        Ok(QueryOutcome::success(
            response,
            language,
            calculation_type,
            entities,
        ))
    }
}
