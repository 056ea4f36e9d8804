//! Query outcome envelope
//!
//! The top-level pipeline returns an explicit success/failure value
//! instead of throwing across component boundaries. Serializes to a flat
//! JSON object with a `success` discriminant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::CalculationType;
use crate::entities::ExtractedEntities;
use crate::language::Language;

/// Result envelope for one processed query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    Success(QueryResponse),
    Failure(QueryFailure),
}

/// Successful pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Always true; kept as an explicit field for JSON consumers
    pub success: bool,
    /// Rendered, localized response text
    pub response: String,
    pub language: Language,
    pub calculation_type: CalculationType,
    pub entities: ExtractedEntities,
    pub query_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

/// Failed pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryFailure {
    /// Always false
    pub success: bool,
    /// Human-readable diagnostic
    pub error: String,
    pub query_id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl QueryOutcome {
    /// Build a success envelope stamped with a fresh id and the current time
    pub fn success(
        response: String,
        language: Language,
        calculation_type: CalculationType,
        entities: ExtractedEntities,
    ) -> Self {
        Self::Success(QueryResponse {
            success: true,
            response,
            language,
            calculation_type,
            entities,
            query_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        })
    }

    /// Build a failure envelope from a diagnostic
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure(QueryFailure {
            success: false,
            error: error.into(),
            query_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Rendered response text, if the run succeeded
    pub fn response(&self) -> Option<&str> {
        match self {
            Self::Success(r) => Some(&r.response),
            Self::Failure(_) => None,
        }
    }

    /// Diagnostic text, if the run failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(f) => Some(&f.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let outcome = QueryOutcome::success(
            "Montant TTC: 119.00 DZD".into(),
            Language::French,
            CalculationType::Vat,
            ExtractedEntities::default(),
        );
        assert!(outcome.is_success());
        assert_eq!(outcome.response(), Some("Montant TTC: 119.00 DZD"));
        assert_eq!(outcome.error(), None);
    }

    #[test]
    fn test_failure_envelope() {
        let outcome = QueryOutcome::failure("template table incomplete");
        assert!(!outcome.is_success());
        assert_eq!(outcome.error(), Some("template table incomplete"));
    }

    #[test]
    fn test_json_discriminant_is_flat() {
        let ok = QueryOutcome::success(
            "ok".into(),
            Language::French,
            CalculationType::General,
            ExtractedEntities::default(),
        );
        let json = serde_json::to_string(&ok).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"language\":\"french\""));

        let err = QueryOutcome::failure("boom");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"error\":\"boom\""));
    }
}
