//! Entities extracted from a fiscal query
//!
//! Extraction is best-effort: every field is optional or defaults to
//! false, since a query may carry none of them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Numeric and boolean facts pulled out of the query text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    /// Monetary amount in DZD (invoice amount or gross salary)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Number of dependent children
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependents: Option<u32>,
    /// Export operation (forces VAT exemption)
    #[serde(default)]
    pub is_export: bool,
    /// Free-zone operation (forces VAT exemption)
    #[serde(default)]
    pub is_free_zone: bool,
}

impl ExtractedEntities {
    /// Amount with the missing-amount leniency applied: absent means zero
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount.unwrap_or_default()
    }

    /// Dependent count, absent means zero
    pub fn dependents_or_zero(&self) -> u32 {
        self.dependents.unwrap_or(0)
    }

    /// Whether any VAT exemption flag is set
    pub fn is_exempt(&self) -> bool {
        self.is_export || self.is_free_zone
    }

    /// True when extraction found nothing at all
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.dependents.is_none() && !self.is_export && !self.is_free_zone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let entities = ExtractedEntities::default();
        assert!(entities.is_empty());
        assert_eq!(entities.amount_or_zero(), Decimal::ZERO);
        assert_eq!(entities.dependents_or_zero(), 0);
        assert!(!entities.is_exempt());
    }

    #[test]
    fn test_exemption_flags() {
        let entities = ExtractedEntities {
            amount: Some(dec!(200000)),
            is_export: true,
            ..Default::default()
        };
        assert!(entities.is_exempt());
        assert!(!entities.is_empty());
    }

    #[test]
    fn test_serde_skips_absent_fields() {
        let json = serde_json::to_string(&ExtractedEntities::default()).unwrap();
        assert!(!json.contains("amount"));
        assert!(json.contains("is_export"));
    }
}
