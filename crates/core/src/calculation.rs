//! Calculation results
//!
//! Tagged union produced by the tax calculator and consumed once by the
//! response renderer. Nothing here is persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All amounts are Algerian dinars.
pub const CURRENCY: &str = "DZD";

/// Which calculation the query resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationType {
    Vat,
    IncomeTax,
    General,
}

impl std::fmt::Display for CalculationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Vat => "vat",
            Self::IncomeTax => "income_tax",
            Self::General => "general",
        };
        write!(f, "{s}")
    }
}

/// Which VAT rate-resolution rule fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VatReason {
    Export,
    FreeZone,
    NormalRate,
}

impl VatReason {
    /// Short label used in rendered responses
    pub fn label(&self) -> &'static str {
        match self {
            Self::Export => "Export",
            Self::FreeZone => "Zone franche",
            Self::NormalRate => "Taux normal",
        }
    }
}

/// Result of a fiscal computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalculationResult {
    /// VAT on an invoice amount
    Vat {
        amount_excl_tax: Decimal,
        /// Applied rate in percent
        rate: Decimal,
        tax_amount: Decimal,
        amount_incl_tax: Decimal,
        reason: VatReason,
        currency: String,
    },
    /// Progressive income tax (IRG) on a gross salary
    IncomeTax {
        gross_salary: Decimal,
        allowances: Decimal,
        taxable_base: Decimal,
        tax_amount: Decimal,
        net_salary: Decimal,
        dependents: u32,
        currency: String,
    },
    /// Localized help text when no calculation intent was found
    GeneralHelp { message: String },
}

impl CalculationResult {
    /// The calculation type this result belongs to
    pub fn calculation_type(&self) -> CalculationType {
        match self {
            Self::Vat { .. } => CalculationType::Vat,
            Self::IncomeTax { .. } => CalculationType::IncomeTax,
            Self::GeneralHelp { .. } => CalculationType::General,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_calculation_type_mapping() {
        let help = CalculationResult::GeneralHelp {
            message: "aide".into(),
        };
        assert_eq!(help.calculation_type(), CalculationType::General);

        let vat = CalculationResult::Vat {
            amount_excl_tax: dec!(100),
            rate: dec!(19),
            tax_amount: dec!(19),
            amount_incl_tax: dec!(119),
            reason: VatReason::NormalRate,
            currency: CURRENCY.into(),
        };
        assert_eq!(vat.calculation_type(), CalculationType::Vat);
    }

    #[test]
    fn test_serde_tagging() {
        let vat = CalculationResult::Vat {
            amount_excl_tax: dec!(100),
            rate: dec!(19),
            tax_amount: dec!(19),
            amount_incl_tax: dec!(119),
            reason: VatReason::Export,
            currency: CURRENCY.into(),
        };
        let json = serde_json::to_string(&vat).unwrap();
        assert!(json.contains("\"type\":\"vat\""));
        assert!(json.contains("\"reason\":\"export\""));
    }
}
