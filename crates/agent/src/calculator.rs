//! Tax computation
//!
//! Pure functions over the rate table. Monetary rounding is half-up to
//! two decimal places, applied once on the aggregate tax amount (never
//! on intermediate ratios). A missing amount is treated as zero rather
//! than an error; callers that need strict validation check entity
//! presence before invoking.

use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};

use fiscal_agent_config::FiscalConfig;
use fiscal_agent_core::{CalculationResult, ExtractedEntities, Language, VatReason, CURRENCY};

/// Round half-up to 2 decimal places
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// VAT and progressive IRG calculator over a shared, immutable rate table
pub struct TaxCalculator {
    config: Arc<FiscalConfig>,
}

impl TaxCalculator {
    pub fn new(config: Arc<FiscalConfig>) -> Self {
        Self { config }
    }

    /// Compute VAT on the extracted amount.
    ///
    /// Export or free-zone flags force the exempt rate regardless of any
    /// other cue; export wins the recorded reason when both are set.
    pub fn compute_vat(&self, entities: &ExtractedEntities) -> CalculationResult {
        let amount = entities.amount_or_zero();

        let (rate, reason) = if entities.is_export {
            (self.config.vat.exempt, VatReason::Export)
        } else if entities.is_free_zone {
            (self.config.vat.exempt, VatReason::FreeZone)
        } else {
            (self.config.vat.normal, VatReason::NormalRate)
        };

        let tax_amount = round2(amount * rate / Decimal::ONE_HUNDRED);
        let amount_incl_tax = amount + tax_amount;

        CalculationResult::Vat {
            amount_excl_tax: amount,
            rate,
            tax_amount,
            amount_incl_tax,
            reason,
            currency: CURRENCY.to_string(),
        }
    }

    /// Compute progressive income tax (IRG) on the extracted gross salary
    pub fn compute_income_tax(&self, entities: &ExtractedEntities) -> CalculationResult {
        let gross = entities.amount_or_zero();
        let dependents = entities.dependents_or_zero();

        let allowances = self.config.allowance_for(dependents);
        let taxable_base = (gross - allowances).max(Decimal::ZERO);

        let mut tax = Decimal::ZERO;
        for bracket in &self.config.brackets {
            if taxable_base <= bracket.lower {
                continue;
            }
            let capped = match bracket.upper {
                Some(upper) => taxable_base.min(upper),
                None => taxable_base,
            };
            tax += (capped - bracket.lower) * bracket.rate / Decimal::ONE_HUNDRED;
        }

        let tax_amount = round2(tax);
        let net_salary = gross - tax_amount;

        CalculationResult::IncomeTax {
            gross_salary: gross,
            allowances,
            taxable_base,
            tax_amount,
            net_salary,
            dependents,
            currency: CURRENCY.to_string(),
        }
    }

    /// Fixed localized help text for queries without a calculation intent
    pub fn general_help(&self, lang: Language) -> CalculationResult {
        let message = match lang {
            Language::Arabic => "يمكنني مساعدتك في حساب الضرائب الجزائرية (TVA, IRG)",
            Language::Darija => "نقدر نعاونك في الضرائب تاع الجزائر",
            Language::Amazigh => "Zemreɣ ad k-ɛiwneɣ deg tigawin n Dzayer (TVA, IRG)",
            Language::French | Language::English => {
                "Je peux vous aider avec les calculs fiscaux algériens"
            }
        };

        CalculationResult::GeneralHelp {
            message: message.to_string(),
        }
    }
}
