//! Response rendering
//!
//! Maps a calculation result and a language to a filled-in template.
//! The template table is keyed by `(CalculationType, Language)`; French
//! entries are mandatory for every calculation type and checked at
//! construction, since French is the fallback for any missing pair.
//! Monetary values are formatted `#,##0.00`.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use fiscal_agent_core::{CalculationResult, CalculationType, Language};

use crate::AgentError;

type TemplateTable = HashMap<(CalculationType, Language), &'static str>;

/// Template-based localized renderer
#[derive(Debug)]
pub struct ResponseRenderer {
    templates: TemplateTable,
}

impl ResponseRenderer {
    /// Build the renderer and verify the French fallback entries exist
    pub fn new() -> Result<Self, AgentError> {
        Self::from_table(default_templates())
    }

    fn from_table(templates: TemplateTable) -> Result<Self, AgentError> {
        for kind in [
            CalculationType::Vat,
            CalculationType::IncomeTax,
            CalculationType::General,
        ] {
            if !templates.contains_key(&(kind, Language::French)) {
                return Err(AgentError::MissingTemplate(kind));
            }
        }
        Ok(Self { templates })
    }

    /// Render a result in the requested language, falling back to the
    /// French template when the language has no dedicated one.
    pub fn render(&self, result: &CalculationResult, lang: Language) -> Result<String, AgentError> {
        let kind = result.calculation_type();
        let template = self
            .templates
            .get(&(kind, lang))
            .or_else(|| self.templates.get(&(kind, Language::French)))
            .ok_or(AgentError::MissingTemplate(kind))?;

        Ok(fill(template, result))
    }
}

/// Naive placeholder substitution; field values are not escaped
fn fill(template: &str, result: &CalculationResult) -> String {
    match result {
        CalculationResult::Vat {
            amount_excl_tax,
            rate,
            tax_amount,
            amount_incl_tax,
            ..
        } => template
            .replace("{amount_excl}", &format_amount(*amount_excl_tax))
            .replace("{rate}", &format_rate(*rate))
            .replace("{tax}", &format_amount(*tax_amount))
            .replace("{total}", &format_amount(*amount_incl_tax)),
        CalculationResult::IncomeTax {
            gross_salary,
            allowances,
            tax_amount,
            net_salary,
            dependents,
            ..
        } => template
            .replace("{gross}", &format_amount(*gross_salary))
            .replace("{allowances}", &format_amount(*allowances))
            .replace("{tax}", &format_amount(*tax_amount))
            .replace("{net}", &format_amount(*net_salary))
            .replace("{dependents}", &dependents.to_string()),
        CalculationResult::GeneralHelp { message } => template.replace("{message}", message),
    }
}

/// Format a monetary value as `#,##0.00`
fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{rounded:.2}");

    let (sign, text) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text, "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits = int_part.as_bytes();
    for (i, b) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }

    format!("{sign}{grouped}.{frac_part}")
}

/// Format a percent rate without trailing zeros (19.00 -> "19")
fn format_rate(rate: Decimal) -> String {
    rate.normalize().to_string()
}

fn default_templates() -> TemplateTable {
    HashMap::from([
        // VAT
        (
            (CalculationType::Vat, Language::Arabic),
            "💰 حساب ضريبة القيمة المضافة:\n\
             المبلغ بدون ضريبة: {amount_excl} دج\n\
             معدل الضريبة: {rate}%\n\
             ضريبة القيمة المضافة: {tax} دج\n\
             المبلغ الإجمالي: {total} دج",
        ),
        (
            (CalculationType::Vat, Language::Darija),
            "💰 حساب الضريبة:\n\
             المبلغ بلا ضريبة: {amount_excl} دج\n\
             نسبة الضريبة: {rate}%\n\
             الضريبة: {tax} دج\n\
             المجموع: {total} دج",
        ),
        (
            (CalculationType::Vat, Language::French),
            "💰 Calcul TVA Algeria:\n\
             Montant HT: {amount_excl} DZD\n\
             Taux TVA: {rate}%\n\
             Montant TVA: {tax} DZD\n\
             Montant TTC: {total} DZD",
        ),
        (
            (CalculationType::Vat, Language::Amazigh),
            "💰 Asiḍen n tigawin:\n\
             Azal war tigawin: {amount_excl} DZD\n\
             Aḍris n tigawin: {rate}%\n\
             Tigawin: {tax} DZD\n\
             Azal s tigawin: {total} DZD",
        ),
        // IRG
        (
            (CalculationType::IncomeTax, Language::Arabic),
            "💼 حساب ضريبة الدخل الإجمالي:\n\
             الراتب الإجمالي: {gross} دج\n\
             الإعفاءات: {allowances} دج\n\
             ضريبة الدخل: {tax} دج\n\
             الراتب الصافي: {net} دج\n\
             عدد الأطفال: {dependents}",
        ),
        (
            (CalculationType::IncomeTax, Language::Darija),
            "💼 حساب ضريبة الراتب:\n\
             الراتب الكامل: {gross} دج\n\
             التخفيضات: {allowances} دج\n\
             الضريبة: {tax} دج\n\
             الراتب الصافي: {net} دج\n\
             عدد الدراري: {dependents}",
        ),
        (
            (CalculationType::IncomeTax, Language::French),
            "💼 Calcul IRG Algeria:\n\
             Salaire brut: {gross} DZD\n\
             Abattements: {allowances} DZD\n\
             IRG: {tax} DZD\n\
             Salaire net: {net} DZD\n\
             Enfants: {dependents}",
        ),
        (
            (CalculationType::IncomeTax, Language::Amazigh),
            "💼 Asiḍen n tigawin n udem:\n\
             Azref amellal: {gross} DZD\n\
             Isenkisen: {allowances} DZD\n\
             Tigawin n udem: {tax} DZD\n\
             Azref d uzayad: {net} DZD\n\
             Arrac: {dependents}",
        ),
        // General help carries its own localized message
        ((CalculationType::General, Language::French), "{message}"),
    ])
}
