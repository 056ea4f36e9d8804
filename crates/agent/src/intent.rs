//! Intent classification
//!
//! Scores the query against per-language VAT and IRG keyword sets and
//! picks a calculation type. Languages without a dedicated list fall
//! back to the French set. Tie-break is deliberately asymmetric:
//! `vat > irg` selects VAT, any remaining nonzero IRG score selects
//! income tax, otherwise the query is routed to general help.

use std::collections::{HashMap, HashSet};

use unicode_segmentation::UnicodeSegmentation;

use fiscal_agent_core::{CalculationType, Language};

/// Keyword-scoring VAT/IRG classifier
pub struct IntentClassifier {
    vat_keywords: HashMap<Language, HashSet<&'static str>>,
    irg_keywords: HashMap<Language, HashSet<&'static str>>,
}

impl IntentClassifier {
    pub fn new() -> Self {
        let vat_keywords = HashMap::from([
            (Language::Arabic, HashSet::from(["ضريبة", "قيمة", "مضافة"])),
            (Language::Darija, HashSet::from(["ضريبة", "تاع", "البيع"])),
            (Language::French, HashSet::from(["tva", "taxe", "valeur", "ajoutée"])),
            (Language::Amazigh, HashSet::from(["tigawin", "azal", "tmerci", "asiḍen"])),
        ]);

        let irg_keywords = HashMap::from([
            (Language::Arabic, HashSet::from(["ضريبة", "دخل", "راتب", "أجر"])),
            (Language::Darija, HashSet::from(["ضريبة", "الراتب", "الأجر"])),
            (Language::French, HashSet::from(["irg", "impôt", "revenu", "salaire"])),
            (Language::Amazigh, HashSet::from(["tigawin", "n", "udem", "azref", "ksebt"])),
        ]);

        Self {
            vat_keywords,
            irg_keywords,
        }
    }

    /// Pick the calculation type for a query. Total and deterministic.
    pub fn classify(&self, text: &str, lang: Language) -> CalculationType {
        let lower = text.to_lowercase();
        let words: HashSet<&str> = lower.unicode_words().collect();

        let vat_score = Self::score(&words, self.keywords_for(&self.vat_keywords, lang));
        let irg_score = Self::score(&words, self.keywords_for(&self.irg_keywords, lang));

        tracing::debug!(vat_score, irg_score, %lang, "Intent scores");

        if vat_score > irg_score {
            CalculationType::Vat
        } else if irg_score > 0 {
            CalculationType::IncomeTax
        } else {
            CalculationType::General
        }
    }

    /// Keyword set for a language, defaulting to the French set
    fn keywords_for<'a>(
        &'a self,
        table: &'a HashMap<Language, HashSet<&'static str>>,
        lang: Language,
    ) -> &'a HashSet<&'static str> {
        table.get(&lang).unwrap_or_else(|| &table[&Language::French])
    }

    /// Number of distinct keywords present in the query
    fn score(words: &HashSet<&str>, keywords: &HashSet<&'static str>) -> usize {
        keywords.iter().filter(|kw| words.contains(*kw)).count()
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vat_french() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.classify("Calculer la TVA sur 150000 DZD", Language::French),
            CalculationType::Vat
        );
    }

    #[test]
    fn test_irg_french() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.classify("IRG pour salaire 300000 DZD avec 2 enfants", Language::French),
            CalculationType::IncomeTax
        );
    }

    #[test]
    fn test_general_when_no_keywords() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.classify("Bonjour", Language::French),
            CalculationType::General
        );
    }

    #[test]
    fn test_arabic_vat() {
        let classifier = IntentClassifier::new();
        // Three VAT hits against one shared "ضريبة" IRG hit
        assert_eq!(
            classifier.classify("احسب ضريبة قيمة مضافة على 100000 دينار", Language::Arabic),
            CalculationType::Vat
        );
    }

    #[test]
    fn test_darija_salary() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.classify("كيفاش نحسب الضريبة على الراتب 200000 دج؟", Language::Darija),
            CalculationType::IncomeTax
        );
    }

    #[test]
    fn test_asymmetric_tie_break_prefers_income_tax() {
        let classifier = IntentClassifier::new();
        // "tva" and "salaire": one hit each, equal nonzero scores
        assert_eq!(
            classifier.classify("tva sur mon salaire", Language::French),
            CalculationType::IncomeTax
        );
    }

    #[test]
    fn test_english_falls_back_to_french_sets() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.classify("tva on 1000", Language::English),
            CalculationType::Vat
        );
    }

    #[test]
    fn test_amazigh_tigawin_tie() {
        let classifier = IntentClassifier::new();
        // "tigawin" appears in both Amazigh sets; "n" adds an IRG hit,
        // so the salary reading wins.
        assert_eq!(
            classifier.classify("Tigawin n udem azref 200000", Language::Amazigh),
            CalculationType::IncomeTax
        );
    }
}
