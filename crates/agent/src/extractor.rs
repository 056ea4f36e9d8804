//! Entity extraction
//!
//! Pulls the monetary amount, dependent count, and exemption flags out
//! of free text. Patterns are compiled once at construction and tried
//! in priority order; the first match wins. Absence of a match leaves
//! the field unset.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use rust_decimal::Decimal;
use unicode_segmentation::UnicodeSegmentation;

use fiscal_agent_core::{ExtractedEntities, Language};

/// Regex-based extractor with per-language keyword tables
pub struct EntityExtractor {
    /// Amount patterns, most specific first (currency-suffixed, then bare)
    amount_patterns: Vec<Regex>,
    /// `<integer> <dependent-word>` patterns keyed by language
    dependent_patterns: HashMap<Language, Regex>,
    export_keywords: HashMap<Language, HashSet<&'static str>>,
    zone_keywords: HashMap<Language, HashSet<&'static str>>,
}

impl EntityExtractor {
    pub fn new() -> Self {
        let amount_patterns = vec![
            // Currency-suffixed amount: DZD/DA/dinar, Arabic دج/دينار, Amazigh idrimen
            Regex::new(
                r"(?i)(\d{1,3}(?:[\s,.]?\d{3})*(?:[.,]\d{2})?)\s*(?:dzd|da|dinars?|دج|دينار|idrimen)",
            )
            .unwrap(),
            // Bare decimal-looking number
            Regex::new(r"(\d{1,3}(?:[\s,.]?\d{3})*(?:[.,]\d{2})?)").unwrap(),
        ];

        let dependent_patterns = HashMap::from([
            (Language::Arabic, Regex::new(r"(\d+)\s*(?:أطفال|أولاد|طفل)").unwrap()),
            (Language::Darija, Regex::new(r"(\d+)\s*(?:دراري|ولاد|طفل)").unwrap()),
            (Language::French, Regex::new(r"(?i)(\d+)\s*(?:enfants?)").unwrap()),
            (Language::English, Regex::new(r"(?i)(\d+)\s*(?:children|child|dependents?)").unwrap()),
            (Language::Amazigh, Regex::new(r"(\d+)\s*(?:arrac|mmi|tarwa|uqcic)").unwrap()),
        ]);

        let export_keywords = HashMap::from([
            (Language::Arabic, HashSet::from(["تصدير", "صادرات"])),
            (Language::Darija, HashSet::from(["تصدير", "صادرات"])),
            (Language::French, HashSet::from(["export", "exportation"])),
            (Language::English, HashSet::from(["export", "exports"])),
            (Language::Amazigh, HashSet::from(["asifeḍ", "tufɣa", "azen"])),
        ]);

        let zone_keywords = HashMap::from([
            (Language::Arabic, HashSet::from(["منطقة", "حرة"])),
            (Language::Darija, HashSet::from(["منطقة", "حرة"])),
            (Language::French, HashSet::from(["zone", "franche"])),
            (Language::English, HashSet::from(["zone", "free"])),
            (Language::Amazigh, HashSet::from(["tamnaḍt", "tilelli", "akal"])),
        ]);

        Self {
            amount_patterns,
            dependent_patterns,
            export_keywords,
            zone_keywords,
        }
    }

    /// Extract entities from text. Total; unmatched fields stay unset.
    pub fn extract(&self, text: &str, lang: Language) -> ExtractedEntities {
        let lower = text.to_lowercase();
        let words: HashSet<&str> = lower.unicode_words().collect();

        let entities = ExtractedEntities {
            amount: self.extract_amount(&lower),
            dependents: self.extract_dependents(&lower, lang),
            is_export: self
                .export_keywords
                .get(&lang)
                .is_some_and(|kws| words.iter().any(|w| kws.contains(w))),
            is_free_zone: self
                .zone_keywords
                .get(&lang)
                .is_some_and(|kws| words.iter().any(|w| kws.contains(w))),
        };

        tracing::debug!(?entities, %lang, "Extracted entities");
        entities
    }

    /// First amount in the text, preferring currency-suffixed matches.
    /// Thousand separators (spaces, commas) are stripped before parsing.
    fn extract_amount(&self, lower: &str) -> Option<Decimal> {
        for pattern in &self.amount_patterns {
            if let Some(captures) = pattern.captures(lower) {
                if let Some(matched) = captures.get(1) {
                    let cleaned = matched.as_str().replace([' ', ','], "");
                    if let Ok(amount) = cleaned.parse::<Decimal>() {
                        return Some(amount);
                    }
                }
            }
        }
        None
    }

    fn extract_dependents(&self, lower: &str, lang: Language) -> Option<u32> {
        let pattern = self.dependent_patterns.get(&lang)?;
        let captures = pattern.captures(lower)?;
        captures.get(1)?.as_str().parse().ok()
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
