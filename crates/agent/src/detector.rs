//! Language detection
//!
//! Deterministic, priority-ordered classification into one of the five
//! supported variants. First match wins:
//! 1. Tifinagh characters or an Amazigh Latin-script keyword -> Amazigh
//! 2. A Darija keyword -> Darija
//! 3. Arabic-block characters -> Arabic
//! 4. A French accented character or French fiscal keyword -> French
//! 5. Default -> French
//!
//! Under this order `Language::English` is never produced by detection;
//! it enters the system only through caller-supplied hints
//! (`Language::from_str_loose`).
//!
//! Keyword hits are word-level (Unicode segmentation), not substring:
//! short Amazigh particles like "n" must not match inside French words.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use unicode_segmentation::UnicodeSegmentation;

use fiscal_agent_core::{Language, Script};

/// Amazigh keywords in Latin transcription: common particles, question
/// words, numerals, money/calculation terms, plus Kabyle, Chaoui,
/// Mozabite, and Tuareg markers.
static AMAZIGH_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "deg", "n", "akken", "ma", "neɣ", "ad", "ur", "ara",
        "amek", "melmi", "anda", "ayenna", "wid", "tid",
        "yiwen", "sin", "kraḍ", "kkuẓ", "semmus", "sḍis",
        "asiḍen", "tigawin", "azref", "idrimen", "tamurt",
        "tizi", "adrar", "aman", "tafukt", "aggur",
        "amellal", "aberkan", "azegzaw",
        "taghardayt", "bani", "mzab",
        "tamashek", "kel", "akal",
    ])
});

/// Algerian Darija markers that distinguish it from Standard Arabic
static DARIJA_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "كيفاش", "واش", "بصح", "هكاك", "ديال", "نتاع", "ماشي", "برك", "دراري", "ولاد",
    ])
});

/// French fiscal keywords that mark an unaccented French query
static FRENCH_KEYWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["calculer", "tva", "irg"]));

/// Accented Latin characters typical of French text
const FRENCH_ACCENTS: &str = "àâäéèêëïîôùûüÿç";

/// Priority-ordered keyword/script language classifier
#[derive(Debug, Default)]
pub struct LanguageDetector;

impl LanguageDetector {
    pub fn new() -> Self {
        Self
    }

    /// Classify free text into a language variant. Total and
    /// case-insensitive; French is the fallback.
    pub fn detect(&self, text: &str) -> Language {
        let lower = text.to_lowercase();
        let words: HashSet<&str> = lower.unicode_words().collect();

        if Script::Tifinagh.appears_in(text)
            || words.iter().any(|w| AMAZIGH_KEYWORDS.contains(w))
        {
            return Language::Amazigh;
        }

        if words.iter().any(|w| DARIJA_KEYWORDS.contains(w)) {
            return Language::Darija;
        }

        if Script::Arabic.appears_in(text) {
            return Language::Arabic;
        }

        if lower.chars().any(|c| FRENCH_ACCENTS.contains(c))
            || words.iter().any(|w| FRENCH_KEYWORDS.contains(w))
        {
            return Language::French;
        }

        Language::French
    }
}
