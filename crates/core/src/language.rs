//! Language definitions for the Algerian fiscal assistant
//!
//! Covers the five variants queries arrive in: Standard Arabic, Algerian
//! Darija, French, English, and Amazigh (Tifinagh or Latin script).

use serde::{Deserialize, Serialize};

/// Supported language variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Arabic,
    Darija,
    /// Detection fallback when nothing else matches
    #[default]
    French,
    English,
    Amazigh,
}

impl Language {
    /// Get language tag code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::Darija => "ar-DZ",
            Self::French => "fr",
            Self::English => "en",
            Self::Amazigh => "ber",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Arabic => "Arabic",
            Self::Darija => "Algerian Darija",
            Self::French => "French",
            Self::English => "English",
            Self::Amazigh => "Amazigh",
        }
    }

    /// Get the native script of this language
    ///
    /// Amazigh is mapped to Tifinagh even though queries also arrive in
    /// Latin transcription; the detector handles both forms.
    pub fn script(&self) -> Script {
        match self {
            Self::Arabic | Self::Darija => Script::Arabic,
            Self::French | Self::English => Script::Latin,
            Self::Amazigh => Script::Tifinagh,
        }
    }

    /// Check if this language uses a right-to-left script
    pub fn is_rtl(&self) -> bool {
        matches!(self.script(), Script::Arabic)
    }

    /// Parse from string (case-insensitive)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "ar" | "ara" | "arabic" => Some(Self::Arabic),
            "ar-dz" | "ar_dz" | "dz" | "darija" | "darja" => Some(Self::Darija),
            "fr" | "fra" | "french" | "francais" | "français" => Some(Self::French),
            "en" | "eng" | "english" => Some(Self::English),
            "ber" | "kab" | "amazigh" | "tamazight" | "kabyle" => Some(Self::Amazigh),
            _ => None,
        }
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[
            Self::Arabic,
            Self::Darija,
            Self::French,
            Self::English,
            Self::Amazigh,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Language {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| crate::Error::UnknownLanguage(s.to_string()))
    }
}

/// Script systems seen in incoming queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Arabic,
    Tifinagh,
}

impl Script {
    /// Get Unicode range for this script (first block only)
    pub fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Latin => (0x0000, 0x007F),
            Self::Arabic => (0x0600, 0x06FF),
            Self::Tifinagh => (0x2D30, 0x2D7F),
        }
    }

    /// Check if a character belongs to this script
    pub fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        let (start, end) = self.unicode_range();
        code >= start && code <= end
    }

    /// Check if any character in the text belongs to this script
    pub fn appears_in(&self, text: &str) -> bool {
        text.chars().any(|c| self.contains_char(c))
    }

    /// Detect script from text (returns most frequent script)
    pub fn detect(text: &str) -> Option<Self> {
        let mut counts = std::collections::HashMap::new();

        for c in text.chars() {
            for script in &[Self::Tifinagh, Self::Arabic, Self::Latin] {
                if script.contains_char(c) && c.is_alphabetic() {
                    *counts.entry(*script).or_insert(0) += 1;
                    break;
                }
            }
        }

        counts.into_iter().max_by_key(|(_, v)| *v).map(|(k, _)| k)
    }
}
