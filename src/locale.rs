// Active display/speech language - selects per-token text and the rule set

use serde::{Deserialize, Serialize};

/// Display and speech language for the board.
///
/// Changing the active locale mid-sentence is invalid by definition: the
/// session clears the sentence buffer whenever the locale switches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    En,
    /// Simplified Chinese
    Zh,
}

impl Locale {
    /// Join resolved words into the plain (unexpanded) sentence text.
    /// The original board joins with a single space in both languages.
    pub fn join_words(&self, words: &[String]) -> String {
        words.join(" ")
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            _ => Err(format!("Unknown locale: {}", s)),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Zh => write!(f, "zh"),
        }
    }
}

#[cfg(test)]
#[path = "locale_test.rs"]
mod tests;
