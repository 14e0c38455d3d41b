// Expansion context - the per-request view of the sentence the rules read
// Derived fresh from a buffer snapshot on every request, never cached

use crate::locale::Locale;
use crate::sentence::{SentenceToken, TokenCategory};

/// Locale-resolved view of a sentence snapshot.
///
/// `last_word` is lowercased under EN (rule comparisons are case-insensitive
/// and templates insert the lowercased form); ZH has no case and keeps the
/// raw string.
#[derive(Debug, Clone)]
pub struct ExpansionContext {
    /// Resolved display text of every token, in speech order
    pub words: Vec<String>,
    /// Category of the final token
    pub last_category: TokenCategory,
    /// Resolved text of the final token
    pub last_word: String,
    /// The locale the words were resolved under
    pub locale: Locale,
}

impl ExpansionContext {
    /// Build the context from a buffer snapshot. Returns `None` for an empty
    /// snapshot: last word and category are undefined without tokens.
    pub fn from_tokens(tokens: &[SentenceToken], locale: Locale) -> Option<Self> {
        let last = tokens.last()?;

        let words: Vec<String> = tokens
            .iter()
            .map(|token| token.resolve_text(locale).to_string())
            .collect();

        let last_word = match locale {
            Locale::En => last.resolve_text(locale).to_lowercase(),
            Locale::Zh => last.resolve_text(locale).to_string(),
        };

        Some(Self {
            words,
            last_category: last.category(),
            last_word,
            locale,
        })
    }

    /// The plain joined sentence, used by fallback templates.
    pub fn joined_words(&self) -> String {
        self.locale.join_words(&self.words)
    }

    /// Whether any word equals `needle` exactly (ZH-style matching).
    pub fn contains_word(&self, needle: &str) -> bool {
        self.words.iter().any(|w| w == needle)
    }

    /// Whether any word equals `needle` ignoring ASCII case (EN-style
    /// matching).
    pub fn contains_word_ignore_case(&self, needle: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(needle))
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
