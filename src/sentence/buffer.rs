// Sentence buffer - ordered accumulator of selected tokens
// Insertion order is speech order and expansion context; repeats are allowed

use serde::Serialize;

use crate::catalog::{Category, VocabularyItem};
use crate::locale::Locale;

/// One unit of the sentence: a catalog pictogram selection or free-typed text.
///
/// Free-typed text has no category and no per-locale variants; it carries the
/// literal typed string whatever the active locale is. Modeling this as a
/// separate variant makes "manual has no category" a structural fact.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SentenceToken {
    /// A vocabulary catalog selection
    Vocabulary(VocabularyItem),
    /// Manually typed text from the on-screen keyboard
    FreeText { text: String },
}

/// Category of a sentence token as seen by the expansion rules:
/// the vocabulary category, or `Manual` for free-typed text.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    People,
    Action,
    Food,
    Object,
    Feeling,
    Manual,
}

impl From<Category> for TokenCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::People => TokenCategory::People,
            Category::Action => TokenCategory::Action,
            Category::Food => TokenCategory::Food,
            Category::Object => TokenCategory::Object,
            Category::Feeling => TokenCategory::Feeling,
        }
    }
}

impl SentenceToken {
    /// Display text of this token under the given locale.
    pub fn resolve_text(&self, locale: Locale) -> &str {
        match self {
            SentenceToken::Vocabulary(item) => item.label(locale),
            SentenceToken::FreeText { text } => text,
        }
    }

    /// Rule-engine category of this token.
    pub fn category(&self) -> TokenCategory {
        match self {
            SentenceToken::Vocabulary(item) => item.category.into(),
            SentenceToken::FreeText { .. } => TokenCategory::Manual,
        }
    }
}

/// Ordered, mutable sequence of selected tokens.
///
/// A plain accumulator with no error conditions. Speech feedback and
/// re-render notifications on mutation belong to the board session, not here.
#[derive(Debug, Default)]
pub struct SentenceBuffer {
    tokens: Vec<SentenceToken>,
}

impl SentenceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token; always succeeds, ordering preserved.
    pub fn append(&mut self, token: SentenceToken) {
        self.tokens.push(token);
    }

    /// Remove the most recent token; no-op when empty.
    pub fn remove_last(&mut self) {
        self.tokens.pop();
    }

    /// Empty the buffer unconditionally.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Immutable ordered copy of the current tokens.
    /// Callers take snapshots so expansion never races buffer edits.
    pub fn snapshot(&self) -> Vec<SentenceToken> {
        self.tokens.clone()
    }

    /// Resolved display text of every token, in order.
    pub fn words(&self, locale: Locale) -> Vec<String> {
        self.tokens
            .iter()
            .map(|token| token.resolve_text(locale).to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
#[path = "buffer_test.rs"]
mod tests;
