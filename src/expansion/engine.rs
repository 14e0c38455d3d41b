// Expansion engine - locale dispatch over the two independent rule sets

use rand::{thread_rng, Rng};

use super::context::ExpansionContext;
use super::{rules_en, rules_zh};
use crate::locale::Locale;
use crate::sentence::SentenceToken;

/// Source of the random pick used by the English request templates.
/// Injectable so tests can pin or enumerate outcomes.
pub trait TemplateChooser {
    /// Pick one of `templates`; callers guarantee the slice is non-empty.
    fn choose<'a>(&self, templates: &'a [String]) -> &'a str;
}

/// Default chooser backed by the thread-local RNG, uniform over templates.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomChooser;

impl TemplateChooser for RandomChooser {
    fn choose<'a>(&self, templates: &'a [String]) -> &'a str {
        let index = thread_rng().gen_range(0..templates.len());
        &templates[index]
    }
}

/// Deterministic chooser that always picks the template at a fixed index.
#[derive(Debug, Clone, Copy)]
pub struct FixedChooser(pub usize);

impl TemplateChooser for FixedChooser {
    fn choose<'a>(&self, templates: &'a [String]) -> &'a str {
        &templates[self.0 % templates.len()]
    }
}

/// Phrase expansion engine.
///
/// Pure function of its inputs apart from the single chooser call in the
/// English food/object request rule; safe to call from any thread.
pub struct ExpansionEngine<C: TemplateChooser> {
    chooser: C,
}

impl Default for ExpansionEngine<RandomChooser> {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpansionEngine<RandomChooser> {
    /// Create an engine with the default random template chooser.
    pub fn new() -> Self {
        Self {
            chooser: RandomChooser,
        }
    }
}

impl<C: TemplateChooser> ExpansionEngine<C> {
    /// Create an engine with an injected template chooser.
    pub fn with_chooser(chooser: C) -> Self {
        Self { chooser }
    }

    /// Expand a sentence snapshot into a full utterance for `locale`.
    ///
    /// Hosts guard against empty snapshots before calling; an empty input
    /// yields an empty string with no further processing.
    pub fn expand(&self, tokens: &[SentenceToken], locale: Locale) -> String {
        let Some(ctx) = ExpansionContext::from_tokens(tokens, locale) else {
            return String::new();
        };

        let expanded = match locale {
            Locale::En => rules_en::expand(&ctx, &self.chooser),
            Locale::Zh => rules_zh::expand(&ctx),
        };

        crate::debug!(
            "Expanded {} tokens under {}: {:?}",
            tokens.len(),
            locale,
            expanded
        );
        expanded
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
