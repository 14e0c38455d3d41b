// BoardSession - unified board flow
// Handles: token selection → immediate speech feedback → expansion → playback
//
// The session is the "host side" of the engine contract: it guards the
// empty-buffer case, takes buffer snapshots atomically relative to user
// edits, and forwards every utterance to the speech dispatcher.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::catalog::VocabularyCatalog;
use crate::events::{
    BoardEventEmitter, EmergencyTriggeredPayload, LocaleChangedPayload, SentenceChangedPayload,
    SentenceExpandedPayload,
};
use crate::expansion::{ExpansionEngine, RandomChooser, TemplateChooser};
use crate::locale::Locale;
use crate::sentence::{SentenceBuffer, SentenceToken};
use crate::speech::SpeechDispatcher;

/// The fixed emergency phrase for a locale, spoken by the emergency button.
pub fn emergency_phrase(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Emergency! I need help immediately!",
        Locale::Zh => "紧急情况！请帮帮我！",
    }
}

/// Error types for board operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    /// No catalog item with this id
    #[error("No vocabulary item with ID {0}")]
    UnknownVocabulary(u32),
    /// Expansion or playback requested with an empty sentence
    #[error("Invalid expansion request: the sentence is empty")]
    InvalidExpansionRequest,
}

/// Interactive board session.
///
/// Holds the sentence buffer and active locale behind a single lock so that
/// expansion snapshots are always consistent with respect to concurrent
/// edits. Speech and event collaborators are injected; speech failures are
/// logged and never propagate.
pub struct BoardSession<S, E, C = RandomChooser>
where
    S: SpeechDispatcher,
    E: BoardEventEmitter,
    C: TemplateChooser,
{
    catalog: Arc<VocabularyCatalog>,
    state: Mutex<BoardState>,
    engine: ExpansionEngine<C>,
    speech: Arc<S>,
    emitter: Arc<E>,
}

struct BoardState {
    buffer: SentenceBuffer,
    locale: Locale,
}

impl<S, E> BoardSession<S, E, RandomChooser>
where
    S: SpeechDispatcher,
    E: BoardEventEmitter,
{
    /// Create a session with the built-in catalog, English locale and the
    /// random template chooser.
    pub fn new(speech: Arc<S>, emitter: Arc<E>) -> Self {
        Self::with_parts(
            Arc::new(VocabularyCatalog::builtin()),
            Locale::En,
            ExpansionEngine::new(),
            speech,
            emitter,
        )
    }
}

impl<S, E, C> BoardSession<S, E, C>
where
    S: SpeechDispatcher,
    E: BoardEventEmitter,
    C: TemplateChooser,
{
    /// Create a session from explicit parts (custom catalog, starting
    /// locale, injected chooser).
    pub fn with_parts(
        catalog: Arc<VocabularyCatalog>,
        locale: Locale,
        engine: ExpansionEngine<C>,
        speech: Arc<S>,
        emitter: Arc<E>,
    ) -> Self {
        Self {
            catalog,
            state: Mutex::new(BoardState {
                buffer: SentenceBuffer::new(),
                locale,
            }),
            engine,
            speech,
            emitter,
        }
    }

    /// The catalog the board renders from.
    pub fn catalog(&self) -> &VocabularyCatalog {
        &self.catalog
    }

    /// The active locale.
    pub fn locale(&self) -> Locale {
        self.state.lock().locale
    }

    /// Ordered copy of the current sentence tokens.
    pub fn snapshot(&self) -> Vec<SentenceToken> {
        self.state.lock().buffer.snapshot()
    }

    /// Select a pictogram by catalog id: appends the token and speaks its
    /// display text as immediate feedback.
    pub fn select_vocabulary(&self, id: u32) -> Result<(), BoardError> {
        let item = self
            .catalog
            .get(id)
            .ok_or(BoardError::UnknownVocabulary(id))?;
        self.append_and_speak(SentenceToken::Vocabulary(item.clone()));
        Ok(())
    }

    /// Append manually typed text as a token and speak it.
    pub fn type_free_text(&self, text: impl Into<String>) {
        self.append_and_speak(SentenceToken::FreeText { text: text.into() });
    }

    fn append_and_speak(&self, token: SentenceToken) {
        let (spoken, payload, locale) = {
            let mut state = self.state.lock();
            let locale = state.locale;
            let spoken = token.resolve_text(locale).to_string();
            state.buffer.append(token);
            (spoken, self.sentence_payload(&state), locale)
        };
        self.emitter.emit_sentence_changed(payload);
        self.speak(&spoken, locale);
    }

    /// Remove the most recent token; no-op on an empty sentence.
    pub fn backspace(&self) {
        let payload = {
            let mut state = self.state.lock();
            state.buffer.remove_last();
            self.sentence_payload(&state)
        };
        self.emitter.emit_sentence_changed(payload);
    }

    /// Clear the sentence.
    pub fn clear(&self) {
        let payload = {
            let mut state = self.state.lock();
            state.buffer.clear();
            self.sentence_payload(&state)
        };
        self.emitter.emit_sentence_changed(payload);
    }

    /// Switch the active locale. Building a sentence across languages is
    /// invalid by definition, so the buffer is cleared as part of the switch.
    pub fn set_locale(&self, locale: Locale) {
        {
            let mut state = self.state.lock();
            state.locale = locale;
            state.buffer.clear();
        }
        crate::info!("Locale switched to {}, sentence cleared", locale);
        self.emitter
            .emit_locale_changed(LocaleChangedPayload { locale });
    }

    /// Speak the plain (unexpanded) sentence and return its text.
    pub fn speak_sentence(&self) -> Result<String, BoardError> {
        let (text, locale) = {
            let state = self.state.lock();
            if state.buffer.is_empty() {
                return Err(BoardError::InvalidExpansionRequest);
            }
            let words = state.buffer.words(state.locale);
            (state.locale.join_words(&words), state.locale)
        };
        self.speak(&text, locale);
        Ok(text)
    }

    /// Expand the current sentence, speak the result and return it.
    ///
    /// The snapshot is taken under the state lock, so the expansion always
    /// reflects a consistent buffer state as of request time; the engine
    /// then runs outside the lock and its result stays valid even if the
    /// user edits the buffer mid-flight.
    pub fn expand(&self) -> Result<String, BoardError> {
        let (tokens, words, locale) = {
            let state = self.state.lock();
            if state.buffer.is_empty() {
                return Err(BoardError::InvalidExpansionRequest);
            }
            (
                state.buffer.snapshot(),
                state.buffer.words(state.locale),
                state.locale,
            )
        };

        let expanded = self.engine.expand(&tokens, locale);

        self.emitter.emit_sentence_expanded(SentenceExpandedPayload {
            words,
            expanded_text: expanded.clone(),
            locale,
        });
        self.speak(&expanded, locale);
        Ok(expanded)
    }

    /// Speak the locale's fixed emergency phrase.
    pub fn trigger_emergency(&self) {
        let locale = self.locale();
        let message = emergency_phrase(locale);
        self.emitter
            .emit_emergency_triggered(EmergencyTriggeredPayload {
                message: message.to_string(),
                locale,
            });
        self.speak(message, locale);
    }

    fn sentence_payload(&self, state: &BoardState) -> SentenceChangedPayload {
        SentenceChangedPayload {
            words: state.buffer.words(state.locale),
            token_count: state.buffer.len(),
        }
    }

    // Speech failures are recoverable: log and continue, never crash the
    // interactive session over a failed utterance.
    fn speak(&self, text: &str, locale: Locale) {
        if let Err(e) = self.speech.speak(text, locale) {
            crate::warn!("Speech dispatch failed for {}: {}", locale, e);
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
