// Board events for host notification
// Defines event payloads and an emission trait for testability

use serde::Serialize;

use crate::locale::Locale;

/// Event names as constants for consistency
pub mod event_names {
    pub const SENTENCE_CHANGED: &str = "sentence_changed";
    pub const LOCALE_CHANGED: &str = "locale_changed";
    pub const SENTENCE_EXPANDED: &str = "sentence_expanded";
    pub const EMERGENCY_TRIGGERED: &str = "emergency_triggered";
}

/// Payload for sentence_changed - emitted after every buffer mutation so the
/// presentation can re-render the sentence strip
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SentenceChangedPayload {
    /// Resolved display words, in order
    pub words: Vec<String>,
    /// Current token count
    pub token_count: usize,
}

/// Payload for locale_changed - the switch also cleared the buffer
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocaleChangedPayload {
    pub locale: Locale,
}

/// Payload for sentence_expanded
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SentenceExpandedPayload {
    /// The words the expansion was derived from
    pub words: Vec<String>,
    /// The expanded utterance
    pub expanded_text: String,
    pub locale: Locale,
}

/// Payload for emergency_triggered
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyTriggeredPayload {
    /// The phrase that was spoken
    pub message: String,
    pub locale: Locale,
}

/// Trait for emitting board events
/// Allows mocking in tests while the host wires its own event bus
pub trait BoardEventEmitter: Send + Sync {
    fn emit_sentence_changed(&self, payload: SentenceChangedPayload);
    fn emit_locale_changed(&self, payload: LocaleChangedPayload);
    fn emit_sentence_expanded(&self, payload: SentenceExpandedPayload);
    fn emit_emergency_triggered(&self, payload: EmergencyTriggeredPayload);
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
