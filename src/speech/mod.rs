// Speech dispatch seam - the host's text-to-speech engine sits behind this
// trait so the core stays free of audio concerns and tests can observe
// utterances

use crate::locale::Locale;

/// Error from the host's speech engine (voice missing, engine unavailable).
///
/// Speech failures are recoverable by policy: the session logs and carries
/// on, a failed utterance never ends the interactive session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Speech dispatch failed: {0}")]
pub struct SpeechError(pub String);

/// Host-implemented text-to-speech collaborator.
///
/// The host is expected to serialize utterances (one audible at a time);
/// the core takes no lock around dispatch.
pub trait SpeechDispatcher: Send + Sync {
    /// Speak `text` with a voice appropriate for `locale`.
    fn speak(&self, text: &str, locale: Locale) -> Result<(), SpeechError>;
}
