// phraseboard - AAC phrase board core
//
// The host (GUI + text-to-speech shell) builds a sentence from pictogram
// selections and free-typed text, then asks this crate to expand it into a
// grammatical utterance for the active locale. Everything audible or visible
// lives behind the SpeechDispatcher / BoardEventEmitter seams.

pub mod board;
pub mod catalog;
pub mod events;
pub mod expansion;
pub mod locale;
pub mod sentence;
pub mod speech;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use board::{BoardError, BoardSession};
pub use catalog::{CatalogError, Category, VocabularyCatalog, VocabularyItem};
pub use expansion::{ExpansionEngine, FixedChooser, RandomChooser, TemplateChooser};
pub use locale::Locale;
pub use sentence::{SentenceBuffer, SentenceToken, TokenCategory};
pub use speech::{SpeechDispatcher, SpeechError};
