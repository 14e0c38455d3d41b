// Sentence module - the ordered token buffer the user builds up before
// playback or expansion

mod buffer;

pub use buffer::{SentenceBuffer, SentenceToken, TokenCategory};
