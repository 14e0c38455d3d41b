// Board module - the host-facing session tying catalog, buffer, engine and
// speech dispatch together

mod session;

pub use session::{emergency_phrase, BoardError, BoardSession};
