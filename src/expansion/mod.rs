// Expansion module - turns a terse token sequence into a grammatical
// utterance for the active locale

mod context;
mod engine;
mod rules_en;
mod rules_zh;

pub use context::ExpansionContext;
pub use engine::{ExpansionEngine, FixedChooser, RandomChooser, TemplateChooser};
