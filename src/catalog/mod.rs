// Vocabulary catalog module - the static pictogram vocabulary, keyed by
// category and locale

mod builtin;
mod store;

pub use store::{CatalogError, Category, VocabularyCatalog, VocabularyItem};
