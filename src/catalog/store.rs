// Vocabulary catalog - loads and indexes the pictogram vocabulary
// Items are immutable after load; grid display order is declaration order

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::locale::Locale;

/// Semantic grouping of a vocabulary item, used to pick an expansion rule
/// branch. Free-typed text has no category (see `TokenCategory::Manual`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    People,
    Action,
    Food,
    Object,
    Feeling,
}

impl Category {
    /// All categories in the board's sidebar order.
    pub const ALL: [Category; 5] = [
        Category::People,
        Category::Action,
        Category::Food,
        Category::Object,
        Category::Feeling,
    ];
}

/// A single pictogram vocabulary entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    /// Unique identifier, stable across locales
    pub id: u32,
    /// Display text per locale
    pub text: HashMap<Locale, String>,
    /// Semantic category
    pub category: Category,
    /// Emoji shown on the pictogram card
    pub emoji: String,
}

impl VocabularyItem {
    /// Display text for the given locale.
    /// Catalog validation guarantees every known locale is present.
    pub fn label(&self, locale: Locale) -> &str {
        self.text.get(&locale).map(String::as_str).unwrap_or("")
    }
}

/// Error types for catalog operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Two items declare the same id
    #[error("Item with ID {0} declared more than once")]
    DuplicateId(u32),
    /// An item lacks display text for a known locale
    #[error("Item with ID {0} has no {1} text")]
    MissingTranslation(u32, Locale),
    /// Failed to read or parse a catalog file
    #[error("Failed to load catalog: {0}")]
    LoadError(String),
}

/// Immutable vocabulary catalog, indexed by id, iterated in declaration order
#[derive(Debug, Clone)]
pub struct VocabularyCatalog {
    items: Vec<VocabularyItem>,
}

impl VocabularyCatalog {
    /// Build a catalog from a list of items, validating id uniqueness and
    /// translation completeness.
    pub fn new(items: Vec<VocabularyItem>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            for locale in [Locale::En, Locale::Zh] {
                if !item.text.contains_key(&locale) {
                    return Err(CatalogError::MissingTranslation(item.id, locale));
                }
            }
        }
        Ok(Self { items })
    }

    /// The built-in vocabulary shipped with the board.
    pub fn builtin() -> Self {
        // Built-in data is validated by catalog tests; construction cannot fail.
        Self {
            items: super::builtin::items(),
        }
    }

    /// Load a replacement catalog from a JSON array of items.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        crate::debug!("Loading vocabulary catalog from {:?}", path);

        let content =
            fs::read_to_string(path).map_err(|e| CatalogError::LoadError(e.to_string()))?;

        let items: Vec<VocabularyItem> =
            serde_json::from_str(&content).map_err(|e| CatalogError::LoadError(e.to_string()))?;

        let catalog = Self::new(items)?;
        crate::info!("Loaded {} vocabulary items", catalog.len());
        Ok(catalog)
    }

    /// Look up an item by id.
    pub fn get(&self, id: u32) -> Option<&VocabularyItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All items of a category, in declaration order (grid order).
    pub fn by_category(&self, category: Category) -> Vec<&VocabularyItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// All items in declaration order.
    pub fn items(&self) -> &[VocabularyItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
