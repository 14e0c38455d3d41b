use super::*;
use crate::catalog::VocabularyCatalog;

fn vocab(id: u32) -> SentenceToken {
    let catalog = VocabularyCatalog::builtin();
    SentenceToken::Vocabulary(catalog.get(id).unwrap().clone())
}

fn free_text(text: &str) -> SentenceToken {
    SentenceToken::FreeText {
        text: text.to_string(),
    }
}

#[test]
fn test_append_preserves_order_and_repeats() {
    let mut buffer = SentenceBuffer::new();
    buffer.append(vocab(101)); // I
    buffer.append(vocab(201)); // Want
    buffer.append(vocab(201)); // Want again - repeats are meaningful
    assert_eq!(buffer.len(), 3);
    assert_eq!(
        buffer.words(Locale::En),
        vec!["I".to_string(), "Want".to_string(), "Want".to_string()]
    );
}

#[test]
fn test_remove_last_is_noop_when_empty() {
    let mut buffer = SentenceBuffer::new();
    buffer.remove_last();
    assert!(buffer.is_empty());

    buffer.append(vocab(101));
    buffer.append(vocab(208));
    buffer.remove_last();
    assert_eq!(buffer.words(Locale::En), vec!["I".to_string()]);
}

#[test]
fn test_clear_empties_unconditionally() {
    let mut buffer = SentenceBuffer::new();
    buffer.clear();
    assert!(buffer.is_empty());

    buffer.append(free_text("hello"));
    buffer.clear();
    assert!(buffer.is_empty());
}

#[test]
fn test_snapshot_is_isolated_from_later_edits() {
    let mut buffer = SentenceBuffer::new();
    buffer.append(vocab(101));
    let snapshot = buffer.snapshot();

    buffer.append(vocab(208));
    buffer.clear();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].resolve_text(Locale::En), "I");
}

#[test]
fn test_vocabulary_token_resolves_per_locale() {
    let token = vocab(405); // Home / 家
    assert_eq!(token.resolve_text(Locale::En), "Home");
    assert_eq!(token.resolve_text(Locale::Zh), "家");
    assert_eq!(token.category(), TokenCategory::Object);
}

#[test]
fn test_free_text_token_ignores_locale_and_is_manual() {
    let token = free_text("banana split");
    assert_eq!(token.resolve_text(Locale::En), "banana split");
    assert_eq!(token.resolve_text(Locale::Zh), "banana split");
    assert_eq!(token.category(), TokenCategory::Manual);
}
