use super::*;
use crate::expansion::FixedChooser;
use std::sync::Mutex as StdMutex;

/// Mock dispatcher that records every utterance, optionally failing
#[derive(Default)]
struct MockSpeech {
    utterances: StdMutex<Vec<(String, Locale)>>,
    fail: bool,
}

impl MockSpeech {
    fn spoken(&self) -> Vec<(String, Locale)> {
        self.utterances.lock().unwrap().clone()
    }
}

impl SpeechDispatcher for MockSpeech {
    fn speak(&self, text: &str, locale: Locale) -> Result<(), crate::speech::SpeechError> {
        self.utterances
            .lock()
            .unwrap()
            .push((text.to_string(), locale));
        if self.fail {
            Err(crate::speech::SpeechError("voice not found".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Mock emitter that records all emitted events for testing
#[derive(Default)]
struct MockEmitter {
    sentence_changed: StdMutex<Vec<SentenceChangedPayload>>,
    locale_changed: StdMutex<Vec<LocaleChangedPayload>>,
    expanded: StdMutex<Vec<SentenceExpandedPayload>>,
    emergencies: StdMutex<Vec<EmergencyTriggeredPayload>>,
}

impl BoardEventEmitter for MockEmitter {
    fn emit_sentence_changed(&self, payload: SentenceChangedPayload) {
        self.sentence_changed.lock().unwrap().push(payload);
    }

    fn emit_locale_changed(&self, payload: LocaleChangedPayload) {
        self.locale_changed.lock().unwrap().push(payload);
    }

    fn emit_sentence_expanded(&self, payload: SentenceExpandedPayload) {
        self.expanded.lock().unwrap().push(payload);
    }

    fn emit_emergency_triggered(&self, payload: EmergencyTriggeredPayload) {
        self.emergencies.lock().unwrap().push(payload);
    }
}

fn make_session() -> (
    BoardSession<MockSpeech, MockEmitter, FixedChooser>,
    Arc<MockSpeech>,
    Arc<MockEmitter>,
) {
    let speech = Arc::new(MockSpeech::default());
    let emitter = Arc::new(MockEmitter::default());
    let session = BoardSession::with_parts(
        Arc::new(VocabularyCatalog::builtin()),
        Locale::En,
        ExpansionEngine::with_chooser(FixedChooser(0)),
        Arc::clone(&speech),
        Arc::clone(&emitter),
    );
    (session, speech, emitter)
}

#[test]
fn test_selecting_a_token_speaks_it_immediately() {
    let (session, speech, emitter) = make_session();
    session.select_vocabulary(101).unwrap(); // I
    session.select_vocabulary(208).unwrap(); // Sleep

    assert_eq!(
        speech.spoken(),
        vec![
            ("I".to_string(), Locale::En),
            ("Sleep".to_string(), Locale::En)
        ]
    );
    let events = emitter.sentence_changed.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].words, vec!["I", "Sleep"]);
    assert_eq!(events[1].token_count, 2);
}

#[test]
fn test_unknown_vocabulary_id_is_rejected() {
    let (session, speech, _) = make_session();
    assert_eq!(
        session.select_vocabulary(999).unwrap_err(),
        BoardError::UnknownVocabulary(999)
    );
    assert!(speech.spoken().is_empty());
    assert!(session.snapshot().is_empty());
}

#[test]
fn test_free_text_speaks_the_typed_text() {
    let (session, speech, _) = make_session();
    session.type_free_text("banana split");
    assert_eq!(
        speech.spoken(),
        vec![("banana split".to_string(), Locale::En)]
    );
}

#[test]
fn test_backspace_and_clear_mutate_and_notify() {
    let (session, _, emitter) = make_session();
    session.select_vocabulary(101).unwrap();
    session.select_vocabulary(208).unwrap();

    session.backspace();
    assert_eq!(session.snapshot().len(), 1);

    session.clear();
    assert!(session.snapshot().is_empty());

    // backspace on empty is a no-op but still notifies
    session.backspace();
    let events = emitter.sentence_changed.lock().unwrap();
    assert_eq!(events.len(), 5);
    assert!(events.last().unwrap().words.is_empty());
}

#[test]
fn test_locale_switch_clears_the_sentence() {
    let (session, _, emitter) = make_session();
    session.select_vocabulary(101).unwrap();

    session.set_locale(Locale::Zh);
    assert_eq!(session.locale(), Locale::Zh);
    assert!(session.snapshot().is_empty());

    let events = emitter.locale_changed.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].locale, Locale::Zh);
}

#[test]
fn test_expand_guards_the_empty_sentence() {
    let (session, speech, _) = make_session();
    assert_eq!(
        session.expand().unwrap_err(),
        BoardError::InvalidExpansionRequest
    );
    assert_eq!(
        session.speak_sentence().unwrap_err(),
        BoardError::InvalidExpansionRequest
    );
    assert!(speech.spoken().is_empty());
}

#[test]
fn test_expand_speaks_and_reports_the_expansion() {
    let (session, speech, emitter) = make_session();
    session.select_vocabulary(101).unwrap(); // I
    session.select_vocabulary(201).unwrap(); // Want
    session.select_vocabulary(208).unwrap(); // Sleep

    let expanded = session.expand().unwrap();
    assert_eq!(expanded, "I want to sleep.");
    assert_eq!(
        speech.spoken().last().unwrap(),
        &("I want to sleep.".to_string(), Locale::En)
    );

    let events = emitter.expanded.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].expanded_text, "I want to sleep.");
    assert_eq!(events[0].words, vec!["I", "Want", "Sleep"]);
}

#[test]
fn test_expansion_follows_the_active_locale() {
    let (session, _, _) = make_session();
    session.set_locale(Locale::Zh);
    session.select_vocabulary(101).unwrap(); // 我
    session.select_vocabulary(405).unwrap(); // 家

    assert_eq!(session.expand().unwrap(), "我想回家了。");
}

#[test]
fn test_speak_sentence_joins_the_plain_words() {
    let (session, speech, _) = make_session();
    session.select_vocabulary(101).unwrap();
    session.select_vocabulary(208).unwrap();

    let text = session.speak_sentence().unwrap();
    assert_eq!(text, "I Sleep");
    assert_eq!(
        speech.spoken().last().unwrap(),
        &("I Sleep".to_string(), Locale::En)
    );
}

#[test]
fn test_emergency_speaks_the_locale_phrase() {
    let (session, speech, emitter) = make_session();
    session.trigger_emergency();
    assert_eq!(
        speech.spoken().last().unwrap().0,
        "Emergency! I need help immediately!"
    );

    session.set_locale(Locale::Zh);
    session.trigger_emergency();
    assert_eq!(speech.spoken().last().unwrap().0, "紧急情况！请帮帮我！");

    let events = emitter.emergencies.lock().unwrap();
    assert_eq!(events.len(), 2);
}

#[test]
fn test_speech_failures_are_swallowed() {
    let speech = Arc::new(MockSpeech {
        fail: true,
        ..Default::default()
    });
    let emitter = Arc::new(MockEmitter::default());
    let session = BoardSession::with_parts(
        Arc::new(VocabularyCatalog::builtin()),
        Locale::En,
        ExpansionEngine::with_chooser(FixedChooser(0)),
        Arc::clone(&speech),
        emitter,
    );

    // None of these should panic or surface the dispatcher error
    session.select_vocabulary(101).unwrap();
    session.expand().unwrap();
    session.trigger_emergency();
    assert_eq!(speech.spoken().len(), 3);
}

#[test]
fn test_snapshot_is_stable_against_later_edits() {
    let (session, _, _) = make_session();
    session.select_vocabulary(101).unwrap();
    let snapshot = session.snapshot();

    session.clear();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].resolve_text(Locale::En), "I");
}
