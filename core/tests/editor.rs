use folio_core::{is_placeholder, saved_text, EditOutcome, EditSession, KeyValueStore, MemoryStore, StoreError};

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write {
            key: key.to_string(),
        })
    }
}

#[test]
fn placeholder_text_starts_with_empty_input() {
    let session = EditSession::begin("bio", "[Add bio]");
    assert!(is_placeholder(session.original()));
    assert_eq!(session.initial_input(), "");
}

#[test]
fn regular_text_prefills_input() {
    let session = EditSession::begin("name", "Graziela Souza");
    assert_eq!(session.initial_input(), "Graziela Souza");
}

#[test]
fn placeholder_edit_commits_and_persists() {
    let store = MemoryStore::new();
    let session = EditSession::begin("bio", "[Add bio]");
    let outcome = session.commit("Engineer", &store);
    assert_eq!(
        outcome,
        EditOutcome::Saved {
            text: "Engineer".to_string(),
            store_error: None,
        }
    );
    assert_eq!(store.get("bio").as_deref(), Some("Engineer"));
}

#[test]
fn committed_value_is_shown_on_next_load() {
    let store = MemoryStore::new();
    EditSession::begin("location", "Recife").commit("  Lisboa  ", &store);
    assert_eq!(saved_text(&store, "location").as_deref(), Some("Lisboa"));
}

#[test]
fn empty_commit_reverts_and_stores_nothing() {
    let store = MemoryStore::new();
    let outcome = EditSession::begin("bio", "Original bio").commit("   ", &store);
    assert_eq!(
        outcome,
        EditOutcome::Reverted {
            text: "Original bio".to_string()
        }
    );
    assert!(store.is_empty());
    assert_eq!(saved_text(&store, "bio"), None);
}

#[test]
fn later_edits_overwrite_earlier_ones() {
    let store = MemoryStore::new();
    EditSession::begin("role", "[Role]").commit("Student", &store);
    EditSession::begin("role", "Student").commit("Developer", &store);
    assert_eq!(store.len(), 1);
    assert_eq!(saved_text(&store, "role").as_deref(), Some("Developer"));
}

#[test]
fn empty_stored_value_is_ignored_on_load() {
    let store = MemoryStore::new();
    store.set("bio", "").expect("memory store accepts writes");
    assert_eq!(saved_text(&store, "bio"), None);
}

#[test]
fn store_failure_still_displays_new_text() {
    let outcome = EditSession::begin("bio", "[Add bio]").commit("Engineer", &ReadOnlyStore);
    assert_eq!(outcome.text(), "Engineer");
    assert!(matches!(
        outcome,
        EditOutcome::Saved {
            store_error: Some(StoreError::Write { .. }),
            ..
        }
    ));
}
