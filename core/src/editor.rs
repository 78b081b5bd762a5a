use crate::store::{KeyValueStore, StoreError};

/// Leading character that marks display text as a placeholder prompt.
pub const PLACEHOLDER_PREFIX: char = '[';

pub fn is_placeholder(text: &str) -> bool {
    text.starts_with(PLACEHOLDER_PREFIX)
}

/// Text stored for a field, ignoring empty values.
pub fn saved_text(store: &dyn KeyValueStore, field: &str) -> Option<String> {
    store.get(field).filter(|value| !value.is_empty())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Saved {
        text: String,
        store_error: Option<StoreError>,
    },
    Reverted {
        text: String,
    },
}

impl EditOutcome {
    pub fn text(&self) -> &str {
        match self {
            EditOutcome::Saved { text, .. } | EditOutcome::Reverted { text } => text,
        }
    }
}

/// One in-progress edit of a region. Committing consumes the session, so a
/// region commits at most once per click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    field: String,
    original: String,
}

impl EditSession {
    pub fn begin(field: impl Into<String>, current_text: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            original: current_text.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn initial_input(&self) -> &str {
        if is_placeholder(&self.original) {
            ""
        } else {
            &self.original
        }
    }

    pub fn commit(self, input: &str, store: &dyn KeyValueStore) -> EditOutcome {
        let value = input.trim();
        if value.is_empty() {
            return EditOutcome::Reverted {
                text: self.original,
            };
        }
        let store_error = store.set(&self.field, value).err();
        EditOutcome::Saved {
            text: value.to_string(),
            store_error,
        }
    }
}
