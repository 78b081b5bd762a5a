use folio_core::{KeyValueStore, StoreError};
use web_sys::Storage;

/// `window.localStorage` behind the field store interface.
pub(crate) struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    pub(crate) fn local() -> Self {
        let storage =
            web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            gloo::console::warn!("local storage unavailable; edits will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let Some(storage) = self.storage.as_ref() else {
            return Err(StoreError::Unavailable);
        };
        storage.set_item(key, value).map_err(|_| StoreError::Write {
            key: key.to_string(),
        })
    }
}
