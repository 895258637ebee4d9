//! Browser storage backend for the core storage trait.
//!
//! The `Storage` handle is looked up on every call, so a value of this type
//! is just a choice of area and is cheap to copy into reactive closures.

use sous_core::{KeyValueStorage, StorageError};
use web_sys::Storage;

use super::dom;

/// Which browser storage area to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebStorage {
    /// `localStorage`: survives restarts, shared across tabs.
    Local,
    /// `sessionStorage`: scoped to one tab.
    Session,
}

impl WebStorage {
    fn handle(&self) -> Result<Storage, StorageError> {
        match self {
            Self::Local => dom::local_storage(),
            Self::Session => dom::session_storage(),
        }
        .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.handle()?
            .get_item(key)
            .map_err(|_| StorageError::ReadFailed(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.handle()?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.handle()?
            .remove_item(key)
            .map_err(|_| StorageError::RemoveFailed(key.to_string()))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use sous_core::{Recipe, SavedRecipes, SessionManager};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let storage = WebStorage::Local;
        storage.set("sous.test", "value").unwrap();
        assert_eq!(storage.get("sous.test").unwrap().as_deref(), Some("value"));
        storage.remove("sous.test").unwrap();
        assert_eq!(storage.get("sous.test").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_session_id_persists_in_session_storage() {
        let first = SessionManager::new(WebStorage::Session).session_id();
        let second = SessionManager::new(WebStorage::Session).session_id();
        assert_eq!(first, second);
    }

    #[wasm_bindgen_test]
    fn test_saved_recipes_in_local_storage() {
        let store = SavedRecipes::with_key(WebStorage::Local, "sous.test_saved");
        let recipe = Recipe::new("Toast", vec![], vec!["Toast bread".to_string()]);

        store.save(&recipe).unwrap();
        assert!(store.is_saved("Toast").unwrap());
        store.remove("Toast").unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
