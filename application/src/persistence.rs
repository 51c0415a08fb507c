//! Best-effort mirroring of picker state into a key-value store.
//!
//! In-memory state is authoritative. Every store failure is logged and
//! swallowed so the picker keeps working without persistence.

use crate::ports::key_value_store::KeyValueStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Key holding the pool as a JSON array of strings
pub const NAMES_KEY: &str = "namepicker:names";

/// Key holding the question as plain text
pub const QUESTION_KEY: &str = "pickaroo:question";

/// Reads and writes the pool and question through a [`KeyValueStore`]
#[derive(Clone)]
pub struct PickerStorage {
    store: Arc<dyn KeyValueStore>,
}

impl PickerStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the stored pool, if any.
    ///
    /// A value that is not a JSON array of strings is ignored.
    pub fn load_names(&self) -> Option<Vec<String>> {
        let raw = match self.store.get(NAMES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not load names: {}", e);
                return None;
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(names) => {
                debug!("Loaded {} stored names", names.len());
                Some(names)
            }
            Err(e) => {
                warn!("Ignoring stored names that are not a list of strings: {}", e);
                None
            }
        }
    }

    /// Mirror the pool: store it when `persist` is on, otherwise drop it
    pub fn sync_names(&self, names: &[String], persist: bool) {
        let result = if persist {
            match serde_json::to_string(names) {
                Ok(json) => self.store.set(NAMES_KEY, &json),
                Err(e) => {
                    warn!("Could not encode names: {}", e);
                    return;
                }
            }
        } else {
            self.store.remove(NAMES_KEY)
        };
        if let Err(e) = result {
            warn!("Could not save names: {}", e);
        }
    }

    /// Load the stored question, if any
    pub fn load_question(&self) -> Option<String> {
        match self.store.get(QUESTION_KEY) {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not load question: {}", e);
                None
            }
        }
    }

    /// Mirror the question: store it when `persist` is on and text is set,
    /// otherwise drop it
    pub fn sync_question(&self, text: Option<&str>, persist: bool) {
        let result = match text {
            Some(text) if persist => self.store.set(QUESTION_KEY, text),
            _ => self.store.remove(QUESTION_KEY),
        };
        if let Err(e) = result {
            warn!("Could not save question: {}", e);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::ports::key_value_store::{KeyValueStore, StoreError};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory store that can be switched into a failing mode
    #[derive(Default)]
    pub struct MockStore {
        values: Mutex<HashMap<String, String>>,
        failing: Mutex<bool>,
    }

    impl MockStore {
        pub fn with_value(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            store
        }

        pub fn set_failing(&self, failing: bool) {
            *self.failing.lock().unwrap() = failing;
        }

        pub fn value(&self, key: &str) -> Option<String> {
            self.values.lock().unwrap().get(key).cloned()
        }

        fn check(&self) -> Result<(), StoreError> {
            if *self.failing.lock().unwrap() {
                Err(StoreError::Unavailable("quota exceeded".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl KeyValueStore for MockStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.check()?;
            Ok(self.value(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.check()?;
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.check()?;
            self.values.lock().unwrap().remove(key);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::MockStore;
    use super::*;

    #[test]
    fn test_names_round_trip() {
        let store = Arc::new(MockStore::default());
        let storage = PickerStorage::new(store.clone());
        let names = vec!["Alice".to_string(), "Bob".to_string()];

        storage.sync_names(&names, true);
        assert_eq!(store.value(NAMES_KEY).as_deref(), Some(r#"["Alice","Bob"]"#));
        assert_eq!(storage.load_names(), Some(names));
    }

    #[test]
    fn test_sync_names_without_persist_removes() {
        let store = Arc::new(MockStore::with_value(NAMES_KEY, r#"["Alice"]"#));
        let storage = PickerStorage::new(store.clone());

        storage.sync_names(&["Bob".to_string()], false);
        assert_eq!(store.value(NAMES_KEY), None);
    }

    #[test]
    fn test_corrupt_names_are_ignored() {
        let store = Arc::new(MockStore::with_value(NAMES_KEY, r#"{"not":"a list"}"#));
        let storage = PickerStorage::new(store);
        assert_eq!(storage.load_names(), None);
    }

    #[test]
    fn test_store_failures_are_swallowed() {
        let store = Arc::new(MockStore::default());
        store.set_failing(true);
        let storage = PickerStorage::new(store);

        storage.sync_names(&["Alice".to_string()], true);
        storage.sync_question(Some("Who?"), true);
        assert_eq!(storage.load_names(), None);
        assert_eq!(storage.load_question(), None);
    }

    #[test]
    fn test_question_sync() {
        let store = Arc::new(MockStore::default());
        let storage = PickerStorage::new(store.clone());

        storage.sync_question(Some("Who presents?"), true);
        assert_eq!(storage.load_question().as_deref(), Some("Who presents?"));

        storage.sync_question(Some("Who presents?"), false);
        assert_eq!(storage.load_question(), None);

        storage.sync_question(Some("Again"), true);
        storage.sync_question(None, true);
        assert_eq!(store.value(QUESTION_KEY), None);
    }
}
