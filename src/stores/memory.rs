//! Implements an in-memory key-value store.

use std::collections::HashMap;

use crate::{Error, stores::KeyValueStore};

/// Keeps values in memory. Nothing survives the process.
///
/// Useful for tests and for running without a database file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryKeyValueStore {
    values: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::stores::{KeyValueStore, MemoryKeyValueStore};

    #[test]
    fn get_missing_key_returns_none() {
        let store = MemoryKeyValueStore::new();

        assert_eq!(store.get("missing"), Ok(None));
    }

    #[test]
    fn set_replaces_value() {
        let mut store = MemoryKeyValueStore::new();

        store.set("key", "first").unwrap();
        store.set("key", "second").unwrap();

        assert_eq!(store.get("key"), Ok(Some("second".to_owned())));
    }
}
