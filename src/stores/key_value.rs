//! Defines the key-value store trait that persisted state is written to.

use crate::Error;

/// Stores text values under string keys.
///
/// This is the only interface the application uses to persist data. Calls are
/// synchronous and are expected to be fast, local operations.
pub trait KeyValueStore {
    /// Retrieve the value stored under `key`, or `None` if nothing has been stored.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store `value` under `key`, replacing any existing value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
}
