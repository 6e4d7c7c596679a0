//! Implements a SQLite backed key-value store.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};

use crate::{Error, stores::KeyValueStore};

/// Stores values in a single table of a SQLite database.
#[derive(Debug)]
pub struct SQLiteKeyValueStore {
    connection: Connection,
}

impl SQLiteKeyValueStore {
    /// Create a new store for the SQLite `connection`.
    ///
    /// This function will create the key-value table if it does not exist.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if the table could not be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        Self::create_table(&connection)?;

        Ok(Self { connection })
    }

    /// Open (or create) the database file at `path`.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if the database could not
    /// be opened or the table could not be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        tracing::debug!("Opening key-value store at {path:?}");

        Self::new(Connection::open(path)?)
    }

    /// Create a store backed by a temporary in-memory database.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if the database could not be created.
    pub fn open_in_memory() -> Result<Self, Error> {
        Self::new(Connection::open_in_memory()?)
    }

    /// Create the key-value table in the database.
    ///
    /// # Errors
    /// Returns an error if the table cannot be created or if there is an SQL error.
    pub fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS key_value (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            (),
        )?;

        Ok(())
    }
}

impl KeyValueStore for SQLiteKeyValueStore {
    /// Retrieve the value stored under `key`.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL error.
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        self.connection
            .prepare("SELECT value FROM key_value WHERE key = ?1")?
            .query_row([key], |row| row.get(0))
            .optional()
            .map_err(|error| error.into())
    }

    /// Insert or replace the value stored under `key`.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL error.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.connection.execute(
            "INSERT INTO key_value (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (key, value),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod key_value_tests {
    use rusqlite::Connection;

    use crate::stores::{KeyValueStore, SQLiteKeyValueStore};

    fn get_test_store() -> SQLiteKeyValueStore {
        SQLiteKeyValueStore::open_in_memory().unwrap()
    }

    #[test]
    fn get_missing_key_returns_none() {
        let store = get_test_store();

        assert_eq!(store.get("finance_tracker_transactions"), Ok(None));
    }

    #[test]
    fn set_then_get_returns_value() {
        let mut store = get_test_store();

        store.set("finance_tracker_allowance", "1500").unwrap();

        assert_eq!(
            store.get("finance_tracker_allowance"),
            Ok(Some("1500".to_owned()))
        );
    }

    #[test]
    fn set_overwrites_existing_value() {
        let mut store = get_test_store();

        store.set("key", "[]").unwrap();
        store.set("key", "[1]").unwrap();

        assert_eq!(store.get("key"), Ok(Some("[1]".to_owned())));
    }

    #[test]
    fn keys_are_independent() {
        let mut store = get_test_store();

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        assert_eq!(store.get("a"), Ok(Some("1".to_owned())));
        assert_eq!(store.get("b"), Ok(Some("2".to_owned())));
    }

    #[test]
    fn new_keeps_existing_table() {
        let connection = Connection::open_in_memory().unwrap();
        SQLiteKeyValueStore::create_table(&connection).unwrap();
        connection
            .execute(
                "INSERT INTO key_value (key, value) VALUES ('kept', 'yes')",
                (),
            )
            .unwrap();

        let store = SQLiteKeyValueStore::new(connection).unwrap();

        assert_eq!(store.get("kept"), Ok(Some("yes".to_owned())));
    }
}
