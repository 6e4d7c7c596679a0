//! Contains the SQLite backed implementations of the stores.

pub mod key_value;

pub use key_value::SQLiteKeyValueStore;
