//! Contains the key-value stores that application state is persisted to, and
//! the [TransactionStore] that owns that state in memory.

mod key_value;
mod memory;
mod persistence;
mod transaction;

pub mod sqlite;

pub use key_value::KeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use persistence::{
    ALLOWANCE_KEY, TRANSACTIONS_KEY, load_allowance, load_transactions, save_allowance,
    save_transactions, try_load_transactions,
};
pub use sqlite::SQLiteKeyValueStore;
pub use transaction::{StoreEvent, SubscriptionId, TransactionStore};
