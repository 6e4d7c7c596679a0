//! Transactions and the validation of user input for creating them.
//!
//! This module contains:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - The `TransactionForm` that checks user input before it reaches the store

mod core;
mod form;

pub use core::{Transaction, TransactionBuilder, TransactionId, TransactionName};
pub use form::{TransactionForm, parse_allowance};
