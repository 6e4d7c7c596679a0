//! Defines the core data model for transactions.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, category::Category};

/// Identifies a transaction within the transaction list.
///
/// IDs are derived from the creation timestamp in milliseconds since the Unix
/// epoch, see [crate::TransactionStore::next_id].
pub type TransactionId = i64;

// ============================================================================
// MODELS
// ============================================================================

/// A validated, non-empty transaction name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransactionName(String);

impl TransactionName {
    /// Create a transaction name.
    ///
    /// Leading and trailing whitespace is removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyTransactionName] if `name` is empty or only
    /// contains whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyTransactionName)
        } else {
            Ok(Self(name.to_owned()))
        }
    }

    /// Create a transaction name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty
    /// invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for TransactionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for TransactionName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionName::new(s)
    }
}

impl TryFrom<String> for TransactionName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TransactionName::new(&value)
    }
}

impl From<TransactionName> for String {
    fn from(value: TransactionName) -> Self {
        value.0
    }
}

impl Display for TransactionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An expense, i.e. an event where money was spent.
///
/// Transactions are never edited after they are created. To create a new `Transaction`, use
/// [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// What the money was spent on, e.g. "Groceries".
    pub name: TransactionName,
    /// The amount of money spent in this transaction.
    pub amount: f64,
    /// The category the transaction belongs to.
    pub category: Category,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(name: TransactionName, amount: f64) -> TransactionBuilder {
        TransactionBuilder {
            name,
            amount,
            category: Category::default(),
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The ID and date are assigned when the builder is finalized, since both are
/// derived from the time of creation.
///
/// # Examples
///
/// ```
/// use time::macros::datetime;
///
/// use allowance_rs::{Category, Transaction, TransactionName};
///
/// let transaction = Transaction::build(TransactionName::new("Movie tickets").unwrap(), 32.5)
///     .category(Category::Entertainment)
///     .finalize(1, datetime!(2025-01-15 19:30 UTC));
///
/// assert_eq!(transaction.category, Category::Entertainment);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// What the money was spent on.
    pub name: TransactionName,

    /// The monetary amount of the transaction.
    ///
    /// The builder does not check the sign of the amount. User input should go
    /// through [crate::TransactionForm], which only accepts amounts greater than
    /// zero.
    pub amount: f64,

    /// The category of the transaction. Defaults to [Category::Food].
    pub category: Category,
}

impl TransactionBuilder {
    /// Set the category for the transaction.
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Create the transaction with its `id` and creation `date`.
    pub fn finalize(self, id: TransactionId, date: OffsetDateTime) -> Transaction {
        Transaction {
            id,
            name: self.name,
            amount: self.amount,
            category: self.category,
            date,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
