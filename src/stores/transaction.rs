//! Defines the store that owns the transaction list and monthly allowance.

use std::fmt::Debug;

use time::OffsetDateTime;

use crate::{
    aggregation::{CategoryTotals, group_by_category, total_spend},
    stores::{
        KeyValueStore,
        persistence::{load_allowance, load_transactions, save_allowance, save_transactions},
    },
    time_frame::{TimeFrame, filter_by_time_frame},
    timezone::LocalNow,
    transaction::{Transaction, TransactionId},
};

/// A change that was made to a [TransactionStore].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A transaction was appended to the list.
    Added(TransactionId),
    /// A transaction was removed from the list.
    Deleted(TransactionId),
    /// Every transaction was removed.
    Cleared,
    /// The monthly allowance was replaced with the given amount.
    AllowanceChanged(f64),
}

/// Identifies an observer registered with [TransactionStore::subscribe].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Observer = Box<dyn FnMut(&StoreEvent)>;

/// The single owner of the transaction list and the monthly allowance.
///
/// Every mutation is persisted to the key-value store immediately and then
/// announced to subscribed observers.
///
/// The store does not validate its inputs. User input should be checked with
/// [crate::TransactionForm] and [crate::parse_allowance] first.
pub struct TransactionStore<S: KeyValueStore> {
    storage: S,
    transactions: Vec<Transaction>,
    monthly_allowance: f64,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription_id: usize,
}

impl<S: KeyValueStore> TransactionStore<S> {
    /// Load the transaction list and monthly allowance from `storage`.
    ///
    /// Missing or unreadable values fall back to an empty list and the default
    /// allowance.
    pub fn load(storage: S) -> Self {
        let transactions = load_transactions(&storage);
        let monthly_allowance = load_allowance(&storage);

        tracing::debug!(
            "Loaded {} transactions with a monthly allowance of {monthly_allowance}",
            transactions.len()
        );

        Self {
            storage,
            transactions,
            monthly_allowance,
            observers: Vec::new(),
            next_subscription_id: 0,
        }
    }

    /// The transactions in the order they were added.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The budget for each calendar month.
    pub fn monthly_allowance(&self) -> f64 {
        self.monthly_allowance
    }

    /// The backend the store persists to.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Choose an ID for a transaction created at `now`.
    ///
    /// IDs are the creation time in milliseconds since the Unix epoch. If that
    /// would collide with or precede an existing ID, one more than the largest
    /// existing ID is used instead, or the first unused ID from the timestamp
    /// onwards if the largest ID is `i64::MAX`.
    pub fn next_id(&self, now: OffsetDateTime) -> TransactionId {
        let timestamp_id = (now.unix_timestamp_nanos() / 1_000_000) as TransactionId;

        match self.transactions.iter().map(|transaction| transaction.id).max() {
            Some(max_id) if max_id >= timestamp_id => max_id
                .checked_add(1)
                .unwrap_or_else(|| self.first_unused_id_from(timestamp_id)),
            _ => timestamp_id,
        }
    }

    fn first_unused_id_from(&self, start: TransactionId) -> TransactionId {
        (start..=TransactionId::MAX)
            .chain((TransactionId::MIN..start).rev())
            .find(|id| !self.transactions.iter().any(|transaction| transaction.id == *id))
            .unwrap_or(start)
    }

    /// Append `transaction` to the list and persist the list.
    pub fn add(&mut self, transaction: Transaction) {
        let id = transaction.id;
        tracing::info!("Adding transaction {id}: {}", transaction.name);

        self.transactions.push(transaction);
        save_transactions(&mut self.storage, &self.transactions);
        self.notify(StoreEvent::Added(id));
    }

    /// Remove the transaction with `id` and persist the list.
    ///
    /// Deleting an ID that is not in the list leaves the list unchanged and is
    /// not an error. Returns whether a transaction was removed.
    pub fn delete(&mut self, id: TransactionId) -> bool {
        let count_before = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id != id);
        let deleted = self.transactions.len() != count_before;

        save_transactions(&mut self.storage, &self.transactions);

        if deleted {
            tracing::info!("Deleted transaction {id}");
            self.notify(StoreEvent::Deleted(id));
        } else {
            tracing::debug!("Tried to delete transaction {id}, which does not exist");
        }

        deleted
    }

    /// Remove every transaction and persist the empty list.
    pub fn clear_all(&mut self) {
        tracing::info!("Clearing {} transactions", self.transactions.len());

        self.transactions.clear();
        save_transactions(&mut self.storage, &self.transactions);
        self.notify(StoreEvent::Cleared);
    }

    /// Replace the monthly allowance and persist it.
    pub fn set_allowance(&mut self, amount: f64) {
        tracing::info!("Setting monthly allowance to {amount}");

        self.monthly_allowance = amount;
        save_allowance(&mut self.storage, amount);
        self.notify(StoreEvent::AllowanceChanged(amount));
    }

    /// The total spent within `time_frame`.
    pub fn calculate_spending(&self, time_frame: TimeFrame, now: impl Into<LocalNow>) -> f64 {
        total_spend(&filter_by_time_frame(&self.transactions, time_frame, now))
    }

    /// The total spent per category within `time_frame`.
    pub fn spending_by_category(
        &self,
        time_frame: TimeFrame,
        now: impl Into<LocalNow>,
    ) -> CategoryTotals {
        group_by_category(&filter_by_time_frame(&self.transactions, time_frame, now))
    }

    /// Register `observer` to be called after every mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.observers.push((id, Box::new(observer)));

        id
    }

    /// Stop calling the observer registered as `id`.
    ///
    /// Returns whether an observer was removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let count_before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);

        self.observers.len() != count_before
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }
}

impl<S: KeyValueStore + Debug> Debug for TransactionStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionStore")
            .field("storage", &self.storage)
            .field("transactions", &self.transactions)
            .field("monthly_allowance", &self.monthly_allowance)
            .field("observers", &self.observers.len())
            .finish()
    }
}
