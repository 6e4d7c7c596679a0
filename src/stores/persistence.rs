//! Reading and writing the persisted transaction list and monthly allowance.
//!
//! Storage failures are never returned to the caller. Reads fall back to a
//! safe default and writes are dropped, with the failure logged in both cases.

use crate::{
    Error, allowance::DEFAULT_MONTHLY_ALLOWANCE, stores::KeyValueStore,
    transaction::Transaction,
};

/// The key the transaction list is stored under.
pub const TRANSACTIONS_KEY: &str = "finance_tracker_transactions";
/// The key the monthly allowance is stored under.
pub const ALLOWANCE_KEY: &str = "finance_tracker_allowance";

/// Load the transaction list from `storage`.
///
/// Returns an empty list if nothing has been stored, or if the stored value
/// cannot be read or parsed.
pub fn load_transactions(storage: &impl KeyValueStore) -> Vec<Transaction> {
    match try_load_transactions(storage) {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::error!("Error retrieving transactions, using an empty list: {error}");
            Vec::new()
        }
    }
}

/// Load the transaction list from `storage`, returning any error.
///
/// # Errors
/// This function will return a:
/// - [Error::JSONSerializationError] if the stored value is not a valid transaction list,
/// - or whatever error the `storage` backend returns.
pub fn try_load_transactions(storage: &impl KeyValueStore) -> Result<Vec<Transaction>, Error> {
    match storage.get(TRANSACTIONS_KEY)? {
        Some(text) => Ok(serde_json::from_str(&text)?),
        None => Ok(Vec::new()),
    }
}

/// Save the full transaction list to `storage`.
///
/// Failures are logged and otherwise ignored.
pub fn save_transactions(storage: &mut impl KeyValueStore, transactions: &[Transaction]) {
    let result = serde_json::to_string(transactions)
        .map_err(Error::from)
        .and_then(|text| storage.set(TRANSACTIONS_KEY, &text));

    match result {
        Ok(()) => tracing::debug!("Saved {} transactions", transactions.len()),
        Err(error) => tracing::error!("Error saving transactions: {error}"),
    }
}

/// Load the monthly allowance from `storage`.
///
/// Returns [DEFAULT_MONTHLY_ALLOWANCE] if nothing has been stored, the stored
/// value cannot be read, or it is not a finite, non-negative number.
pub fn load_allowance(storage: &impl KeyValueStore) -> f64 {
    let text = match storage.get(ALLOWANCE_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => return DEFAULT_MONTHLY_ALLOWANCE,
        Err(error) => {
            tracing::error!("Error retrieving monthly allowance, using the default: {error}");
            return DEFAULT_MONTHLY_ALLOWANCE;
        }
    };

    match text.trim().parse::<f64>() {
        Ok(allowance) if allowance.is_finite() && allowance >= 0.0 => allowance,
        _ => {
            tracing::warn!("Stored monthly allowance \"{text}\" is invalid, using the default");
            DEFAULT_MONTHLY_ALLOWANCE
        }
    }
}

/// Save the monthly allowance to `storage` as a decimal string.
///
/// Failures are logged and otherwise ignored.
pub fn save_allowance(storage: &mut impl KeyValueStore, allowance: f64) {
    match storage.set(ALLOWANCE_KEY, &allowance.to_string()) {
        Ok(()) => tracing::debug!("Saved monthly allowance {allowance}"),
        Err(error) => tracing::error!("Error saving monthly allowance: {error}"),
    }
}
