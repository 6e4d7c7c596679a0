//! Validation of user input before it reaches the [TransactionStore].
//!
//! The store accepts whatever it is given, so every front end should route
//! user input through this module.

use time::OffsetDateTime;

use crate::{
    Error,
    category::Category,
    stores::{KeyValueStore, TransactionStore},
    transaction::{Transaction, TransactionBuilder, TransactionName},
};

/// The raw text a user entered to record a transaction.
#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    /// What the money was spent on, e.g. "Groceries".
    pub name: String,
    /// The amount spent as entered, e.g. "12.50".
    pub amount: String,
    /// The category name. An empty string selects the default category.
    pub category: String,
}

impl TransactionForm {
    /// Check the form and convert it into a [TransactionBuilder].
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyTransactionName] if the name is empty or whitespace,
    /// - [Error::InvalidAmount] if the amount is not a finite number greater than zero,
    /// - or [Error::InvalidCategory] if the category is not one of the known categories.
    pub fn validate(&self) -> Result<TransactionBuilder, Error> {
        let name = TransactionName::new(&self.name)?;
        let amount = parse_amount(&self.amount)?;
        let category = if self.category.trim().is_empty() {
            Category::default()
        } else {
            self.category.parse()?
        };

        Ok(Transaction::build(name, amount).category(category))
    }

    /// Validate the form and add the resulting transaction to `store`.
    ///
    /// The transaction is dated `now` and given the next free ID. Nothing is
    /// added if validation fails.
    ///
    /// # Errors
    /// Returns the validation errors described in [TransactionForm::validate].
    pub fn submit<S: KeyValueStore>(
        &self,
        store: &mut TransactionStore<S>,
        now: OffsetDateTime,
    ) -> Result<Transaction, Error> {
        let builder = self.validate().inspect_err(|error| {
            tracing::debug!("Rejected transaction form {self:?}: {error}");
        })?;

        let transaction = builder.finalize(store.next_id(now), now);
        store.add(transaction.clone());

        Ok(transaction)
    }
}

fn parse_amount(text: &str) -> Result<f64, Error> {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(Error::InvalidAmount(text.to_owned())),
    }
}

/// Parse the monthly allowance the user entered.
///
/// # Errors
/// This function will return an [Error::InvalidAllowance] if `text` is not a
/// finite number that is zero or greater.
pub fn parse_allowance(text: &str) -> Result<f64, Error> {
    match text.trim().parse::<f64>() {
        Ok(allowance) if allowance.is_finite() && allowance >= 0.0 => Ok(allowance),
        _ => Err(Error::InvalidAllowance(text.to_owned())),
    }
}
