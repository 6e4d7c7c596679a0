//! Defines the app level error type.

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty (or whitespace only) string was used to name a transaction.
    #[error("please enter a name for the transaction")]
    EmptyTransactionName,

    /// The amount for a transaction was not a number greater than zero.
    ///
    /// Callers should pass in the text the user entered.
    #[error("please enter a valid amount greater than zero, got \"{0}\"")]
    InvalidAmount(String),

    /// The monthly allowance was not a non-negative number.
    ///
    /// Callers should pass in the text the user entered.
    #[error("the monthly allowance must be a number no less than zero, got \"{0}\"")]
    InvalidAllowance(String),

    /// The category name did not match any of the known categories.
    #[error("\"{0}\" is not a valid category")]
    InvalidCategory(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// An error occurred while serializing or deserializing a value as JSON.
    #[error("could not (de)serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The log file could not be created or opened for appending.
    #[error("could not open the log file: {0}")]
    LogFileError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JSONSerializationError(value.to_string())
    }
}
