//! Allowance is a personal finance tracker for keeping spending within a
//! monthly allowance.
//!
//! This library records spending transactions, persists them to a key-value
//! store, and summarises them over a time frame: totals per category, the
//! last seven days of spending, and progress against the monthly allowance.
//!
//! ```
//! use allowance_rs::{
//!     Category, Dashboard, MemoryKeyValueStore, TimeFrame, TransactionForm, TransactionStore,
//! };
//! use time::macros::datetime;
//!
//! let now = datetime!(2025-01-15 12:00 UTC);
//! let mut store = TransactionStore::load(MemoryKeyValueStore::new());
//!
//! let form = TransactionForm {
//!     name: "Lunch".to_owned(),
//!     amount: "12.50".to_owned(),
//!     category: "food".to_owned(),
//! };
//! form.submit(&mut store, now).unwrap();
//!
//! let dashboard = Dashboard::new(
//!     store.transactions(),
//!     store.monthly_allowance(),
//!     TimeFrame::Today,
//!     now,
//! );
//! assert_eq!(dashboard.period.total, 12.5);
//! assert_eq!(dashboard.period.top_category, Some(Category::Food));
//! ```

#![warn(missing_docs)]

mod aggregation;
mod allowance;
mod category;
mod config;
mod dashboard;
mod error;
mod format;
mod logging;
mod time_frame;
mod timezone;
mod transaction;

pub mod stores;

pub use aggregation::{
    CategoryTotals, DAILY_SPENDING_DAYS, DailyTotal, NOT_AVAILABLE_LABEL, PeriodSummary,
    average_spend, daily_spending, group_by_category, top_category, total_spend,
};
pub use allowance::{AllowanceSummary, BudgetStatus, DEFAULT_MONTHLY_ALLOWANCE};
pub use category::Category;
pub use config::Config;
pub use dashboard::{
    Dashboard, RECENT_TRANSACTION_COUNT, recent_transactions, transactions_newest_first,
};
pub use error::Error;
pub use format::{
    format_currency, format_date, format_day_label, render_dashboard, render_transactions,
};
pub use logging::setup_logging;
pub use stores::{
    KeyValueStore, MemoryKeyValueStore, SQLiteKeyValueStore, StoreEvent, SubscriptionId,
    TransactionStore,
};
pub use time_frame::{TimeFrame, filter_by_time_frame};
pub use timezone::{LocalNow, get_timezone, now_in_timezone};
pub use transaction::{
    Transaction, TransactionBuilder, TransactionForm, TransactionId, TransactionName,
    parse_allowance,
};
