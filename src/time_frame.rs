//! Time frames for filtering the transaction list.
//!
//! Every window is open ended: it starts at a boundary computed from "now" and
//! includes everything after it, future dates included.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime};

use crate::{timezone::LocalNow, transaction::Transaction};

/// The window of time the user has chosen to view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeFrame {
    /// Every transaction.
    All,
    /// Transactions since midnight.
    Today,
    /// Transactions since midnight on the most recent Sunday.
    Week,
    /// Transactions since midnight on the first of the month.
    #[default]
    Month,
}

impl TimeFrame {
    /// Every time frame, in the order they are offered to the user.
    pub const ALL: [TimeFrame; 4] = [
        TimeFrame::Today,
        TimeFrame::Week,
        TimeFrame::Month,
        TimeFrame::All,
    ];

    /// Parse a time frame tag.
    ///
    /// The set of tags is open: anything that is not recognised falls back to
    /// [TimeFrame::All].
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "today" | "day" => Self::Today,
            "week" => Self::Week,
            "month" => Self::Month,
            _ => Self::All,
        }
    }

    /// The tag used to select this time frame.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// A human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Time",
            Self::Today => "Today",
            Self::Week => "This Week",
            Self::Month => "This Month",
        }
    }

    /// The earliest instant included in this time frame, or `None` for [TimeFrame::All].
    ///
    /// Boundaries are local midnights, see [LocalNow::midnight].
    pub fn start(self, now: impl Into<LocalNow>) -> Option<OffsetDateTime> {
        let now = now.into();
        let today = now.today();

        let start_date = match self {
            Self::All => return None,
            Self::Today => today,
            Self::Week => start_of_week(today),
            Self::Month => start_of_month(today),
        };

        Some(now.midnight(start_date))
    }
}

impl FromStr for TimeFrame {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TimeFrame::parse(s))
    }
}

impl Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Select the transactions in `transactions` that fall within `time_frame`.
///
/// The relative order of `transactions` is preserved.
pub fn filter_by_time_frame(
    transactions: &[Transaction],
    time_frame: TimeFrame,
    now: impl Into<LocalNow>,
) -> Vec<Transaction> {
    match time_frame.start(now) {
        Some(start) => transactions
            .iter()
            .filter(|transaction| transaction.date >= start)
            .cloned()
            .collect(),
        None => transactions.to_vec(),
    }
}

/// The first day of the month that `date` falls in.
fn start_of_month(date: Date) -> Date {
    date - Duration::days(i64::from(date.day()) - 1)
}

/// The Sunday on or before `date`.
fn start_of_week(date: Date) -> Date {
    date - Duration::days(i64::from(date.weekday().number_days_from_sunday()))
}
