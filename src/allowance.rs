//! Monthly allowance tracking.
//!
//! The allowance summary is always computed for the calendar month containing
//! "now", regardless of the time frame the user is viewing.

use crate::{
    aggregation::total_spend,
    time_frame::{TimeFrame, filter_by_time_frame},
    timezone::LocalNow,
    transaction::Transaction,
};

/// The monthly allowance used when none has been set.
pub const DEFAULT_MONTHLY_ALLOWANCE: f64 = 1000.0;

/// The fraction of the allowance above which spending is flagged as [BudgetStatus::Warning].
const WARNING_THRESHOLD: f64 = 0.75;

/// How monthly spending compares to the allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// At most 75% of the allowance has been spent.
    OnTrack,
    /// More than 75% of the allowance has been spent.
    Warning,
    /// The whole allowance has been spent.
    Exceeded,
}

/// Spending for the current month measured against the monthly allowance.
#[derive(Debug, Clone, PartialEq)]
pub struct AllowanceSummary {
    /// The budget for the month.
    pub monthly_allowance: f64,
    /// The total spent since the first of the month.
    pub monthly_spending: f64,
    /// The number of days in the current month.
    pub days_in_month: u8,
    /// The day of the month, i.e. the number of days passed including today.
    pub days_passed: u8,
    /// The days left in the month after today.
    pub days_remaining: u8,
    /// The allowance minus monthly spending, negative when overspent.
    pub allowance_remaining: f64,
    /// How much can be spent per remaining day to stay within the allowance.
    pub daily_budget: f64,
}

impl AllowanceSummary {
    /// Compute the allowance summary for the month containing `now`.
    ///
    /// `transactions` should be the full transaction list, not a filtered one.
    pub fn new(
        transactions: &[Transaction],
        monthly_allowance: f64,
        now: impl Into<LocalNow>,
    ) -> Self {
        let now = now.into();
        let this_month = filter_by_time_frame(transactions, TimeFrame::Month, now);
        let monthly_spending = total_spend(&this_month);

        let today = now.today();
        let days_in_month = time::util::days_in_year_month(today.year(), today.month());
        let days_passed = today.day();
        let days_remaining = days_in_month - days_passed;

        let allowance_remaining = monthly_allowance - monthly_spending;
        // On the last day of the month there are no days remaining, so the
        // whole remainder is budgeted for today.
        let daily_budget = allowance_remaining / f64::from(days_remaining.max(1));

        Self {
            monthly_allowance,
            monthly_spending,
            days_in_month,
            days_passed,
            days_remaining,
            allowance_remaining,
            daily_budget,
        }
    }

    /// Monthly spending as a percentage of the allowance, clamped to `[0, 100]`.
    ///
    /// A zero allowance is reported as fully consumed.
    pub fn percent_consumed(&self) -> f64 {
        match self.spending_percentage() {
            Some(percentage) => percentage.clamp(0.0, 100.0),
            None => 100.0,
        }
    }

    /// Monthly spending as a percentage of the allowance, which may exceed 100.
    ///
    /// Returns `None` if the allowance is zero.
    pub fn spending_percentage(&self) -> Option<f64> {
        if self.monthly_allowance > 0.0 {
            Some(self.monthly_spending / self.monthly_allowance * 100.0)
        } else {
            None
        }
    }

    /// The remaining allowance, floored at zero.
    pub fn remaining_for_display(&self) -> f64 {
        self.allowance_remaining.max(0.0)
    }

    /// The daily budget, floored at zero.
    pub fn daily_budget_for_display(&self) -> f64 {
        self.daily_budget.max(0.0)
    }

    /// Whether the allowance has been overspent.
    pub fn is_over_budget(&self) -> bool {
        self.allowance_remaining < 0.0
    }

    /// Classify monthly spending against the allowance.
    pub fn status(&self) -> BudgetStatus {
        if self.monthly_spending >= self.monthly_allowance {
            BudgetStatus::Exceeded
        } else if self.monthly_spending / self.monthly_allowance > WARNING_THRESHOLD {
            BudgetStatus::Warning
        } else {
            BudgetStatus::OnTrack
        }
    }
}
