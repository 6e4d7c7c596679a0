//! The data behind the dashboard view.
//!
//! The period summary and category breakdown follow the selected time frame,
//! while the seven day chart and the allowance progress always describe the
//! real last seven days and the current month.

use crate::{
    aggregation::{CategoryTotals, DailyTotal, PeriodSummary, daily_spending, group_by_category},
    allowance::AllowanceSummary,
    time_frame::{TimeFrame, filter_by_time_frame},
    timezone::LocalNow,
    transaction::Transaction,
};

/// How many transactions the dashboard lists as recent.
pub const RECENT_TRANSACTION_COUNT: usize = 3;

/// Everything needed to draw the dashboard for one time frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// The time frame the period summary and category totals cover.
    pub time_frame: TimeFrame,
    /// Totals for the transactions in the time frame.
    pub period: PeriodSummary,
    /// Spending per category in the time frame.
    pub category_totals: CategoryTotals,
    /// Spending for each of the last seven days, oldest first.
    pub daily_spending: Vec<DailyTotal>,
    /// Spending this month against the monthly allowance.
    pub allowance: AllowanceSummary,
    /// The most recent transactions of any date, newest first.
    pub recent: Vec<Transaction>,
}

impl Dashboard {
    /// Build the dashboard from the full, unfiltered transaction list.
    pub fn new(
        transactions: &[Transaction],
        monthly_allowance: f64,
        time_frame: TimeFrame,
        now: impl Into<LocalNow>,
    ) -> Self {
        let now = now.into();
        let filtered = filter_by_time_frame(transactions, time_frame, now);

        Self {
            time_frame,
            period: PeriodSummary::new(&filtered),
            category_totals: group_by_category(&filtered),
            daily_spending: daily_spending(transactions, now),
            allowance: AllowanceSummary::new(transactions, monthly_allowance, now),
            recent: recent_transactions(transactions, RECENT_TRANSACTION_COUNT),
        }
    }
}

/// The `count` most recent transactions, newest first.
pub fn recent_transactions(transactions: &[Transaction], count: usize) -> Vec<Transaction> {
    let mut recent = transactions.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(count);

    recent
}

/// The transactions in `time_frame`, most recent first.
///
/// Transactions with the same date keep their relative order.
pub fn transactions_newest_first(
    transactions: &[Transaction],
    time_frame: TimeFrame,
    now: impl Into<LocalNow>,
) -> Vec<Transaction> {
    let mut filtered = filter_by_time_frame(transactions, time_frame, now);
    filtered.sort_by(|a, b| b.date.cmp(&a.date));

    filtered
}

#[cfg(test)]
mod tests {
    use time::{OffsetDateTime, macros::datetime};

    use crate::{
        category::Category,
        dashboard::{Dashboard, recent_transactions, transactions_newest_first},
        time_frame::TimeFrame,
        transaction::{Transaction, TransactionName},
    };

    const NOW: OffsetDateTime = datetime!(2025-01-15 14:30 UTC);

    fn create_test_transaction(
        id: i64,
        amount: f64,
        category: Category,
        date: OffsetDateTime,
    ) -> Transaction {
        Transaction::build(TransactionName::new_unchecked("Test"), amount)
            .category(category)
            .finalize(id, date)
    }

    #[test]
    fn empty_list_reports_zero_for_every_time_frame() {
        for time_frame in TimeFrame::ALL {
            let dashboard = Dashboard::new(&[], 1000.0, time_frame, NOW);

            assert_eq!(dashboard.period.total, 0.0);
            assert_eq!(dashboard.period.average, None);
            assert_eq!(dashboard.period.top_category_label(), "N/A");
            assert!(dashboard.category_totals.is_empty());
            assert!(dashboard.daily_spending.iter().all(|day| day.total == 0.0));
            assert_eq!(dashboard.allowance.percent_consumed(), 0.0);
            assert!(dashboard.recent.is_empty());
        }
    }

    #[test]
    fn today_scenario() {
        let transactions = vec![
            create_test_transaction(1, 100.0, Category::Food, NOW),
            create_test_transaction(2, 50.0, Category::Food, NOW),
            create_test_transaction(3, 30.0, Category::Bills, NOW),
        ];

        let dashboard = Dashboard::new(&transactions, 1000.0, TimeFrame::Today, NOW);

        assert_eq!(dashboard.category_totals.get(Category::Food), Some(150.0));
        assert_eq!(dashboard.category_totals.get(Category::Bills), Some(30.0));
        assert_eq!(dashboard.period.top_category, Some(Category::Food));
        assert_eq!(dashboard.period.total, 180.0);
        assert_eq!(dashboard.period.count, 3);
    }

    #[test]
    fn seven_day_chart_and_allowance_ignore_time_frame() {
        let yesterday = datetime!(2025-01-14 12:00 UTC);
        let transactions = vec![
            create_test_transaction(1, 40.0, Category::Food, NOW),
            create_test_transaction(2, 60.0, Category::Shopping, yesterday),
        ];

        let dashboard = Dashboard::new(&transactions, 1000.0, TimeFrame::Today, NOW);

        assert_eq!(dashboard.period.total, 40.0);
        assert_eq!(dashboard.daily_spending[5].total, 60.0);
        assert_eq!(dashboard.daily_spending[6].total, 40.0);
        assert_eq!(dashboard.allowance.monthly_spending, 100.0);
    }

    #[test]
    fn newest_first_sorts_descending_and_filters() {
        let transactions = vec![
            create_test_transaction(1, 1.0, Category::Food, datetime!(2025-01-02 10:00 UTC)),
            create_test_transaction(2, 1.0, Category::Food, datetime!(2025-01-10 10:00 UTC)),
            create_test_transaction(3, 1.0, Category::Food, datetime!(2024-12-30 10:00 UTC)),
            create_test_transaction(4, 1.0, Category::Food, datetime!(2025-01-05 10:00 UTC)),
        ];

        let ids: Vec<_> = transactions_newest_first(&transactions, TimeFrame::Month, NOW)
            .iter()
            .map(|transaction| transaction.id)
            .collect();

        assert_eq!(ids, vec![2, 4, 1]);
    }

    #[test]
    fn recent_lists_three_newest_of_any_date() {
        let transactions = vec![
            create_test_transaction(1, 1.0, Category::Food, datetime!(2024-11-02 10:00 UTC)),
            create_test_transaction(2, 1.0, Category::Food, datetime!(2025-01-10 10:00 UTC)),
            create_test_transaction(3, 1.0, Category::Food, datetime!(2024-12-30 10:00 UTC)),
            create_test_transaction(4, 1.0, Category::Food, datetime!(2023-01-05 10:00 UTC)),
        ];

        let dashboard = Dashboard::new(&transactions, 1000.0, TimeFrame::Today, NOW);

        let ids: Vec<_> = dashboard.recent.iter().map(|transaction| transaction.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn recent_handles_short_lists() {
        let transactions = vec![create_test_transaction(1, 1.0, Category::Food, NOW)];

        assert_eq!(recent_transactions(&transactions, 3), transactions);
        assert!(recent_transactions(&transactions, 0).is_empty());
    }
}
