//! Transaction data aggregation for summaries and charts.
//!
//! Provides functions to total spending per category and per day, and to
//! summarise the spending in a time frame. None of these functions read the
//! system clock: "now" is always passed in.

use time::{Date, Duration};

use crate::{category::Category, timezone::LocalNow, transaction::Transaction};

/// Shown in place of a top category when there are no transactions.
pub const NOT_AVAILABLE_LABEL: &str = "N/A";

/// Total spending per category.
///
/// Categories are kept in the order they were first encountered and only
/// categories that have at least one transaction are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(Category, f64)>,
}

impl CategoryTotals {
    /// The total for `category`, or `None` if there were no transactions in that category.
    pub fn get(&self, category: Category) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry_category, _)| *entry_category == category)
            .map(|(_, total)| *total)
    }

    /// Iterate over the categories and their totals in first-encountered order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// The number of categories with a total.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no categories with a total.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The sum of all category totals.
    pub fn sum(&self) -> f64 {
        self.entries.iter().fold(0.0, |sum, (_, total)| sum + total)
    }

    /// The category with the largest total.
    ///
    /// Ties go to the category that was encountered first.
    pub fn top(&self) -> Option<Category> {
        let mut top: Option<(Category, f64)> = None;

        for &(category, total) in &self.entries {
            match top {
                Some((_, top_total)) if total <= top_total => {}
                _ => top = Some((category, total)),
            }
        }

        top.map(|(category, _)| category)
    }

    fn add(&mut self, category: Category, amount: f64) {
        match self
            .entries
            .iter_mut()
            .find(|(entry_category, _)| *entry_category == category)
        {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category, amount)),
        }
    }
}

/// Totals transaction amounts by category.
pub fn group_by_category(transactions: &[Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();

    for transaction in transactions {
        totals.add(transaction.category, transaction.amount);
    }

    totals
}

/// The sum of all transaction amounts, zero if there are no transactions.
pub fn total_spend(transactions: &[Transaction]) -> f64 {
    sum_amounts(transactions.iter())
}

// `Sum for f64` starts from -0.0, which would be displayed as "-0".
fn sum_amounts<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> f64 {
    transactions.fold(0.0, |sum, transaction| sum + transaction.amount)
}

/// The mean transaction amount, or `None` if there are no transactions.
pub fn average_spend(transactions: &[Transaction]) -> Option<f64> {
    if transactions.is_empty() {
        None
    } else {
        Some(total_spend(transactions) / transactions.len() as f64)
    }
}

/// The category with the largest total, or `None` if there are no transactions.
///
/// Ties go to the category that appears first in `transactions`.
pub fn top_category(transactions: &[Transaction]) -> Option<Category> {
    group_by_category(transactions).top()
}

/// The number of days covered by [daily_spending].
pub const DAILY_SPENDING_DAYS: i64 = 7;

/// The total spent on a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTotal {
    /// The calendar day.
    pub date: Date,
    /// The sum of the amounts of transactions on `date`.
    pub total: f64,
}

/// Totals spending for each of the last seven calendar days, oldest first.
///
/// The last entry is the day `now` falls on. Days run from local midnight to
/// local midnight, see [LocalNow::midnight].
///
/// This series is meant to be computed over the full transaction list, it does
/// not know about the selected time frame.
pub fn daily_spending(transactions: &[Transaction], now: impl Into<LocalNow>) -> Vec<DailyTotal> {
    let now = now.into();
    let today = now.today();

    (0..DAILY_SPENDING_DAYS)
        .rev()
        .map(|days_ago| {
            let date = today - Duration::days(days_ago);
            let start = now.midnight(date);
            let end = now.midnight(date + Duration::days(1));

            let total = sum_amounts(
                transactions
                    .iter()
                    .filter(|transaction| transaction.date >= start && transaction.date < end),
            );

            DailyTotal { date, total }
        })
        .collect()
}

/// A summary of the spending in the selected time frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    /// The sum of all amounts.
    pub total: f64,
    /// The number of transactions.
    pub count: usize,
    /// The mean amount, `None` if there are no transactions.
    pub average: Option<f64>,
    /// The category with the largest total, `None` if there are no transactions.
    pub top_category: Option<Category>,
}

impl PeriodSummary {
    /// Summarise `transactions`, which should already be filtered to a time frame.
    pub fn new(transactions: &[Transaction]) -> Self {
        Self {
            total: total_spend(transactions),
            count: transactions.len(),
            average: average_spend(transactions),
            top_category: top_category(transactions),
        }
    }

    /// The name of the top category, or [NOT_AVAILABLE_LABEL].
    pub fn top_category_label(&self) -> &'static str {
        self.top_category
            .map(Category::as_str)
            .unwrap_or(NOT_AVAILABLE_LABEL)
    }

    /// The average amount, zero if there are no transactions.
    pub fn average_or_zero(&self) -> f64 {
        self.average.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use time::{
        OffsetDateTime,
        macros::{date, datetime},
    };

    use crate::{
        aggregation::{
            DailyTotal, PeriodSummary, average_spend, daily_spending, group_by_category,
            top_category, total_spend,
        },
        category::Category,
        timezone::{LocalNow, get_timezone},
        transaction::{Transaction, TransactionName},
    };

    const NOW: OffsetDateTime = datetime!(2025-01-15 14:30 UTC);

    fn create_test_transaction(amount: f64, category: Category, date: OffsetDateTime) -> Transaction {
        Transaction::build(TransactionName::new_unchecked("Test"), amount)
            .category(category)
            .finalize(0, date)
    }

    #[test]
    fn group_by_category_sums_transactions() {
        let transactions = vec![
            create_test_transaction(100.0, Category::Food, NOW),
            create_test_transaction(50.0, Category::Food, NOW),
            create_test_transaction(30.0, Category::Bills, NOW),
        ];

        let totals = group_by_category(&transactions);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get(Category::Food), Some(150.0));
        assert_eq!(totals.get(Category::Bills), Some(30.0));
        assert_eq!(totals.get(Category::Health), None);
        assert_eq!(top_category(&transactions), Some(Category::Food));
        assert_eq!(total_spend(&transactions), 180.0);
    }

    #[test]
    fn group_by_category_keeps_first_encountered_order() {
        let transactions = vec![
            create_test_transaction(5.0, Category::Shopping, NOW),
            create_test_transaction(5.0, Category::Bills, NOW),
            create_test_transaction(5.0, Category::Shopping, NOW),
            create_test_transaction(1.0, Category::Education, NOW),
        ];

        let categories: Vec<_> = group_by_category(&transactions)
            .iter()
            .map(|(category, _)| category)
            .collect();

        assert_eq!(
            categories,
            vec![Category::Shopping, Category::Bills, Category::Education]
        );
    }

    #[test]
    fn group_by_category_handles_empty_input() {
        let totals = group_by_category(&[]);

        assert!(totals.is_empty());
        assert_eq!(totals.top(), None);
    }

    #[test]
    fn category_totals_sum_to_total_spend() {
        let transactions = vec![
            create_test_transaction(12.25, Category::Food, NOW),
            create_test_transaction(3.5, Category::Health, NOW),
            create_test_transaction(40.0, Category::Bills, NOW),
            create_test_transaction(0.25, Category::Food, NOW),
        ];

        assert_eq!(
            group_by_category(&transactions).sum(),
            total_spend(&transactions)
        );
    }

    #[test]
    fn top_category_ties_go_to_first_encountered() {
        let transactions = vec![
            create_test_transaction(20.0, Category::Health, NOW),
            create_test_transaction(10.0, Category::Bills, NOW),
            create_test_transaction(10.0, Category::Bills, NOW),
        ];

        assert_eq!(top_category(&transactions), Some(Category::Health));
    }

    #[test]
    fn average_spend_is_none_for_empty_input() {
        assert_eq!(average_spend(&[]), None);
        assert_eq!(total_spend(&[]), 0.0);
    }

    #[test]
    fn average_spend_divides_by_count() {
        let transactions = vec![
            create_test_transaction(10.0, Category::Food, NOW),
            create_test_transaction(20.0, Category::Food, NOW),
            create_test_transaction(60.0, Category::Food, NOW),
        ];

        assert_eq!(average_spend(&transactions), Some(30.0));
    }

    #[test]
    fn daily_spending_covers_last_seven_days() {
        let transactions = vec![
            create_test_transaction(10.0, Category::Food, datetime!(2025-01-15 00:00 UTC)),
            create_test_transaction(5.0, Category::Food, datetime!(2025-01-15 23:59 UTC)),
            create_test_transaction(7.0, Category::Bills, datetime!(2025-01-14 23:59:59 UTC)),
            create_test_transaction(3.0, Category::Bills, datetime!(2025-01-09 00:00 UTC)),
            // Outside the window on either side.
            create_test_transaction(100.0, Category::Food, datetime!(2025-01-08 23:59 UTC)),
            create_test_transaction(100.0, Category::Food, datetime!(2025-01-16 00:00 UTC)),
        ];

        let got = daily_spending(&transactions, NOW);

        assert_eq!(
            got,
            vec![
                DailyTotal { date: date!(2025 - 01 - 09), total: 3.0 },
                DailyTotal { date: date!(2025 - 01 - 10), total: 0.0 },
                DailyTotal { date: date!(2025 - 01 - 11), total: 0.0 },
                DailyTotal { date: date!(2025 - 01 - 12), total: 0.0 },
                DailyTotal { date: date!(2025 - 01 - 13), total: 0.0 },
                DailyTotal { date: date!(2025 - 01 - 14), total: 7.0 },
                DailyTotal { date: date!(2025 - 01 - 15), total: 15.0 },
            ]
        );
    }

    #[test]
    fn daily_spending_uses_local_days() {
        let now = datetime!(2025-01-15 08:00 +13);
        // 2025-01-14 11:00 UTC is 2025-01-15 00:00 in +13.
        let transactions = vec![create_test_transaction(
            9.0,
            Category::Food,
            datetime!(2025-01-14 11:00 UTC),
        )];

        let got = daily_spending(&transactions, now);

        assert_eq!(got.last().map(|day| day.total), Some(9.0));
        assert_eq!(got[5].total, 0.0);
    }

    #[test]
    fn empty_totals_are_positive_zero() {
        assert!(!total_spend(&[]).is_sign_negative());
        assert!(!group_by_category(&[]).sum().is_sign_negative());
        assert!(
            daily_spending(&[], NOW)
                .iter()
                .all(|day| !day.total.is_sign_negative())
        );
    }

    #[test]
    fn daily_spending_uses_local_days_across_daylight_saving_change() {
        // Daylight saving starts in New Zealand at 2am on 2025-09-28, so that
        // day is only 23 hours long.
        let auckland = get_timezone("Pacific/Auckland").unwrap();
        let now = LocalNow::new(datetime!(2025-10-01 12:00 +13), auckland);
        let transactions = vec![
            create_test_transaction(10.0, Category::Food, datetime!(2025-09-27 23:30 +12)),
            create_test_transaction(4.0, Category::Food, datetime!(2025-09-28 23:30 +13)),
            create_test_transaction(2.0, Category::Food, datetime!(2025-09-29 00:30 +13)),
        ];

        let got = daily_spending(&transactions, now);

        assert_eq!(got[2], DailyTotal { date: date!(2025 - 09 - 27), total: 10.0 });
        assert_eq!(got[3], DailyTotal { date: date!(2025 - 09 - 28), total: 4.0 });
        assert_eq!(got[4], DailyTotal { date: date!(2025 - 09 - 29), total: 2.0 });
    }

    #[test]
    fn daily_spending_crosses_month_boundary() {
        let now = datetime!(2025-03-02 12:00 UTC);

        let dates: Vec<_> = daily_spending(&[], now).iter().map(|day| day.date).collect();

        assert_eq!(dates.first(), Some(&date!(2025 - 02 - 24)));
        assert_eq!(dates.last(), Some(&date!(2025 - 03 - 02)));
        assert_eq!(dates.len(), 7);
    }

    #[test]
    fn period_summary_for_empty_input() {
        let summary = PeriodSummary::new(&[]);

        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average, None);
        assert_eq!(summary.average_or_zero(), 0.0);
        assert_eq!(summary.top_category_label(), "N/A");
    }

    #[test]
    fn period_summary_names_top_category() {
        let transactions = vec![
            create_test_transaction(8.0, Category::Transportation, NOW),
            create_test_transaction(2.0, Category::Food, NOW),
        ];

        let summary = PeriodSummary::new(&transactions);

        assert_eq!(summary.count, 2);
        assert_eq!(summary.average, Some(5.0));
        assert_eq!(summary.top_category_label(), "Transportation");
    }
}
