//! Plain text rendering of transactions and the dashboard.

use std::{
    fmt::{self, Write},
    sync::OnceLock,
};

use numfmt::{Formatter, Precision};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    allowance::BudgetStatus, dashboard::Dashboard, time_frame::TimeFrame,
    transaction::Transaction,
};

const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

const DAY_LABEL_FORMAT: &[BorrowedFormatItem] =
    format_description!("[month repr:short] [day padding:none]");

/// The width in characters of a full bar in the seven day chart.
const BAR_WIDTH: f64 = 30.0;

/// Format `number` as dollars with two decimal places, e.g. "$1,234.50".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .expect("\"$\" is a valid currency prefix")
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .expect("\"-$\" is a valid currency prefix")
            .precision(Precision::Decimals(2))
    });

    let formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "$0.00".to_owned();
    };

    pad_decimals(formatted_string)
}

/// numfmt drops trailing zeros, e.g. "12.30" is rendered as "12.3".
fn pad_decimals(mut formatted_string: String) -> String {
    let decimals = match formatted_string.rfind('.') {
        Some(point) => formatted_string.len() - point - 1,
        None => {
            formatted_string.push('.');
            0
        }
    };

    for _ in decimals..2 {
        formatted_string.push('0');
    }

    formatted_string
}

/// Format a date as "2025-01-15".
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Format a date as a short chart label, e.g. "Jan 5".
pub fn format_day_label(date: Date) -> String {
    date.format(DAY_LABEL_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Render transactions as a table, one row per transaction.
///
/// `time_frame` is only used to name the period when there are no transactions.
///
/// # Errors
/// Returns an error only if formatting one of the values fails.
pub fn render_transactions(
    transactions: &[Transaction],
    time_frame: TimeFrame,
) -> Result<String, fmt::Error> {
    if transactions.is_empty() {
        return Ok(format!(
            "No transactions for {}.\n",
            time_frame.label().to_lowercase()
        ));
    }

    let mut output = String::new();
    write_transaction_table(&mut output, transactions)?;

    Ok(output)
}

fn write_transaction_table(output: &mut String, transactions: &[Transaction]) -> fmt::Result {
    writeln!(
        output,
        "{:<15} {:<10} {:<30} {:<15} {:>12}",
        "ID", "Date", "Name", "Category", "Amount"
    )?;

    for transaction in transactions {
        writeln!(
            output,
            "{:<15} {:<10} {:<30} {:<15} {:>12}",
            transaction.id,
            format_date(transaction.date.date()),
            transaction.name,
            transaction.category,
            format_currency(transaction.amount)
        )?;
    }

    Ok(())
}

/// Render the dashboard as text.
///
/// # Errors
/// Returns an error only if formatting one of the values fails.
pub fn render_dashboard(dashboard: &Dashboard) -> Result<String, fmt::Error> {
    let mut output = String::new();
    let period = &dashboard.period;

    writeln!(output, "Summary for {}", dashboard.time_frame.label())?;
    writeln!(output, "  Total spent:    {}", format_currency(period.total))?;
    writeln!(output, "  Transactions:   {}", period.count)?;
    writeln!(
        output,
        "  Average:        {}",
        format_currency(period.average_or_zero())
    )?;
    writeln!(output, "  Top category:   {}", period.top_category_label())?;

    writeln!(output, "\nSpending by category")?;
    if dashboard.category_totals.is_empty() {
        writeln!(output, "  No spending data")?;
    }
    for (category, total) in dashboard.category_totals.iter() {
        writeln!(output, "  {:<15} {:>12}", category, format_currency(total))?;
    }

    writeln!(output, "\nLast 7 days")?;
    let max_total = dashboard
        .daily_spending
        .iter()
        .map(|day| day.total)
        .fold(0.0, f64::max);
    for day in &dashboard.daily_spending {
        let bar_length = if max_total > 0.0 {
            (day.total / max_total * BAR_WIDTH).round() as usize
        } else {
            0
        };

        writeln!(
            output,
            "  {:<6} {:>12} {}",
            format_day_label(day.date),
            format_currency(day.total),
            "#".repeat(bar_length)
        )?;
    }

    let allowance = &dashboard.allowance;
    writeln!(output, "\nMonthly allowance")?;
    writeln!(
        output,
        "  Allowance:      {}",
        format_currency(allowance.monthly_allowance)
    )?;
    writeln!(
        output,
        "  Spent:          {} ({:.0}%)",
        format_currency(allowance.monthly_spending),
        allowance.percent_consumed()
    )?;
    writeln!(
        output,
        "  Remaining:      {}",
        format_currency(allowance.remaining_for_display())
    )?;
    writeln!(
        output,
        "  Daily budget:   {} for {} days",
        format_currency(allowance.daily_budget_for_display()),
        allowance.days_remaining
    )?;
    writeln!(output, "  Status:         {}", status_label(allowance.status()))?;

    writeln!(output, "\nRecent transactions")?;
    if dashboard.recent.is_empty() {
        writeln!(output, "  No transactions yet")?;
    } else {
        write_transaction_table(&mut output, &dashboard.recent)?;
    }

    Ok(output)
}

fn status_label(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::OnTrack => "On track",
        BudgetStatus::Warning => "Warning: most of the allowance has been spent",
        BudgetStatus::Exceeded => "Over budget",
    }
}
