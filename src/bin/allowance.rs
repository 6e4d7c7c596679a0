use std::{
    error::Error,
    io::{self, Write},
    process::exit,
};

use clap::{Parser, Subcommand};

use allowance_rs::{
    Category, Config, Dashboard, LocalNow, SQLiteKeyValueStore, TimeFrame, TransactionForm,
    TransactionId, TransactionStore, format_currency, parse_allowance, render_dashboard,
    render_transactions, setup_logging, transactions_newest_first,
};

/// Track spending against a monthly allowance.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a new transaction dated now.
    Add {
        /// What the money was spent on.
        #[arg(long)]
        name: String,

        /// The amount spent, e.g. 12.50.
        #[arg(long, allow_hyphen_values = true)]
        amount: String,

        /// The category, see `categories`. Defaults to Food.
        #[arg(long)]
        category: Option<String>,
    },

    /// Delete the transaction with the given ID.
    Delete {
        /// The ID shown by `list`.
        id: TransactionId,
    },

    /// Delete every transaction.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Show the monthly allowance, or set it if an amount is given.
    Allowance {
        /// The new monthly allowance.
        #[arg(allow_hyphen_values = true)]
        amount: Option<String>,
    },

    /// List transactions, most recent first.
    List {
        /// One of today, week, month or all.
        #[arg(long, default_value = "month")]
        frame: String,

        /// Only show this many of the most recent transactions.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show spending summaries and allowance progress.
    Dashboard {
        /// One of today, week, month or all.
        #[arg(long, default_value = "month")]
        frame: String,
    },

    /// List the categories a transaction can have.
    Categories,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        print_error(error);
        exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    setup_logging(cli.config.log_file.as_deref())?;

    let now = cli.config.now()?;
    let storage = SQLiteKeyValueStore::open(&cli.config.db_path)?;
    let mut store = TransactionStore::load(storage);
    store.subscribe(|event| tracing::info!("Store changed: {event:?}"));

    match cli.command {
        Command::Add {
            name,
            amount,
            category,
        } => {
            let form = TransactionForm {
                name,
                amount,
                category: category.unwrap_or_default(),
            };
            add(&mut store, form, now)?
        }
        Command::Delete { id } => delete(&mut store, id),
        Command::Clear { yes } => clear(&mut store, yes)?,
        Command::Allowance { amount } => allowance(&mut store, amount.as_deref())?,
        Command::List { frame, limit } => list(&store, TimeFrame::parse(&frame), limit, now)?,
        Command::Dashboard { frame } => dashboard(&store, TimeFrame::parse(&frame), now)?,
        Command::Categories => {
            for category in Category::ALL {
                println!("{category}");
            }
        }
    }

    Ok(())
}

fn add(
    store: &mut TransactionStore<SQLiteKeyValueStore>,
    form: TransactionForm,
    now: LocalNow,
) -> Result<(), Box<dyn Error>> {
    let transaction = form.submit(store, now.instant())?;

    println!(
        "Added {} for {} ({}) with ID {}",
        transaction.name,
        format_currency(transaction.amount),
        transaction.category,
        transaction.id
    );

    Ok(())
}

fn delete(store: &mut TransactionStore<SQLiteKeyValueStore>, id: TransactionId) {
    if store.delete(id) {
        println!("Deleted transaction {id}");
    } else {
        println!("No transaction with ID {id}");
    }
}

fn clear(store: &mut TransactionStore<SQLiteKeyValueStore>, yes: bool) -> io::Result<()> {
    if !yes && !confirm("Delete all transactions? This cannot be undone. [y/N] ")? {
        println!("Cancelled");
        return Ok(());
    }

    let count = store.transactions().len();
    store.clear_all();
    println!("Deleted {count} transactions");

    Ok(())
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn allowance(
    store: &mut TransactionStore<SQLiteKeyValueStore>,
    amount: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    match amount {
        Some(text) => {
            let amount = parse_allowance(text)?;
            store.set_allowance(amount);
            println!("Monthly allowance set to {}", format_currency(amount));
        }
        None => println!(
            "Monthly allowance: {}",
            format_currency(store.monthly_allowance())
        ),
    }

    Ok(())
}

fn list(
    store: &TransactionStore<SQLiteKeyValueStore>,
    time_frame: TimeFrame,
    limit: Option<usize>,
    now: LocalNow,
) -> Result<(), Box<dyn Error>> {
    let mut transactions = transactions_newest_first(store.transactions(), time_frame, now);
    if let Some(limit) = limit {
        transactions.truncate(limit);
    }

    print!("{}", render_transactions(&transactions, time_frame)?);
    println!(
        "\nTotal for {}: {}",
        time_frame.label().to_lowercase(),
        format_currency(store.calculate_spending(time_frame, now))
    );

    Ok(())
}

fn dashboard(
    store: &TransactionStore<SQLiteKeyValueStore>,
    time_frame: TimeFrame,
    now: LocalNow,
) -> Result<(), Box<dyn Error>> {
    let dashboard = Dashboard::new(
        store.transactions(),
        store.monthly_allowance(),
        time_frame,
        now,
    );

    print!("{}", render_dashboard(&dashboard)?);

    Ok(())
}

fn print_error(error: impl ToString) {
    eprintln!(
        "\x1b[31;1m{}\x1b[0m",
        capitalise_first_char(&error.to_string())
    )
}

/// From https://crates.io/crates/capitalize
fn capitalise_first_char(string: &str) -> String {
    let mut chars = string.chars();
    let Some(first) = chars.next() else {
        return String::with_capacity(0);
    };
    first.to_uppercase().chain(chars).collect()
}
