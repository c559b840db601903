//! Transaction CLI commands
//!
//! Add, list, show and delete transactions without opening the TUI.

use chrono::{Local, NaiveDate};
use clap::Args;
use std::io::{self, BufRead, Write};

use crate::config::Settings;
use crate::display::{format_totals, format_transaction_details, format_transaction_table};
use crate::error::{MoneyError, MoneyResult};
use crate::models::{Category, Money, Transaction, TransactionKind};
use crate::services::{Ledger, WriteOutcome};

/// Arguments shared by `income` and `expense`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was for, e.g. "Salary" or "Groceries"
    pub title: String,

    /// Amount as a positive number, e.g. 1200 or 12.50
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category name (income: Salary, Freelance, Investment, Other;
    /// expense: Food, Transport, Shopping, Bills, Other)
    #[arg(short, long)]
    pub category: String,

    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Build a transaction from command-line arguments
pub fn parse_add_args(kind: TransactionKind, args: &AddArgs) -> MoneyResult<Transaction> {
    let amount = Money::parse(&args.amount)
        .map_err(|_| MoneyError::Validation("Amount must be a number.".into()))?;

    let category: Category = args.category.parse().map_err(MoneyError::Validation)?;

    let date = match &args.date {
        Some(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map_err(|_| MoneyError::Validation("Date must be in YYYY-MM-DD format.".into()))?,
        None => Local::now().date_naive(),
    };

    Ok(Transaction::new(kind, args.title.trim(), amount, category, date))
}

/// Handle `income` / `expense`
pub fn handle_add(
    ledger: &mut Ledger,
    settings: &Settings,
    kind: TransactionKind,
    args: AddArgs,
) -> MoneyResult<()> {
    let txn = parse_add_args(kind, &args)?;
    let summary = format!(
        "Added {}: {} ({}) {}{}",
        kind.label().to_lowercase(),
        txn.title,
        txn.category,
        kind.sign(),
        txn.amount.format_with_symbol(&settings.currency_symbol)
    );
    let id = txn.id.short();

    let outcome = ledger.add(txn)?;
    require_persisted(outcome)?;

    println!("{}", summary);
    println!("  ID: {}", id);
    Ok(())
}

/// Handle `list`
pub fn handle_list(ledger: &Ledger, settings: &Settings) -> MoneyResult<()> {
    println!(
        "{}",
        format_transaction_table(ledger.transactions(), settings)
    );
    Ok(())
}

/// Handle `show <id>`
pub fn handle_show(ledger: &Ledger, settings: &Settings, query: &str) -> MoneyResult<()> {
    let txn = ledger.find(query)?;
    print!("{}", format_transaction_details(txn, settings));
    Ok(())
}

/// Handle `summary`
pub fn handle_summary(ledger: &Ledger, settings: &Settings) -> MoneyResult<()> {
    print!("{}", format_totals(&ledger.totals(), &settings.currency_symbol));
    Ok(())
}

/// Handle `delete <id>`; asks for confirmation unless `force` is set
pub fn handle_delete(
    ledger: &mut Ledger,
    settings: &Settings,
    query: &str,
    force: bool,
) -> MoneyResult<()> {
    let id = ledger.find(query)?.id.clone();
    let Some(request) = ledger.request_delete(&id) else {
        return Err(MoneyError::transaction_not_found(query));
    };

    if !force {
        let prompt = format!("{} [y/N]: ", request.prompt(&settings.currency_symbol));
        let stdin = io::stdin();
        if !confirm(&prompt, &mut stdin.lock(), &mut io::stdout())? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let title = request.title().to_string();
    require_persisted(ledger.confirm_delete(request))?;
    println!("Deleted transaction: {}", title);
    Ok(())
}

/// Print `prompt` and read a yes/no answer; anything but y/yes is a no
pub fn confirm<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> MoneyResult<bool> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// The process exits right after a CLI command, so a change that did not
/// reach disk is lost and reported as a failure
fn require_persisted(outcome: WriteOutcome) -> MoneyResult<()> {
    match outcome {
        WriteOutcome::Unpersisted(err) => Err(err),
        WriteOutcome::Persisted | WriteOutcome::Unchanged => Ok(()),
    }
}
