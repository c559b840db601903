//! Transaction display formatting
//!
//! Formats transactions and totals for terminal output.

use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::config::Settings;
use crate::models::Transaction;
use crate::services::Totals;

/// One row of the `list` table
#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, settings: &Settings) -> Self {
        Self {
            id: txn.id.short(),
            date: settings.format_date(txn.date),
            title: txn.title.clone(),
            category: txn.category.to_string(),
            amount: format_signed_amount(txn, &settings.currency_symbol),
        }
    }
}

/// Amount with the kind's sign, e.g. `+৳5000.00` or `-৳1200.00`
pub fn format_signed_amount(txn: &Transaction, symbol: &str) -> String {
    format!("{}{}", txn.kind.sign(), txn.amount.format_with_symbol(symbol))
}

/// Format transactions as a table, in ledger order
pub fn format_transaction_table(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions yet.".to_string();
    }

    let rows = transactions
        .iter()
        .map(|txn| TransactionRow::new(txn, settings));

    Table::new(rows)
        .with(Style::rounded())
        .modify(Columns::last(), Alignment::right())
        .to_string()
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Title:       {}\n", txn.title));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Date:        {}\n", settings.format_date(txn.date)));

    output
}

/// Format the three running totals
pub fn format_totals(totals: &Totals, symbol: &str) -> String {
    format!(
        "Total Income:  {:>14}\nTotal Expense: {:>14}\nNet Balance:   {:>14}\n",
        totals.total_income.format_with_symbol(symbol),
        totals.total_expense.format_with_symbol(symbol),
        totals.net_balance.format_with_symbol(symbol),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionKind};
    use chrono::NaiveDate;

    fn groceries() -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            "Groceries",
            Money::from_cents(120000),
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        )
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_transaction_table(&[], &Settings::default()),
            "No transactions yet."
        );
    }

    #[test]
    fn test_table_contains_row() {
        let txn = groceries();
        let table = format_transaction_table(std::slice::from_ref(&txn), &Settings::default());
        assert!(table.contains("Groceries"));
        assert!(table.contains("Food"));
        assert!(table.contains("2024-01-02"));
        assert!(table.contains("-৳1200.00"));
        assert!(table.contains(&txn.id.short()));
    }

    #[test]
    fn test_details() {
        let details = format_transaction_details(&groceries(), &Settings::default());
        assert!(details.contains("Type:        Expense"));
        assert!(details.contains("Amount:      ৳1200.00"));
    }

    #[test]
    fn test_format_totals() {
        let totals = Totals {
            total_income: Money::from_cents(500000),
            total_expense: Money::from_cents(120000),
            net_balance: Money::from_cents(380000),
        };
        let text = format_totals(&totals, "$");
        assert!(text.contains("Total Income:"));
        assert!(text.contains("$5000.00"));
        assert!(text.contains("$1200.00"));
        assert!(text.contains("$3800.00"));
    }

    #[test]
    fn test_negative_net_balance() {
        let totals = Totals {
            total_income: Money::zero(),
            total_expense: Money::from_cents(50),
            net_balance: Money::from_cents(-50),
        };
        assert!(format_totals(&totals, "৳").contains("-৳0.50"));
    }
}
