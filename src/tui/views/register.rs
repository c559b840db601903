//! Transaction list
//!
//! Shows every transaction in the order it was added

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::TransactionKind;
use crate::tui::app::App;
use crate::tui::theme::Palette;

/// Render the transaction table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = Palette::for_theme(app.theme);
    let symbol = app.settings.currency_symbol.as_str();

    let block = Block::default()
        .title(" Transactions ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border());

    let transactions = app.ledger.transactions();

    if transactions.is_empty() {
        let text = Paragraph::new("No transactions yet.")
            .block(block)
            .style(palette.muted());
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Min(16),    // Title
        Constraint::Length(12), // Category
        Constraint::Length(12), // Date
        Constraint::Length(16), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Title"),
        Cell::from("Category"),
        Cell::from("Date"),
        Cell::from("Amount"),
    ])
    .style(palette.muted().add_modifier(Modifier::BOLD))
    .height(1);

    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            let amount_color = match txn.kind {
                TransactionKind::Income => palette.income,
                TransactionKind::Expense => palette.expense,
            };

            Row::new(vec![
                Cell::from(truncate_string(&txn.title, 30)),
                Cell::from(txn.category.name()),
                Cell::from(app.settings.format_date(txn.date)),
                Cell::from(format!(
                    "{}{}",
                    txn.kind.sign(),
                    txn.amount.format_with_symbol(symbol)
                ))
                .style(Style::default().fg(amount_color).add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(palette.highlight))
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index.min(transactions.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to at most `max_len` characters
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 1).collect();
        format!("{}…", head)
    }
}
