//! Totals panel: income, expense and net balance side by side

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::services::Totals;
use crate::tui::app::App;
use crate::tui::theme::Palette;

pub fn render(frame: &mut Frame, app: &App, totals: &Totals, area: Rect) {
    let palette = Palette::for_theme(app.theme);
    let symbol = app.settings.currency_symbol.as_str();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let cells = [
        ("Total Income", totals.total_income, bold.fg(palette.income)),
        ("Total Expense", totals.total_expense, bold.fg(palette.expense)),
        ("Net Balance", totals.net_balance, bold.fg(palette.foreground)),
    ];

    for ((label, amount, style), column) in cells.into_iter().zip(columns.iter()) {
        frame.render_widget(cell(label, amount, symbol, style), *column);
    }
}

fn cell(label: &'static str, amount: Money, symbol: &str, style: Style) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(label),
        Line::from(Span::styled(amount.format_with_symbol(symbol), style)),
    ])
    .alignment(Alignment::Center)
}
