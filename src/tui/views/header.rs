//! App header and net balance line

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::Theme;
use crate::services::Totals;
use crate::tui::app::App;
use crate::tui::theme::Palette;

/// Render the title bar with the theme indicator on the right
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = Palette::for_theme(app.theme);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(14)])
        .split(inner);

    let title = vec![
        Line::from(Span::styled(
            "Money Moves",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Track your everyday expenses", palette.muted())),
    ];
    frame.render_widget(Paragraph::new(title), columns[0]);

    let indicator = match app.theme {
        Theme::Light => "☾ Dark [t]",
        Theme::Dark => "☀ Light [t]",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(indicator, palette.muted())).alignment(Alignment::Right),
        columns[1],
    );
}

/// Render the centered "Net Balance" line
pub fn render_balance(frame: &mut Frame, app: &App, totals: &Totals, area: Rect) {
    let palette = Palette::for_theme(app.theme);
    let net = totals.net_balance;

    let lines = vec![
        Line::from(Span::styled(
            "Net Balance:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            net.format_with_symbol(&app.settings.currency_symbol),
            palette.balance(net.is_negative()),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
