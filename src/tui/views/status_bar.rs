//! Status bar view
//!
//! Shows the transaction count, the latest notification and key hints

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::theme::Palette;

const HINTS: &str = " i:Income  e:Expense  d:Delete  t:Theme  ?:Help  q:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let palette = Palette::for_theme(app.theme);
    let count = app.ledger.len();

    let mut spans = vec![Span::styled(
        format!(" {} transaction{}", count, if count == 1 { "" } else { "s" }),
        Style::default().fg(palette.foreground),
    )];

    if let Some(notification) = app.notifications.current() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            notification.message.clone(),
            Style::default().fg(notification.notification_type.color(&palette)),
        ));
    }

    // Key hints (right-aligned)
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + HINTS.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, palette.muted()));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.highlight));

    frame.render_widget(paragraph, area);
}
