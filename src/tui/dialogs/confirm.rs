//! Delete confirmation dialog
//!
//! Simple yes/no confirmation for a pending `DeleteRequest`

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::services::DeleteRequest;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::theme::Palette;

/// Render the confirmation dialog and return the area it covers
pub fn render(frame: &mut Frame, app: &App, request: &DeleteRequest) -> Rect {
    let palette = Palette::for_theme(app.theme);
    let area = centered_rect_fixed(54, 8, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Transaction ")
        .title_style(
            Style::default()
                .fg(palette.expense)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.expense))
        .style(palette.base());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            request.prompt(&app.settings.currency_symbol),
            Style::default().fg(palette.foreground),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(palette.income)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(palette.expense)),
            Span::raw(" No  "),
            Span::styled("[Esc]", palette.muted()),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);

    area
}
