//! Help dialog
//!
//! Lists the keyboard shortcuts

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::theme::Palette;

/// Render the help dialog and return the area it covers
pub fn render(frame: &mut Frame, app: &App) -> Rect {
    let palette = Palette::for_theme(app.theme);
    let area = centered_rect_fixed(50, 20, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base());

    let paragraph = Paragraph::new(help_lines(&palette))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);

    area
}

fn help_lines(palette: &Palette) -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(palette.accent),
        ))
    };

    vec![
        heading("Transactions"),
        Line::from(""),
        key_line("i", "Add income", palette),
        key_line("e", "Add expense", palette),
        key_line("d/Del", "Delete selected transaction", palette),
        key_line("j/k ↑/↓", "Move selection", palette),
        Line::from(""),
        heading("General"),
        Line::from(""),
        key_line("t", "Toggle light/dark theme", palette),
        key_line("?", "Show/hide help", palette),
        key_line("q", "Quit", palette),
        Line::from(""),
        heading("In a form"),
        Line::from(""),
        key_line("Tab", "Next field", palette),
        key_line("←/→", "Choose category", palette),
        key_line("Enter", "Submit", palette),
        key_line("Esc", "Cancel", palette),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", palette.muted())),
    ]
}

/// Create a formatted key line
fn key_line(key: &str, description: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>10}", key), Style::default().fg(palette.accent)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(palette.foreground)),
    ])
}
