//! Layout definitions for the TUI
//!
//! One column: header, net balance, totals, transaction list, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Layout regions for the main screen
pub struct AppLayout {
    pub header: Rect,
    pub balance: Rect,
    pub totals: Rect,
    pub register: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Length(3), // Net balance
                Constraint::Length(4), // Totals
                Constraint::Min(3),    // Transactions
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            balance: chunks[1],
            totals: chunks[2],
            register: chunks[3],
            status_bar: chunks[4],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Whether a terminal cell lies inside `area`
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}

/// Bottom-right corner box for toasts, above the status bar
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height.saturating_sub(1));
    Rect::new(
        r.x + r.width - width,
        (r.y + r.height).saturating_sub(height + 1),
        width,
        height,
    )
}
