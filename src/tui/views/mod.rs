//! TUI Views module
//!
//! The single screen: header, net balance, totals, transaction list and
//! status bar, with the active dialog drawn on top.

pub mod header;
pub mod register;
pub mod status_bar;
pub mod summary;

use ratatui::{widgets::Block, Frame};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::theme::Palette;
use super::widgets::NotificationWidget;
use crate::models::TransactionKind;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::for_theme(app.theme);
    let layout = AppLayout::new(frame.area());

    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let totals = app.ledger.totals();
    header::render(frame, app, layout.header);
    header::render_balance(frame, app, &totals, layout.balance);
    summary::render(frame, app, &totals, layout.totals);
    register::render(frame, app, layout.register);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(44, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification, palette), area);
    }

    app.modal_area = render_dialog(frame, app);
}

/// Render the active dialog; returns the area it covers
fn render_dialog(frame: &mut Frame, app: &App) -> Option<ratatui::layout::Rect> {
    let area = match &app.active_dialog {
        ActiveDialog::AddIncome => dialogs::transaction::render(frame, app, TransactionKind::Income),
        ActiveDialog::AddExpense => {
            dialogs::transaction::render(frame, app, TransactionKind::Expense)
        }
        ActiveDialog::ConfirmDelete(request) => dialogs::confirm::render(frame, app, request),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => return None,
    };
    Some(area)
}
