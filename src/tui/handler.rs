//! Event handler for the TUI
//!
//! Routes keyboard and mouse events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;
use super::layout::contains;
use crate::models::TransactionKind;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Tick => app.notifications.remove_expired(),
        Event::Resize(_, _) => {}
    }
    Ok(())
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Dialogs get the keys first
    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
        }
        KeyCode::Char('i') => {
            app.open_dialog(ActiveDialog::AddIncome);
        }
        KeyCode::Char('e') => {
            app.open_dialog(ActiveDialog::AddExpense);
        }
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_selected(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        _ => {}
    }
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match &app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::ConfirmDelete(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::AddIncome => {
            dialogs::transaction::handle_key(app, TransactionKind::Income, key);
        }
        ActiveDialog::AddExpense => {
            dialogs::transaction::handle_key(app, TransactionKind::Expense, key);
        }
        ActiveDialog::None => {}
    }
}

/// A left click outside the open dialog dismisses it without side effects
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    if let Some(area) = app.modal_area {
        if app.has_dialog() && !contains(area, mouse.column, mouse.row) {
            app.close_dialog();
        }
    }
}
