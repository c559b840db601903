//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use ratatui::layout::Rect;

use crate::config::{Settings, Theme};
use crate::models::{Transaction, TransactionKind};
use crate::services::{DeleteRequest, Ledger, WriteOutcome};

use super::dialogs::transaction::EntryForm;
use super::widgets::{Notification, NotificationQueue};

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddIncome,
    AddExpense,
    ConfirmDelete(DeleteRequest),
    Help,
}

impl ActiveDialog {
    /// The entry dialog for a transaction kind
    pub fn add(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => Self::AddIncome,
            TransactionKind::Expense => Self::AddExpense,
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// The ledger being shown and edited
    pub ledger: &'a mut Ledger,

    pub settings: &'a Settings,

    /// Current theme; starts from settings, toggled in memory only
    pub theme: Theme,

    pub should_quit: bool,

    pub active_dialog: ActiveDialog,

    /// Screen area of the open dialog, recorded at render time for mouse hits
    pub modal_area: Option<Rect>,

    /// Selected row in the transaction list
    pub selected_index: usize,

    pub income_form: EntryForm,
    pub expense_form: EntryForm,

    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    pub fn new(ledger: &'a mut Ledger, settings: &'a Settings) -> Self {
        Self {
            ledger,
            settings,
            theme: settings.theme,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            modal_area: None,
            selected_index: 0,
            income_form: EntryForm::new(TransactionKind::Income),
            expense_form: EntryForm::new(TransactionKind::Expense),
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn form(&self, kind: TransactionKind) -> &EntryForm {
        match kind {
            TransactionKind::Income => &self.income_form,
            TransactionKind::Expense => &self.expense_form,
        }
    }

    pub fn form_mut(&mut self, kind: TransactionKind) -> &mut EntryForm {
        match kind {
            TransactionKind::Income => &mut self.income_form,
            TransactionKind::Expense => &mut self.expense_form,
        }
    }

    /// Open a dialog. Only one dialog can be open; returns false if another
    /// one already is. Entry forms open empty.
    pub fn open_dialog(&mut self, dialog: ActiveDialog) -> bool {
        if self.has_dialog() {
            return false;
        }

        match &dialog {
            ActiveDialog::AddIncome => self.income_form.reset(),
            ActiveDialog::AddExpense => self.expense_form.reset(),
            _ => {}
        }

        self.active_dialog = dialog;
        true
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.modal_area = None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.ledger.transactions().get(self.selected_index)
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.ledger.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.ledger.len().saturating_sub(1));
    }

    /// Submit the entry form for `kind` and add the result to the ledger.
    /// A rejected add leaves the dialog open with the fields intact.
    pub fn submit_entry(&mut self, kind: TransactionKind) {
        let ledger = &mut *self.ledger;
        let form = match kind {
            TransactionKind::Income => &mut self.income_form,
            TransactionKind::Expense => &mut self.expense_form,
        };

        let mut added = None;
        let submitted = form.submit(|txn| {
            let title = txn.title.clone();
            added = Some((title, ledger.add(txn)?));
            Ok(())
        });
        let (Ok(()), Some((title, outcome))) = (submitted, added) else {
            return;
        };

        self.close_dialog();
        self.selected_index = self.ledger.len().saturating_sub(1);
        self.report_write(outcome, format!("{} \"{}\" added", kind.label(), title));
    }

    /// Ask to delete the selected transaction
    pub fn request_delete_selected(&mut self) {
        let Some(id) = self.selected_transaction().map(|t| t.id.clone()) else {
            return;
        };
        if let Some(request) = self.ledger.request_delete(&id) {
            self.open_dialog(ActiveDialog::ConfirmDelete(request));
        }
    }

    /// Carry out the pending delete, if one is open
    pub fn confirm_delete(&mut self) {
        let dialog = std::mem::take(&mut self.active_dialog);
        self.modal_area = None;

        if let ActiveDialog::ConfirmDelete(request) = dialog {
            let title = request.title().to_string();
            let outcome = self.ledger.confirm_delete(request);
            self.clamp_selection();
            self.report_write(outcome, format!("Deleted \"{}\"", title));
        }
    }

    fn report_write(&mut self, outcome: WriteOutcome, success: String) {
        let notification = match outcome {
            WriteOutcome::Persisted => Notification::success(success),
            WriteOutcome::Unchanged => Notification::info("Nothing to change"),
            WriteOutcome::Unpersisted(err) => Notification::error(format!(
                "{}, but it could not be saved: {}",
                success,
                err.message()
            )),
        };
        self.notify(notification);
    }
}
