//! Add Income / Add Expense dialog
//!
//! `EntryForm` holds the raw field values for one transaction kind and turns
//! them into a validated `Transaction` on submit. It never touches the ledger;
//! the caller decides what to do with the result.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::{MoneyError, MoneyResult};
use crate::models::{Category, Money, Transaction, TransactionKind};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::theme::Palette;
use crate::tui::widgets::input::TextInput;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which field is currently focused in the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryField {
    #[default]
    Title,
    Amount,
    Category,
    Date,
}

impl EntryField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Title,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Date,
            Self::Amount => Self::Title,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
        }
    }
}

/// Form state for entering one transaction of a fixed kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    kind: TransactionKind,
    pub focused_field: EntryField,
    pub title_input: TextInput,
    pub amount_input: TextInput,
    /// Index into `Category::for_kind(kind)`; `None` until the user picks one
    pub category_index: Option<usize>,
    pub date_input: TextInput,
    error_message: Option<String>,
}

impl EntryForm {
    pub fn new(kind: TransactionKind) -> Self {
        Self {
            kind,
            focused_field: EntryField::Title,
            title_input: TextInput::new().label("Title").placeholder("e.g. Salary"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            category_index: None,
            date_input: TextInput::new().label("Date").placeholder("YYYY-MM-DD"),
            error_message: None,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Categories the user can pick from
    pub fn categories(&self) -> &'static [Category] {
        Category::for_kind(self.kind)
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.category_index
            .and_then(|i| self.categories().get(i).copied())
    }

    /// Select a category by value; ignored if not valid for this kind
    pub fn select_category(&mut self, category: Category) {
        if let Some(i) = self.categories().iter().position(|c| *c == category) {
            self.category_index = Some(i);
        }
    }

    /// Cycle the category selection forward; from "unselected" picks the first
    pub fn next_category(&mut self) {
        let count = self.categories().len();
        self.category_index = Some(match self.category_index {
            Some(i) => (i + 1) % count,
            None => 0,
        });
    }

    /// Cycle the category selection backward; from "unselected" picks the last
    pub fn prev_category(&mut self) {
        let count = self.categories().len();
        self.category_index = Some(match self.category_index {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        });
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn set_focus(&mut self, field: EntryField) {
        self.focused_field = field;
    }

    /// The focused text input; the category field has none
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            EntryField::Title => Some(&mut self.title_input),
            EntryField::Amount => Some(&mut self.amount_input),
            EntryField::Category => None,
            EntryField::Date => Some(&mut self.date_input),
        }
    }

    /// Message from the last failed submit
    pub fn error(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Empty every field and focus the title
    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }

    /// Check the fields and build a transaction without changing the form
    pub fn build(&self) -> MoneyResult<Transaction> {
        let title = self.title_input.value().trim();
        let amount_text = self.amount_input.value().trim();
        let date_text = self.date_input.value().trim();

        let category = match self.selected_category() {
            Some(category) if !title.is_empty() && !amount_text.is_empty() && !date_text.is_empty() => {
                category
            }
            _ => return Err(MoneyError::Validation("Please fill all fields.".into())),
        };

        let amount = Money::parse(amount_text)
            .map_err(|_| MoneyError::Validation("Amount must be a number.".into()))?;
        if !amount.is_positive() {
            return Err(MoneyError::Validation("Amount must be positive.".into()));
        }

        let date = parse_date(date_text).ok_or_else(|| {
            MoneyError::Validation("Date must be in YYYY-MM-DD format.".into())
        })?;

        Ok(Transaction::new(self.kind, title, amount, category, date))
    }

    /// Validate the fields and hand a fresh transaction to `on_complete`.
    ///
    /// The form resets only when both validation and `on_complete` succeed.
    /// Otherwise the error is kept for display and every field keeps its
    /// value.
    pub fn submit(
        &mut self,
        on_complete: impl FnOnce(Transaction) -> MoneyResult<()>,
    ) -> MoneyResult<()> {
        match self.build().and_then(on_complete) {
            Ok(()) => {
                self.reset();
                Ok(())
            }
            Err(err) => {
                self.set_error(err.message());
                Err(err)
            }
        }
    }
}

/// Strict `YYYY-MM-DD`: four-digit year, two-digit month and day
fn parse_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

/// Render the entry dialog for `kind` and return the area it covers
pub fn render(frame: &mut Frame, app: &App, kind: TransactionKind) -> Rect {
    let palette = Palette::for_theme(app.theme);
    let form = app.form(kind);
    let area = centered_rect_fixed(56, 11, frame.area());

    frame.render_widget(Clear, area);

    let accent = match kind {
        TransactionKind::Income => palette.income,
        TransactionKind::Expense => palette.expense,
    };

    let block = Block::default()
        .title(format!(" Add {} ", kind.label()))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(palette.base());

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    render_text_field(frame, chunks[0], &form.title_input, form.focused_field == EntryField::Title, &palette);
    render_text_field(frame, chunks[1], &form.amount_input, form.focused_field == EntryField::Amount, &palette);
    render_category_field(frame, chunks[2], form, &palette);
    render_text_field(frame, chunks[3], &form.date_input, form.focused_field == EntryField::Date, &palette);

    if let Some(error) = form.error() {
        let error_line = Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(palette.expense),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[5]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(palette.accent)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(palette.income)),
        Span::raw(format!(" Add {}  ", kind.label())),
        Span::styled("[Esc]", Style::default().fg(palette.expense)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints).style(palette.muted()), chunks[7]);

    area
}

fn label_span(label: &str, focused: bool, palette: &Palette) -> Span<'static> {
    let style = if focused {
        palette.title()
    } else {
        Style::default().fg(palette.foreground)
    };
    Span::styled(format!("{:>9}: ", label), style)
}

fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    input: &TextInput,
    focused: bool,
    palette: &Palette,
) {
    let mut spans = vec![label_span(&input.label, focused, palette)];
    spans.extend(input.spans(
        focused,
        Style::default().fg(palette.foreground),
        palette.muted(),
        palette.cursor(),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_category_field(frame: &mut Frame, area: Rect, form: &EntryForm, palette: &Palette) {
    let focused = form.focused_field == EntryField::Category;
    let mut spans = vec![label_span("Category", focused, palette)];

    let (text, style) = match form.selected_category() {
        Some(category) => (category.name(), Style::default().fg(palette.foreground)),
        None => ("Select", palette.muted()),
    };

    if focused {
        spans.push(Span::styled("◀ ", palette.muted()));
        spans.push(Span::styled(text, style.add_modifier(Modifier::REVERSED)));
        spans.push(Span::styled(" ▶", palette.muted()));
        spans.push(Span::styled("  ←/→ to choose", palette.muted()));
    } else {
        spans.push(Span::styled(text, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Handle key input for the entry dialog of `kind`.
/// Returns true if the key was handled.
pub fn handle_key(app: &mut App, kind: TransactionKind, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }
        KeyCode::Enter => {
            app.submit_entry(kind);
            return true;
        }
        _ => {}
    }

    let form = app.form_mut(kind);

    match key.code {
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Left | KeyCode::Up if form.focused_field == EntryField::Category => {
            form.clear_error();
            form.prev_category();
        }
        KeyCode::Right | KeyCode::Down if form.focused_field == EntryField::Category => {
            form.clear_error();
            form.next_category();
        }
        KeyCode::Up => form.prev_field(),
        KeyCode::Down => form.next_field(),
        KeyCode::Left => {
            if let Some(input) = form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
        }
        KeyCode::Backspace => {
            form.clear_error();
            match form.focused_input() {
                Some(input) => input.backspace(),
                None => form.category_index = None,
            }
        }
        KeyCode::Delete => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }
        KeyCode::Char(c) => {
            form.clear_error();
            match form.focused_input() {
                Some(input) => input.insert(c),
                // Typing the first letter of a category picks it
                None => {
                    if let Some(category) = form
                        .categories()
                        .iter()
                        .find(|cat| cat.name().starts_with(c.to_ascii_uppercase()))
                    {
                        form.select_category(*category);
                    }
                }
            }
        }
        _ => return false,
    }

    true
}
