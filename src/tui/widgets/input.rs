//! Text input state
//!
//! A single-line text buffer with a cursor. The cursor counts characters,
//! not bytes, so titles like "চা" edit correctly.

use ratatui::{
    style::Style,
    text::Span,
};

/// A simple text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Placeholder text shown while empty and unfocused
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_len();
        self
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Spans for the value, with the cursor cell highlighted when focused
    pub fn spans(
        &self,
        focused: bool,
        text_style: Style,
        placeholder_style: Style,
        cursor_style: Style,
    ) -> Vec<Span<'static>> {
        if !focused {
            return if self.content.is_empty() {
                vec![Span::styled(self.placeholder.clone(), placeholder_style)]
            } else {
                vec![Span::styled(self.content.clone(), text_style)]
            };
        }

        let before: String = self.content.chars().take(self.cursor).collect();
        let mut rest = self.content.chars().skip(self.cursor);
        let under = rest.next().unwrap_or(' ');
        let after: String = rest.collect();

        vec![
            Span::styled(before, text_style),
            Span::styled(under.to_string(), cursor_style),
            Span::styled(after, text_style),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "Rent".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Rent");
        assert_eq!(input.cursor, 4);

        input.backspace();
        assert_eq!(input.value(), "Ren");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("চা");
        assert_eq!(input.cursor, 2);

        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "চxা");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "xা");
        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "x");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.backspace();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_clear_and_blank() {
        let mut input = TextInput::new().content("  ");
        assert!(input.is_blank());
        input.clear();
        assert_eq!(input.cursor, 0);
        assert!(input.value().is_empty());
    }

    #[test]
    fn test_spans_show_placeholder_when_unfocused() {
        let input = TextInput::new().placeholder("YYYY-MM-DD");
        let spans = input.spans(false, Style::default(), Style::default(), Style::default());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "YYYY-MM-DD");
    }

    #[test]
    fn test_spans_split_at_cursor() {
        let mut input = TextInput::new().content("abc");
        input.move_left();
        let spans = input.spans(true, Style::default(), Style::default(), Style::default());
        let parts: Vec<_> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, ["ab", "c", ""]);
    }
}
