//! Text input widget
//!
//! A text input field with cursor support, an optional masked mode for
//! password entry, and an error-highlight rendering flag.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// A simple text input state
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position (in characters)
    pub cursor: usize,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
    /// Render content as mask characters
    pub masked: bool,
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

    /// Mark the input as masked (password entry)
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let byte_index = self.byte_index(self.cursor);
        self.content.insert(byte_index, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_index = self.byte_index(self.cursor);
            self.content.remove(byte_index);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let byte_index = self.byte_index(self.cursor);
            self.content.remove(byte_index);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
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

    /// The text to show: masked with bullets unless revealed
    pub fn display_value(&self, reveal: bool) -> String {
        if self.masked && !reveal {
            "•".repeat(self.content.chars().count())
        } else {
            self.content.clone()
        }
    }

    /// Byte offset of the given character position
    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

/// Render a labeled text field with cursor and error highlighting
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    input: &TextInput,
    focused: bool,
    error: bool,
    reveal: bool,
) {
    let label_style = if error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = vec![Span::styled(format!("{}: ", input.label), label_style)];

    let value = input.display_value(reveal);
    let value_style = if error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };

    let display_value = if value.is_empty() && !focused {
        input.placeholder.clone()
    } else {
        value
    };

    if focused {
        let chars: Vec<char> = display_value.chars().collect();
        let cursor_pos = input.cursor.min(chars.len());

        let before: String = chars[..cursor_pos].iter().collect();
        spans.push(Span::styled(before, value_style));

        let cursor_char = chars.get(cursor_pos).copied().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        if cursor_pos + 1 < chars.len() {
            let after: String = chars[cursor_pos + 1..].iter().collect();
            spans.push(Span::styled(after, value_style));
        }
    } else {
        spans.push(Span::styled(display_value, value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_cursor() {
        let mut input = TextInput::new();
        input.insert('a');
        input.insert('b');
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor, 2);

        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "axb");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::new();
        for c in "abc".chars() {
            input.insert(c);
        }

        input.backspace();
        assert_eq!(input.value(), "ab");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::new().masked();
        for c in "secret".chars() {
            input.insert(c);
        }

        assert_eq!(input.display_value(false), "••••••");
        assert_eq!(input.display_value(true), "secret");
    }

    #[test]
    fn test_unmasked_display_ignores_reveal() {
        let mut input = TextInput::new();
        input.insert('a');
        assert_eq!(input.display_value(false), "a");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        input.insert('é');
        input.insert('b');
        input.move_left();
        input.move_left();
        input.delete();
        assert_eq!(input.value(), "b");
    }
}
