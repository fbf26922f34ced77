//! Cycle-select field widget
//!
//! A single-line select over a fixed option list, cycled with Up/Down. Used
//! for the birth month, birth year, and country fields; these are never
//! free-typed.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// State for a select field over fixed options
#[derive(Debug, Clone, Default)]
pub struct SelectField {
    /// Label
    pub label: String,
    /// Shown while nothing is selected
    pub placeholder: String,
    /// The option list, in display order
    pub options: Vec<String>,
    /// Index of the selected option, if any
    pub selected: Option<usize>,
}

impl SelectField {
    /// Create a new select field
    pub fn new(
        label: impl Into<String>,
        placeholder: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            options,
            selected: None,
        }
    }

    /// Move to the next option (first option when nothing is selected yet)
    pub fn next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1) % self.options.len(),
        });
    }

    /// Move to the previous option (first option when nothing is selected yet)
    pub fn prev(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(0) => self.options.len() - 1,
            Some(i) => i - 1,
        });
    }

    /// The selected option, if any
    pub fn value(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].as_str())
    }
}

/// Render a labeled select field with error highlighting
pub fn render_select_field(
    frame: &mut Frame,
    area: Rect,
    select: &SelectField,
    focused: bool,
    error: bool,
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

    let mut spans = vec![Span::styled(format!("{}: ", select.label), label_style)];

    match select.value() {
        Some(value) => {
            let value_style = if focused {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!("‹ {} ›", value), value_style));
        }
        None => {
            let placeholder_style = if error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(select.placeholder.clone(), placeholder_style));
        }
    }

    if focused {
        spans.push(Span::styled(
            "  (↑/↓ to change)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
