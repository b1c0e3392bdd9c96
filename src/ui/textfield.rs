//! Single-line editable text field with a character filter
//!
//! The partition and request lists are edited as free-form text. Only
//! digits, spaces, and commas are accepted at the keyboard level, so the
//! field's contents are always plain ASCII and the cursor can be tracked
//! as a byte offset.

use crossterm::event::KeyCode;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::ui::theme::DEFAULT_THEME;

/// Characters the field accepts. Everything else is dropped before it
/// reaches the value, mirroring the numeric-list format the parser reads.
fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || c == ' ' || c == ','
}

/// An editable one-line input with placeholder text.
pub struct TextField {
    value: String,
    cursor: usize,
    placeholder: &'static str,
}

impl TextField {
    pub fn new(placeholder: &'static str) -> Self {
        TextField {
            value: String::new(),
            cursor: 0,
            placeholder,
        }
    }

    /// Replace the contents, keeping only allowed characters. The cursor
    /// moves to the end. Used to pre-fill fields from the command line.
    pub fn set_value(&mut self, text: &str) {
        self.value = text.chars().filter(|&c| is_allowed(c)).collect();
        self.cursor = self.value.len();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Handle one key press. Unrecognized keys are ignored.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if is_allowed(c) => {
                self.value.insert(self.cursor, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.value.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.value.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.len(),
            _ => {}
        }
    }

    /// Build the field's display spans. When focused, the character under
    /// the cursor is rendered reversed (a trailing space stands in for the
    /// cursor at end-of-line). An empty field shows its placeholder dimmed.
    pub fn spans(&self, is_focused: bool) -> Vec<Span<'_>> {
        let value_style = Style::default().fg(DEFAULT_THEME.fg);
        let cursor_style = value_style.add_modifier(Modifier::REVERSED);
        let placeholder_style = Style::default().fg(DEFAULT_THEME.comment);

        if !is_focused {
            if self.value.is_empty() {
                return vec![Span::styled(self.placeholder, placeholder_style)];
            }
            return vec![Span::styled(self.value.as_str(), value_style)];
        }

        if self.value.is_empty() {
            return vec![
                Span::styled(" ", cursor_style),
                Span::styled(self.placeholder, placeholder_style),
            ];
        }

        let (before, rest) = self.value.split_at(self.cursor);
        let mut spans = vec![Span::styled(before, value_style)];
        match rest.split_at(if rest.is_empty() { 0 } else { 1 }) {
            ("", _) => spans.push(Span::styled(" ", cursor_style)),
            (at_cursor, after) => {
                spans.push(Span::styled(at_cursor, cursor_style));
                spans.push(Span::styled(after, value_style));
            }
        }
        spans
    }
}
