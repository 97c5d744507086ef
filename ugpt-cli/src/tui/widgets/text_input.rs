//! Single-line text field

use super::super::theme;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Text field with a byte cursor that always sits on a char boundary
pub struct TextInput {
    pub value: String,
    pub label: String,
    pub placeholder: String,
    pub cursor_pos: usize,
}

impl TextInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            label: label.into(),
            placeholder: String::new(),
            cursor_pos: 0,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor_pos = self.value.len();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn handle_char(&mut self, c: char) {
        self.value.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn handle_backspace(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor_pos].char_indices().next_back() {
            self.value.remove(idx);
            self.cursor_pos = idx;
        }
    }

    pub fn handle_delete(&mut self) {
        if self.cursor_pos < self.value.len() {
            self.value.remove(self.cursor_pos);
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor_pos].char_indices().next_back() {
            self.cursor_pos = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor_pos..].chars().next() {
            self.cursor_pos += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Label
            Constraint::Length(3), // Input box
        ])
        .split(area);

        let label = Paragraph::new(self.label.clone()).style(theme::text());
        frame.render_widget(label, chunks[0]);

        let content = if self.value.is_empty() && !focused {
            Line::from(Span::styled(self.placeholder.clone(), theme::placeholder()))
        } else if focused {
            let (before, after) = self.value.split_at(self.cursor_pos);
            Line::from(vec![
                Span::styled(before.to_string(), theme::text()),
                Span::styled("▏", theme::border_active()),
                Span::styled(after.to_string(), theme::text()),
            ])
        } else {
            Line::from(Span::styled(self.value.clone(), theme::text()))
        };

        let input = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if focused {
                    theme::border_active()
                } else {
                    theme::border()
                }),
        );
        frame.render_widget(input, chunks[1]);
    }
}
