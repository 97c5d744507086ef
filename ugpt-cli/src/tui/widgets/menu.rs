//! Selectable list widget

use super::super::theme;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Menu entry; `detail` is shown under the list while the entry is selected
pub struct MenuItem {
    pub label: String,
    pub detail: Option<String>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Menu widget state
pub struct Menu {
    pub items: Vec<MenuItem>,
    pub state: ListState,
    pub title: String,
}

impl Menu {
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }
        Self {
            items,
            state,
            title: title.into(),
        }
    }

    /// Move down, wrapping to the first item
    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < self.items.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    /// Move up, wrapping to the last item
    pub fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.state.selected().and_then(|i| self.items.get(i))
    }

    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.state.select(Some(index));
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let chunks = Layout::vertical([
            Constraint::Min(0),    // List
            Constraint::Length(1), // Detail
        ])
        .split(area);

        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(Line::from(Span::raw(item.label.clone()))))
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .border_style(if focused {
                theme::border_active()
            } else {
                theme::border()
            });

        let list = List::new(items)
            .block(block)
            .highlight_style(if focused {
                theme::selected()
            } else {
                theme::text()
            })
            .highlight_symbol(if focused { "▶ " } else { "  " });

        frame.render_stateful_widget(list, chunks[0], &mut self.state);

        if focused {
            if let Some(detail) = self.selected_item().and_then(|item| item.detail.clone()) {
                let detail = Paragraph::new(detail).style(theme::footer());
                frame.render_widget(detail, chunks[1]);
            }
        }
    }
}
