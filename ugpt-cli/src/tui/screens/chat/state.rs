//! Conversation view state

use super::input::{CommandResult, parse_command};
use ugpt_core::{ChatSession, Message, ScheduledReply, SendError};

/// The input box grows with its content up to this many lines
pub const MAX_INPUT_LINES: u16 = 5;

pub struct ChatState {
    pub session: ChatSession,
    /// Identity shown in the sidebar
    pub user: String,
    /// Current input buffer
    pub input: String,
    /// Byte offset of the cursor, always on a char boundary
    pub cursor_pos: usize,
    /// Scroll offset for messages; `u16::MAX` pins the view to the bottom
    pub scroll_offset: u16,
    /// Largest useful offset, recorded by the last render
    pub max_scroll: u16,
    /// Typing indicator animation frame
    pub loading_frame: usize,
    pub status_message: Option<String>,
}

impl ChatState {
    pub fn new(session: ChatSession, user: impl Into<String>) -> Self {
        Self {
            session,
            user: user.into(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: u16::MAX,
            max_scroll: 0,
            loading_frame: 0,
            status_message: None,
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.session.messages()
    }

    /// True while the assistant's reply is pending
    pub fn is_responding(&self) -> bool {
        self.session.is_responding()
    }

    /// Send is disabled for blank input and while a reply is pending
    pub fn can_send(&self) -> bool {
        self.session.can_send(&self.input)
    }

    /// Record the input as a user message and clear the buffer.
    /// On error the input is left untouched.
    pub fn submit(&mut self) -> Result<ScheduledReply, SendError> {
        let reply = self.session.submit(&self.input)?;
        self.input.clear();
        self.cursor_pos = 0;
        self.status_message = None;
        self.scroll_to_bottom();
        Ok(reply)
    }

    /// Append a delivered reply; false when it was stale
    pub fn deliver(&mut self, reply: ScheduledReply) -> bool {
        let appended = self.session.deliver(reply).is_some();
        if appended {
            self.loading_frame = 0;
            self.scroll_to_bottom();
        }
        appended
    }

    /// Reset to a single greeting and clear the input
    pub fn new_conversation(&mut self) {
        self.session.new_conversation();
        self.input.clear();
        self.cursor_pos = 0;
        self.loading_frame = 0;
        self.scroll_to_bottom();
        self.status_message = Some("New chat started".into());
    }

    /// Get the current input and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if let Some((idx, _)) = self.input[..self.cursor_pos].char_indices().next_back() {
            self.input.remove(idx);
            self.cursor_pos = idx;
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.input.len() {
            self.input.remove(self.cursor_pos);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some((idx, _)) = self.input[..self.cursor_pos].char_indices().next_back() {
            self.cursor_pos = idx;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.input[self.cursor_pos..].chars().next() {
            self.cursor_pos += c.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    pub fn is_multiline(&self) -> bool {
        self.input.contains('\n')
    }

    /// Move to the same column on the previous line, clamped to its length
    pub fn move_cursor_up(&mut self) {
        let line_start = self.line_start(self.cursor_pos);
        if line_start == 0 {
            self.cursor_pos = 0;
            return;
        }
        let column = self.input[line_start..self.cursor_pos].chars().count();
        let prev_start = self.line_start(line_start - 1);
        self.cursor_pos = Self::offset_at_column(&self.input, prev_start, line_start - 1, column);
    }

    /// Move to the same column on the next line, clamped to its length
    pub fn move_cursor_down(&mut self) {
        let Some(newline) = self.input[self.cursor_pos..].find('\n') else {
            self.cursor_pos = self.input.len();
            return;
        };
        let column = self.input[self.line_start(self.cursor_pos)..self.cursor_pos]
            .chars()
            .count();
        let next_start = self.cursor_pos + newline + 1;
        let next_end = self.input[next_start..]
            .find('\n')
            .map_or(self.input.len(), |i| next_start + i);
        self.cursor_pos = Self::offset_at_column(&self.input, next_start, next_end, column);
    }

    /// Byte offset where the line containing `pos` begins
    fn line_start(&self, pos: usize) -> usize {
        self.input[..pos].rfind('\n').map_or(0, |i| i + 1)
    }

    fn offset_at_column(input: &str, start: usize, end: usize, column: usize) -> usize {
        input[start..end]
            .char_indices()
            .nth(column)
            .map_or(end, |(i, _)| start + i)
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    /// Lines the input box needs, between 1 and [`MAX_INPUT_LINES`]
    pub fn input_height(&self) -> u16 {
        let lines = self.input.split('\n').count() as u16;
        lines.clamp(1, MAX_INPUT_LINES)
    }

    /// Offset actually shown, with the bottom pin resolved
    pub fn effective_scroll(&self) -> u16 {
        self.scroll_offset.min(self.max_scroll)
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.effective_scroll().saturating_sub(1);
    }

    /// Scrolling back to the last line pins the view to the bottom again
    pub fn scroll_down(&mut self) {
        let next = self.effective_scroll().saturating_add(1);
        if next >= self.max_scroll {
            self.scroll_to_bottom();
        } else {
            self.scroll_offset = next;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Resolved against the content height during render
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = u16::MAX;
    }

    pub fn tick_loading(&mut self) {
        if self.is_responding() {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }

    /// Input is a command only when it starts with '/' and names a known
    /// command; anything else (e.g. "/etc/hosts") is sent as a message.
    pub fn is_command(&self) -> bool {
        self.input.starts_with('/')
            && !matches!(
                parse_command(&self.input),
                CommandResult::None | CommandResult::Unknown(_)
            )
    }

    pub fn get_command(&self) -> Option<&str> {
        if self.is_command() {
            self.input.trim_start_matches('/').split_whitespace().next()
        } else {
            None
        }
    }
}
