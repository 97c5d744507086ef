//! Conversation view rendering

use super::state::ChatState;
use crate::tui::theme;
use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ugpt_core::{Message, Role};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];
const SIDEBAR_WIDTH: u16 = 26;
const PLACEHOLDER: &str = "Message ugpt...";

pub struct ChatUI;

impl ChatUI {
    pub fn render(frame: &mut Frame, state: &mut ChatState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(frame.area());

        Self::render_sidebar(frame, columns[0], state);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),                         // Status bar
                Constraint::Min(5),                            // Messages
                Constraint::Length(state.input_height() + 2), // Input
                Constraint::Length(1),                         // Help bar
            ])
            .split(columns[1]);

        Self::render_status_bar(frame, rows[0], state);
        Self::render_messages(frame, rows[1], state);
        Self::render_input(frame, rows[2], state);
        Self::render_help_bar(frame, rows[3], state);
    }

    fn render_sidebar(frame: &mut Frame, area: Rect, state: &ChatState) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // New chat
            Constraint::Min(3),    // History
            Constraint::Length(4), // User + logout
        ])
        .split(area);

        frame.render_widget(Block::default().style(theme::sidebar()), area);

        let new_chat = Paragraph::new(Line::from(vec![
            Span::styled("+ ", theme::key_hint()),
            Span::raw("New chat"),
            Span::styled("  ^N", theme::footer()),
        ]))
        .style(theme::sidebar())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border()),
        );
        frame.render_widget(new_chat, chunks[0]);

        // Only the current chat is real; the others are placeholders
        let history = Paragraph::new(vec![
            Line::from(Span::styled(" Current Chat", theme::selected())),
            Line::from(Span::styled(" Previous Chat 1", theme::subtitle())),
            Line::from(Span::styled(" Previous Chat 2", theme::subtitle())),
        ])
        .style(theme::sidebar());
        frame.render_widget(history, chunks[1].inner(ratatui::layout::Margin::new(0, 1)));

        let user = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(" U ", theme::user_avatar()),
                Span::raw(" "),
                Span::raw(state.user.clone()),
            ]),
            Line::from(vec![
                Span::styled("Logout", theme::key_destructive()),
                Span::styled("  ^L", theme::footer()),
            ]),
        ])
        .style(theme::sidebar())
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme::border()),
        );
        frame.render_widget(user, chunks[2]);
    }

    fn render_status_bar(frame: &mut Frame, area: Rect, state: &ChatState) {
        let conversation = state.session.conversation_id().to_string();
        let short_id: String = conversation.chars().take(8).collect();

        let mut spans = vec![
            Span::styled(" ugpt ", theme::title()),
            Span::styled("│ ", theme::border()),
            Span::styled(format!("Chat {short_id} "), theme::subtitle()),
        ];
        if state.is_responding() {
            spans.push(Span::styled(
                format!(" {} ", SPINNER[state.loading_frame]),
                theme::loading(),
            ));
        }
        if let Some(status) = &state.status_message {
            spans.push(Span::styled(format!("│ {status} "), theme::footer()));
        }

        let para = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme::border()),
        );
        frame.render_widget(para, area);
    }

    fn message_lines(message: &Message) -> Vec<Line<'static>> {
        let (avatar, avatar_style, name) = match message.role() {
            Role::Assistant => (" U ", theme::assistant_avatar(), "ugpt"),
            Role::User => (" Y ", theme::user_avatar(), "You"),
        };
        let time = message
            .timestamp()
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string();

        let mut lines = vec![Line::from(vec![
            Span::styled(avatar, avatar_style),
            Span::raw(" "),
            Span::styled(name, theme::text()),
            Span::styled(format!("  {time}"), theme::timestamp()),
        ])];
        lines.extend(
            message
                .content()
                .split('\n')
                .map(|line| Line::from(format!("    {line}"))),
        );
        lines.push(Line::from(""));
        lines
    }

    fn render_messages(frame: &mut Frame, area: Rect, state: &mut ChatState) {
        let area = area.inner(ratatui::layout::Margin::new(1, 0));
        let inner_height = area.height as usize;
        let width = usize::from(area.width.max(1));

        let mut lines: Vec<Line> = state.messages().iter().flat_map(Self::message_lines).collect();

        if state.is_responding() {
            lines.push(Line::from(vec![
                Span::styled(" U ", theme::assistant_avatar()),
                Span::styled(
                    format!(" {} ugpt is typing...", SPINNER[state.loading_frame]),
                    theme::loading(),
                ),
            ]));
        }

        // Rows after wrapping, approximated by display width
        let rows: usize = lines
            .iter()
            .map(|line| line.width().div_ceil(width).max(1))
            .sum();
        let max_scroll = rows.saturating_sub(inner_height);
        state.max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX - 1);
        let scroll = state.effective_scroll();

        let para = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(para, area);
    }

    fn render_input(frame: &mut Frame, area: Rect, state: &ChatState) {
        let lines: Vec<Line> = if state.input.is_empty() {
            vec![Line::from(Span::styled(PLACEHOLDER, theme::placeholder()))]
        } else {
            let (before, after) = state.input.split_at(state.cursor_pos);
            let with_cursor = format!("{before}▏{after}");
            with_cursor
                .split('\n')
                .map(|line| Line::from(Span::styled(line.to_string(), theme::text())))
                .collect()
        };

        // Keep the cursor line visible once the box stops growing
        let cursor_line = state.input[..state.cursor_pos].matches('\n').count() as u16;
        let visible = state.input_height();
        let scroll = cursor_line.saturating_sub(visible.saturating_sub(1));

        let send_label = if state.can_send() {
            Span::styled(" Send ⏎ ", theme::key_hint())
        } else {
            Span::styled(" Send ⏎ ", theme::key_disabled())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if state.is_responding() {
                theme::border()
            } else {
                theme::border_active()
            })
            .title(if state.is_command() {
                " Command "
            } else {
                " Message "
            })
            .title_bottom(Line::from(send_label).right_aligned());

        let para = Paragraph::new(lines).block(block).scroll((scroll, 0));
        frame.render_widget(para, area);
    }

    fn render_help_bar(frame: &mut Frame, area: Rect, state: &ChatState) {
        let send_style = if state.can_send() {
            theme::key_hint()
        } else {
            theme::key_disabled()
        };
        let help = Line::from(vec![
            Span::styled(" Enter", send_style),
            Span::raw(": Send │ "),
            Span::styled("Shift+Enter", theme::key_hint()),
            Span::raw(": New line │ "),
            Span::styled("PageUp/Down", theme::key_hint()),
            Span::raw(": Scroll │ "),
            Span::styled("/help", theme::key_hint()),
            Span::raw(": Commands │ "),
            Span::styled("Ctrl+Q", theme::key_destructive()),
            Span::raw(": Quit "),
        ]);
        frame.render_widget(Paragraph::new(help), area);
    }
}
