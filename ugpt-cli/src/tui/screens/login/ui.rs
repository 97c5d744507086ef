//! Entry view rendering

use super::state::{Focus, LoginState};
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];
const FORM_WIDTH: u16 = 52;

pub struct LoginUI;

impl LoginUI {
    pub fn render(frame: &mut Frame, state: &mut LoginState) {
        let area = frame.area();

        let rows = Layout::vertical([
            Constraint::Length(3), // Brand
            Constraint::Min(18),   // Form
            Constraint::Length(1), // Key hints
            Constraint::Length(1), // Footer links
        ])
        .split(area);

        Self::render_brand(frame, rows[0]);
        let [form] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
            .flex(Flex::Center)
            .areas(rows[1]);
        Self::render_form(frame, form, state);
        Self::render_hints(frame, rows[2], state);
        Self::render_footer(frame, rows[3]);

        if let Some(message) = &state.alert {
            Self::render_alert(frame, area, message);
        }
    }

    fn render_brand(frame: &mut Frame, area: Rect) {
        let brand = Paragraph::new(vec![
            Line::from(Span::styled("ugpt", theme::title())),
            Line::from(Span::styled("Your personal AI assistant", theme::subtitle())),
        ]);
        frame.render_widget(brand, area.inner(ratatui::layout::Margin::new(2, 1)));
    }

    fn render_form(frame: &mut Frame, area: Rect, state: &mut LoginState) {
        let chunks = Layout::vertical([
            Constraint::Length(2), // Heading
            Constraint::Length(4), // Email field
            Constraint::Length(2), // Continue / status
            Constraint::Min(8),    // Options
        ])
        .split(area);

        let heading = Paragraph::new(Line::from(Span::styled("Welcome to ugpt", theme::title())))
            .alignment(Alignment::Center);
        frame.render_widget(heading, chunks[0]);

        state
            .email
            .render(frame, chunks[1], state.focus == Focus::Email && !state.is_signing_in());

        let status = if state.is_signing_in() {
            Line::from(Span::styled(
                format!("{} Signing in...", SPINNER[state.loading_frame]),
                theme::loading(),
            ))
        } else {
            Line::from(vec![
                Span::styled("[ Continue ]", theme::border_active()),
                Span::styled("  press Enter", theme::footer()),
            ])
        };
        frame.render_widget(
            Paragraph::new(status).alignment(Alignment::Center),
            chunks[2],
        );

        let options_focused = state.focus == Focus::Options && !state.is_signing_in();
        state.options.render(frame, chunks[3], options_focused);
    }

    fn render_hints(frame: &mut Frame, area: Rect, state: &LoginState) {
        let hints = if state.is_signing_in() {
            Line::from(Span::styled(" Please wait ", theme::loading()))
        } else {
            Line::from(vec![
                Span::styled(" Tab", theme::key_hint()),
                Span::raw(": Switch focus │ "),
                Span::styled("Enter", theme::key_hint()),
                Span::raw(": Continue │ "),
                Span::styled("Ctrl+Q", theme::key_destructive()),
                Span::raw(": Quit "),
            ])
        };
        frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), area);
    }

    fn render_footer(frame: &mut Frame, area: Rect) {
        let footer = Line::from(vec![
            Span::styled("Terms of Use", theme::link()),
            Span::styled(" | ", theme::footer()),
            Span::styled("Privacy Policy", theme::link()),
        ]);
        frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), area);
    }

    fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
        let [popup] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([Constraint::Length(6)])
            .flex(Flex::Center)
            .areas(popup);

        let body = Paragraph::new(vec![
            Line::from(Span::styled(message.to_string(), theme::alert())),
            Line::from(""),
            Line::from(Span::styled("Press any key", theme::footer())),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Alert ")
                .border_style(theme::alert()),
        );

        frame.render_widget(Clear, popup);
        frame.render_widget(body, popup);
    }
}
