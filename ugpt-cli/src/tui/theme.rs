//! Colour palette and styles shared by the login and chat screens

use ratatui::style::{Color, Modifier, Style};

/// Primary accent - soft cyan blue
pub const ACCENT: Color = Color::Rgb(100, 180, 220);

/// Warm amber for pending states
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);

/// Soft green, used for the assistant
pub const SUCCESS: Color = Color::Rgb(130, 200, 130);

/// Soft red for alerts
pub const ERROR: Color = Color::Rgb(220, 100, 100);

/// Secondary information
pub const MUTED: Color = Color::Rgb(100, 100, 110);

pub const BORDER: Color = Color::Rgb(70, 75, 85);

pub const SELECTED_BG: Color = Color::Rgb(50, 60, 80);

pub const SIDEBAR_BG: Color = Color::Rgb(24, 26, 32);

/// Brand / heading style
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn subtitle() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn placeholder() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
}

/// Highlighted/selected item style
pub fn selected() -> Style {
    Style::default()
        .bg(SELECTED_BG)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

pub fn footer() -> Style {
    Style::default().fg(MUTED)
}

/// Link-like footer entries (Terms of Use, Privacy Policy)
pub fn link() -> Style {
    Style::default()
        .fg(Color::Rgb(20, 140, 190))
        .add_modifier(Modifier::UNDERLINED)
}

pub fn loading() -> Style {
    Style::default().fg(HIGHLIGHT)
}

/// Avatar badge for the user's messages
pub fn user_avatar() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Avatar badge for the assistant's messages
pub fn assistant_avatar() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(SUCCESS)
        .add_modifier(Modifier::BOLD)
}

pub fn timestamp() -> Style {
    Style::default().fg(MUTED)
}

pub fn sidebar() -> Style {
    Style::default().bg(SIDEBAR_BG).fg(Color::White)
}

pub fn alert() -> Style {
    Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
}

pub fn key_hint() -> Style {
    Style::default().fg(SUCCESS)
}

/// Key hint for an action that is currently unavailable
pub fn key_disabled() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::CROSSED_OUT)
}

pub fn key_destructive() -> Style {
    Style::default().fg(ERROR)
}
