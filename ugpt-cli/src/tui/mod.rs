//! Terminal user interface built on ratatui
//!
//! Full-screen login and chat views with client-side routing between them.

mod app;
pub mod screens;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use app::{Route, ScreenOutcome, run_app};
pub use terminal::{Tui, restore_terminal};
pub use widgets::{Menu, MenuItem, TextInput};
