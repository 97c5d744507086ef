//! Reusable TUI widgets
//!
//! - [`Menu`] - selectable list used for the login options
//! - [`MenuItem`] - menu entry with an optional detail line
//! - [`TextInput`] - single-line text field with cursor

mod menu;
mod text_input;

pub use menu::{Menu, MenuItem};
pub use text_input::TextInput;
