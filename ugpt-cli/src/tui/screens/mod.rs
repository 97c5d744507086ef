//! The two views of the app

pub mod chat;
pub mod login;

pub use chat::run_chat;
pub use login::run_login;
