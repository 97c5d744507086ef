//! Domain layer of the ugpt chat demo
//!
//! There is no backend: replies come from [`responder::ResponseSelector`],
//! delayed by [`delivery::Delayed`] to imitate latency, and sign-in is a
//! validation check plus a fixed delay.

pub mod config;
pub mod conversation;
pub mod delivery;
pub mod error;
pub mod login;
pub mod responder;
pub mod session;

pub use config::{AppConfig, ConfigError};
pub use conversation::{Conversation, ConversationId, INITIAL_GREETING, Message, Role};
pub use delivery::{DelayRange, Delayed};
pub use error::{LoginError, SendError};
pub use login::{AuthProvider, LoginFlow, LoginMethod, validate_email};
pub use responder::ResponseSelector;
pub use session::{ChatSession, ScheduledReply};
