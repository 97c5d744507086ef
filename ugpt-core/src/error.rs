use thiserror::Error;

/// Errors raised by the entry view's sign-in action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),
    #[error("a sign-in is already in progress")]
    InProgress,
}

impl LoginError {
    pub fn user_message(&self) -> String {
        match self {
            LoginError::InvalidEmail(_) => "Please enter a valid email address".to_string(),
            LoginError::InProgress => "Already signing in, please wait.".to_string(),
        }
    }
}

/// Reasons a chat message cannot be sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("message is empty")]
    EmptyInput,
    #[error("a reply is still pending")]
    ReplyPending,
}

impl SendError {
    pub fn user_message(&self) -> String {
        match self {
            SendError::EmptyInput => "Type a message first.".to_string(),
            SendError::ReplyPending => "ugpt is still replying...".to_string(),
        }
    }
}
