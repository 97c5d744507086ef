//! Conversation view model
//!
//! Records user messages, picks the simulated reply and its latency, and
//! tracks whether a reply is pending. Delivering the reply is the caller's
//! job (see [`crate::delivery::Delayed`]); [`ChatSession::deliver`] refuses
//! replies that belong to a conversation that has since been reset.

use crate::config::AppConfig;
use crate::conversation::{Conversation, ConversationId, Message};
use crate::delivery::DelayRange;
use crate::error::SendError;
use crate::responder::ResponseSelector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info, warn};

/// A reply chosen for a submitted message, waiting for its delay to elapse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReply {
    pub conversation_id: ConversationId,
    pub content: String,
    pub delay: Duration,
}

pub struct ChatSession<R = StdRng> {
    conversation: Conversation,
    selector: ResponseSelector,
    reply_delay: DelayRange,
    responding: bool,
    rng: R,
}

impl ChatSession<StdRng> {
    /// Build a session from configuration, seeding the random source from
    /// `config.seed` when set.
    pub fn from_config(config: &AppConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config.reply_delay, rng)
    }
}

impl<R: Rng> ChatSession<R> {
    pub fn with_rng(reply_delay: DelayRange, rng: R) -> Self {
        Self {
            conversation: Conversation::new(),
            selector: ResponseSelector::new(),
            reply_delay,
            responding: false,
            rng,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn conversation_id(&self) -> ConversationId {
        self.conversation.id()
    }

    /// True between a submitted message and its delivered reply
    pub fn is_responding(&self) -> bool {
        self.responding
    }

    pub fn can_send(&self, input: &str) -> bool {
        !input.trim().is_empty() && !self.responding
    }

    /// Record the user's message and choose the reply to deliver later.
    pub fn submit(&mut self, text: &str) -> Result<ScheduledReply, SendError> {
        if text.trim().is_empty() {
            return Err(SendError::EmptyInput);
        }
        if self.responding {
            return Err(SendError::ReplyPending);
        }

        self.conversation.push(Message::user(text));
        let content = self.selector.select(text, &mut self.rng).to_string();
        let delay = self.reply_delay.sample(&mut self.rng);
        self.responding = true;

        info!(
            conversation = %self.conversation.id(),
            delay_ms = delay.as_millis() as u64,
            "User message recorded, reply scheduled"
        );

        Ok(ScheduledReply {
            conversation_id: self.conversation.id(),
            content,
            delay,
        })
    }

    /// Append a scheduled reply. Returns the new message, or `None` when the
    /// reply is stale (conversation reset) or nothing was pending.
    pub fn deliver(&mut self, reply: ScheduledReply) -> Option<&Message> {
        if reply.conversation_id != self.conversation.id() {
            warn!(
                reply_conversation = %reply.conversation_id,
                current = %self.conversation.id(),
                "Dropping reply for a previous conversation"
            );
            return None;
        }
        if !self.responding {
            warn!("Dropping reply with nothing pending");
            return None;
        }

        self.responding = false;
        debug!(conversation = %self.conversation.id(), "Reply delivered");
        Some(self.conversation.push(Message::assistant(reply.content)))
    }

    /// Replace the conversation with a fresh one holding only the greeting.
    pub fn new_conversation(&mut self) {
        let previous = self.conversation.id();
        self.conversation = Conversation::new();
        self.responding = false;
        info!(
            previous = %previous,
            current = %self.conversation.id(),
            "Started new conversation"
        );
    }
}
