//! Simulated assistant replies
//!
//! Replies are picked by matching lowercase substrings of the user's text
//! against a fixed, ordered rule table. The first matching rule wins; when no
//! rule matches, a generic acknowledgement is drawn from the fallback set.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Reply attached to a keyword rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Always the same string
    Fixed(&'static str),
    /// One candidate drawn uniformly at random
    OneOf(&'static [&'static str]),
}

impl Reply {
    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        match self {
            Reply::Fixed(text) => *text,
            Reply::OneOf(candidates) => pick_uniform(*candidates, rng),
        }
    }

    /// All strings this reply can produce
    pub fn candidates(&self) -> &[&'static str] {
        match self {
            Reply::Fixed(text) => std::slice::from_ref(text),
            Reply::OneOf(candidates) => candidates,
        }
    }
}

/// A set of lowercase substrings mapped to a reply
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: Reply,
}

impl KeywordRule {
    /// `lowered` must already be lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

pub const GREETING_REPLY: &str = "Hello! How can I assist you today?";
pub const HELP_REPLY: &str =
    "I'm here to help! You can ask me questions, request information, or just chat.";
pub const NAME_REPLY: &str = "I'm ugpt, your friendly AI assistant.";
pub const WEATHER_REPLY: &str = "I don't have real-time access to weather data, but I can help you find weather information if you tell me your location.";

pub const JOKES: &[&str] = &[
    "Why did the AI go to art school? To learn how to draw conclusions!",
    "What do you call an AI that sings? Artificial Harmonies!",
    "Why did the chatbot go to therapy? It had too many interface issues!",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem!",
];

pub const FALLBACK_REPLIES: &[&str] = &[
    "That's an interesting point. Can you tell me more about it?",
    "I understand. What else would you like to know?",
    "I'm thinking about what you said. Is there anything specific you're looking for?",
    "Let me process that. Is there something specific you'd like me to help with?",
    "I'm here to assist you with that. What kind of information would be most helpful?",
];

/// Rules in priority order: greeting, help, name, weather, joke.
pub const RULES: &[KeywordRule] = &[
    KeywordRule {
        name: "greeting",
        keywords: &["hello", "hi"],
        reply: Reply::Fixed(GREETING_REPLY),
    },
    KeywordRule {
        name: "help",
        keywords: &["help"],
        reply: Reply::Fixed(HELP_REPLY),
    },
    KeywordRule {
        name: "name",
        keywords: &["name"],
        reply: Reply::Fixed(NAME_REPLY),
    },
    KeywordRule {
        name: "weather",
        keywords: &["weather"],
        reply: Reply::Fixed(WEATHER_REPLY),
    },
    KeywordRule {
        name: "joke",
        keywords: &["joke"],
        reply: Reply::OneOf(JOKES),
    },
];

/// Picks canned replies for user input
#[derive(Debug, Clone, Copy)]
pub struct ResponseSelector {
    rules: &'static [KeywordRule],
    fallback: &'static [&'static str],
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSelector {
    pub const fn new() -> Self {
        Self {
            rules: RULES,
            fallback: FALLBACK_REPLIES,
        }
    }

    /// The first rule matching `input`, if any
    pub fn matching_rule(&self, input: &str) -> Option<&'static KeywordRule> {
        let lowered = input.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    /// Select a reply for `input`, drawing from `rng` when the matched rule
    /// (or the fallback) has several candidates.
    pub fn select<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> &'static str {
        match self.matching_rule(input) {
            Some(rule) => {
                debug!(rule = rule.name, "Keyword rule matched");
                rule.reply.pick(rng)
            }
            None => {
                debug!("No keyword rule matched, using fallback");
                pick_uniform(self.fallback, rng)
            }
        }
    }

    pub fn fallback(&self) -> &'static [&'static str] {
        self.fallback
    }
}

fn pick_uniform<R: Rng + ?Sized>(candidates: &'static [&'static str], rng: &mut R) -> &'static str {
    candidates.choose(rng).copied().unwrap_or_default()
}
