//! Chat message types and the append-only chat log.
//!
//! The log lives only for the lifetime of a chat session; nothing is
//! persisted. Ids are unique and monotonic by creation order, and insertion
//! order is display order.

use serde::{Deserialize, Serialize};

/// Greeting the bot shows when a chat opens.
pub const GREETING: &str =
    "Hello! I'm Pine-Bot. How can I help you with pineapple farming today?";

/// A single message in a chat conversation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique id, monotonic by creation order.
    pub id: String,
    /// Message body.
    pub text: String,
    /// True when the user sent it, false for the bot.
    pub from_user: bool,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

/// Append-only, ordered chat log seeded with the bot greeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    /// Creates a log containing the greeting as the first bot message.
    pub fn new() -> Self {
        let mut log = Self::empty();
        log.push_bot(GREETING);
        log
    }

    /// Creates an empty log (no greeting).
    pub fn empty() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a user message and returns it.
    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(text.into(), true)
    }

    /// Appends a bot message and returns it.
    pub fn push_bot(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(text.into(), false)
    }

    fn push(&mut self, text: String, from_user: bool) -> &ChatMessage {
        let message = ChatMessage {
            id: self.next_id.to_string(),
            text,
            from_user,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        self.next_id += 1;
        self.messages.push(message);
        self.messages.last().expect("message just pushed")
    }

    /// All messages in display (insertion) order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages in the log.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
