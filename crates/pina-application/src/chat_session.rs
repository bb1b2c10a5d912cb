//! The Pine-Bot chat use case.
//!
//! Wires the append-only chat log to the keyword responder. One value per
//! open chat screen; nothing is persisted when the screen is left.

use rand::Rng;

use pina_core::bot;
use pina_core::chat::{ChatLog, ChatMessage};
use pina_core::config::AppConfig;

/// A live chat with Pine-Bot.
pub struct ChatSession {
    log: ChatLog,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Opens a chat seeded with the bot greeting.
    pub fn new() -> Self {
        Self {
            log: ChatLog::new(),
        }
    }

    /// Opens a chat honoring the configured greeting toggle.
    pub fn with_config(config: &AppConfig) -> Self {
        let log = if config.show_greeting {
            ChatLog::new()
        } else {
            ChatLog::empty()
        };
        Self { log }
    }

    /// Sends a user message and returns the bot reply.
    ///
    /// Blank input is ignored (no message appended, no reply), matching the
    /// original send handler.
    pub fn send(&mut self, text: &str) -> Option<String> {
        self.send_with_rng(text, &mut rand::thread_rng())
    }

    /// Like [`Self::send`], drawing any fallback reply from the given RNG.
    pub fn send_with_rng<R: Rng + ?Sized>(&mut self, text: &str, rng: &mut R) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        self.log.push_user(text);
        let reply = bot::respond_with_rng(text, rng);
        self.log.push_bot(reply.clone());
        Some(reply)
    }

    /// Messages in display order.
    pub fn messages(&self) -> &[ChatMessage] {
        self.log.messages()
    }

    /// Canned prompts for the quick-reply buttons.
    pub fn quick_prompts() -> &'static [&'static str] {
        &bot::QUICK_PROMPTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pina_core::chat::GREETING;

    #[test]
    fn test_new_chat_opens_with_greeting() {
        let chat = ChatSession::new();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].text, GREETING);
    }

    #[test]
    fn test_send_appends_user_then_bot() {
        let mut chat = ChatSession::new();
        let reply = chat.send("what are the prices?").unwrap();
        let messages = chat.messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[1].from_user);
        assert!(!messages[2].from_user);
        assert_eq!(messages[2].text, reply);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut chat = ChatSession::new();
        assert_eq!(chat.send("   "), None);
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn test_greeting_toggle_respected() {
        let config = AppConfig {
            show_greeting: false,
            ..AppConfig::default()
        };
        let chat = ChatSession::with_config(&config);
        assert!(chat.messages().is_empty());
    }

    #[test]
    fn test_quick_prompts_resolve_to_their_advertised_tiers() {
        let expected = ["price", "location", "order", "contact"];
        for (prompt, tier) in ChatSession::quick_prompts().iter().zip(expected) {
            let rule = pina_core::bot::match_rule(prompt)
                .unwrap_or_else(|| panic!("quick prompt should hit a rule: {prompt}"));
            assert_eq!(rule.name, tier, "quick prompt mis-resolved: {prompt}");
        }
    }
}
