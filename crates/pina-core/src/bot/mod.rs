//! Pine-Bot, the scripted FAQ responder.
//!
//! Maps free-text input to canned replies by ordered keyword matching (see
//! [`rules`]). Deterministic except for the fallback tier, which picks
//! uniformly at random from a fixed default pool — an intentional behavior
//! of the original bot, kept as-is.

mod rules;

pub use rules::{IntentRule, find_rule, rules};

use rand::Rng;

/// Fallback replies used when no rule matches. The pool is fixed and each
/// entry is reachable with equal probability.
pub const DEFAULT_RESPONSES: [&str; 4] = [
    "I'm here to help with pineapple farming queries! Try asking about prices, stock, or locations.",
    "Could you please rephrase your question about pineapple farming?",
    "I specialize in pineapple industry information. Ask me about prices, locations, or how to order!",
    "For detailed assistance, you can also contact our customer assistant at +07-236 1211.",
];

/// Canned prompts offered as quick-reply buttons in the chat UI. Worded so
/// each one resolves to the tier it advertises; the price tier's short "rm"
/// trigger makes phrases like "farm" ambiguous, so those words are avoided.
pub const QUICK_PROMPTS: [&str; 4] = [
    "What are the prices?",
    "Where are your locations?",
    "How to order?",
    "How can I contact you?",
];

/// Returns the first rule the message triggers, if any.
///
/// The only transformation applied to the input is lower-casing; substring
/// containment does the rest.
pub fn match_rule(message: &str) -> Option<&'static IntentRule> {
    let lower = message.to_lowercase();
    rules().iter().find(|rule| rule.matches(&lower))
}

/// Maps a message to a reply using the ambient RNG for the fallback tier.
pub fn respond(message: &str) -> String {
    respond_with_rng(message, &mut rand::thread_rng())
}

/// Maps a message to a reply, drawing the fallback (if needed) from the
/// given RNG. Deterministic whenever a rule matches.
pub fn respond_with_rng<R: Rng + ?Sized>(message: &str, rng: &mut R) -> String {
    match match_rule(message) {
        Some(rule) => rule.response.to_string(),
        None => {
            let index = rng.gen_range(0..DEFAULT_RESPONSES.len());
            DEFAULT_RESPONSES[index].to_string()
        }
    }
}
