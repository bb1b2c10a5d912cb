//! The ordered intent rule table for Pine-Bot.
//!
//! Rules are evaluated top to bottom against the lower-cased message; a rule
//! matches when the message contains ANY of its pattern substrings and NONE
//! of its exclusion substrings. First match wins. The table is loaded once
//! at startup and immutable thereafter.

use std::sync::OnceLock;

use serde::Serialize;

/// A pattern-to-response mapping used by the FAQ responder.
#[derive(Debug, Clone, Serialize)]
pub struct IntentRule {
    /// Stable tier name, for logging and tests.
    pub name: &'static str,
    /// Lower-cased substrings; any one of them matching triggers the rule.
    pub patterns: &'static [&'static str],
    /// Lower-cased substrings that veto the rule even when a pattern hits.
    pub exclusions: &'static [&'static str],
    /// Canned reply.
    pub response: &'static str,
}

impl IntentRule {
    /// True when the lower-cased message triggers this rule.
    pub fn matches(&self, lower: &str) -> bool {
        self.patterns.iter().any(|p| lower.contains(p))
            && !self.exclusions.iter().any(|e| lower.contains(e))
    }
}

/// The product tiers step aside when the message names one of these topics
/// outright, so the broader list reply answers instead. Deliberately narrow:
/// softer price words like "much" do not veto a product match.
const PRODUCT_EXCLUSIONS: &[&str] = &["price", "harga", "stock", "stok", "location", "lokasi"];

static RULES: OnceLock<Vec<IntentRule>> = OnceLock::new();

/// Returns the ordered rule table, initialized on first access.
pub fn rules() -> &'static [IntentRule] {
    RULES.get_or_init(|| {
        vec![
            IntentRule {
                name: "greeting",
                patterns: &[
                    "hi",
                    "hello",
                    "hey",
                    "greetings",
                    "morning",
                    "afternoon",
                    "evening",
                ],
                exclusions: &[],
                response: "Hello! I'm Pine-Bot. Ask me about prices, stock, farm locations, or how to order pineapple products.",
            },
            IntentRule {
                name: "product_mature_fruit",
                patterns: &["nenas", "pineapple", "dewasa", "fruit"],
                exclusions: PRODUCT_EXCLUSIONS,
                response: "Nenas Dewasa is RM200/pack and 87 packs are currently available.",
            },
            IntentRule {
                name: "product_seedling",
                patterns: &["anak", "pokok", "seed", "benih"],
                exclusions: PRODUCT_EXCLUSIONS,
                response: "Anak Pokok is RM27/pack and 15 packs are currently available.",
            },
            IntentRule {
                name: "product_fertilizer",
                patterns: &["baja", "beja", "fertilizer"],
                exclusions: PRODUCT_EXCLUSIONS,
                response: "Baja Nanas is RM85/pack and 15 packs are currently available.",
            },
            IntentRule {
                name: "price",
                patterns: &["pric", "cost", "harga", "pay", "rm", "much"],
                exclusions: &[],
                response: "Current pineapple prices:\n- Nenas Dewasa: RM200/pack\n- Anak Pokok: RM27/pack\n- Pess Nanas: RM27/pack\n- Baja Nanas: RM85/pack",
            },
            IntentRule {
                name: "stock",
                patterns: &["stock", "stok", "avail", "left", "quant"],
                exclusions: &[],
                response: "Current stock availability:\n- Nenas Dewasa: 87 packs\n- Anak Pokok: 15 packs\n- Pess Nanas: 15 packs\n- Baja Nanas: 15 packs",
            },
            IntentRule {
                name: "location",
                patterns: &["locat", "lokasi", "where", "place", "addr", "map"],
                exclusions: &[],
                response: "Our farm locations:\n1. Alor Gajah (Wanted Pertanian)\n2. Sekinchan (Training/Pelatih)\n3. Air Keruh\n4. Sungai Besi",
            },
            IntentRule {
                name: "contact",
                patterns: &["contact", "hubungi", "call", "phone", "email", "num"],
                exclusions: &[],
                response: "You can contact:\n- Customer Assistant: +07-236 1211\n- Email: umum@mpib.gov.my\n- Office: Wisma Nanas, Johor Bahru",
            },
            IntentRule {
                name: "help",
                patterns: &["help", "bantuan", "supp", "assist"],
                exclusions: &[],
                response: "I can help with:\n- Price information\n- Stock availability\n- Farm locations\n- Contact details\n- Planting guidance\n- Order inquiries",
            },
            IntentRule {
                name: "order",
                patterns: &["order", "pesan", "buy", "purch", "get", "want"],
                exclusions: &[],
                response: "To order pineapple products:\n1. Go to \"New Sale\" section\n2. Select product\n3. Check availability with Pincode\n4. Click \"Order Now\"",
            },
            IntentRule {
                name: "discount",
                patterns: &["disc", "diskaun", "promo", "offer", "sale"],
                exclusions: &[],
                response: "Current promotion:\n- Nenas Dewasa: 40% discount for bulk purchase\n- Limited time offer!",
            },
            IntentRule {
                name: "about",
                patterns: &["about", "tentang", "who", "what"],
                exclusions: &[],
                response: "Lembaga Perindustrian Nanas Malaysia (LPNM) is a statutory body that develops the pineapple industry in Malaysia through coordination of planting, processing, marketing, and export.",
            },
        ]
    })
}

/// Find a rule by tier name.
pub fn find_rule(name: &str) -> Option<&'static IntentRule> {
    rules().iter().find(|rule| rule.name == name)
}
