//! Application configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer; this module only
//! defines the shape and defaults.

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Role assumed when no stored role is found ("farmer").
    #[serde(default = "default_role")]
    pub default_role: String,
    /// Whether new chat sessions are seeded with the bot greeting.
    #[serde(default = "default_show_greeting")]
    pub show_greeting: bool,
}

fn default_role() -> String {
    "farmer".to_string()
}

fn default_show_greeting() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            show_greeting: default_show_greeting(),
        }
    }
}
