//! Unified path management for pina configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/pina/              # Config directory
//! ├── config.toml              # Application configuration
//! └── role_cache.toml          # Best-effort cached role hint
//! ```

use std::path::PathBuf;

use pina_core::error::{PinaError, Result};

/// Unified path management for pina.
pub struct PinaPaths;

impl PinaPaths {
    /// Returns the pina configuration directory (e.g. `~/.config/pina/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("pina"))
            .ok_or_else(|| PinaError::config("Cannot find config directory"))
    }

    /// Path of the application configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Path of the role cache file.
    pub fn role_cache_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("role_cache.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_under_config_dir() {
        let dir = PinaPaths::config_dir().unwrap();
        let file = PinaPaths::config_file().unwrap();
        assert!(file.starts_with(&dir));
        assert_eq!(file.file_name().unwrap(), "config.toml");
    }
}
