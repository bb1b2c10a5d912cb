//! Configuration service implementation.
//!
//! Loads the application configuration from `config.toml` under the pina
//! config directory, creating the file with defaults when missing. The
//! loaded value is cached to avoid repeated file I/O.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use pina_core::config::AppConfig;
use pina_core::error::Result;

/// Configuration service that loads and caches the app configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a service backed by the given file. The configuration is
    /// loaded lazily on first access.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service at the default platform location.
    pub fn at_default_path() -> Result<Self> {
        Ok(Self::new(crate::paths::PinaPaths::config_file()?))
    }

    /// Gets the configuration, loading from file if not cached. Load
    /// failures fall back to defaults (logged).
    pub fn get_config(&self) -> AppConfig {
        {
            let read_lock = self.config.read().expect("config lock poisoned");
            if let Some(cached) = read_lock.as_ref() {
                return cached.clone();
            }
        }

        let loaded = self.load_or_create().unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), %err, "falling back to default config");
            AppConfig::default()
        });

        let mut write_lock = self.config.write().expect("config lock poisoned");
        *write_lock = Some(loaded.clone());
        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().expect("config lock poisoned");
        *write_lock = None;
    }

    fn load_or_create(&self) -> Result<AppConfig> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(toml::from_str(&text)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let config = AppConfig::default();
                if let Some(parent) = self.path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&self.path, toml::to_string(&config)?)?;
                Ok(config)
            }
            Err(err) => Err(err.into()),
        }
    }
}
