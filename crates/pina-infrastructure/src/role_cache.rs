//! Role cache implementations.
//!
//! The cache is a hint for instant UI feedback before the authoritative
//! profile value arrives; it is best-effort on both reads and writes.
//! Failures degrade to "no hint" and are logged, never surfaced.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use pina_core::feed::RoleCache;

/// Process-local role cache.
#[derive(Clone, Default)]
pub struct MemoryRoleCache {
    role: Arc<Mutex<Option<String>>>,
}

impl MemoryRoleCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoleCache for MemoryRoleCache {
    fn get(&self) -> Option<String> {
        self.role.lock().expect("role cache lock poisoned").clone()
    }

    fn set(&self, role: &str) {
        *self.role.lock().expect("role cache lock poisoned") = Some(role.to_string());
    }

    fn clear(&self) {
        *self.role.lock().expect("role cache lock poisoned") = None;
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CachedRole {
    role: String,
}

/// File-backed role cache stored as TOML under the config directory.
///
/// Survives app restarts so the first frame after launch can show the right
/// menu before any feed delivers.
#[derive(Clone)]
pub struct TomlRoleCache {
    path: PathBuf,
}

impl TomlRoleCache {
    /// Creates a cache backed by the given file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a cache at the default platform location.
    pub fn at_default_path() -> pina_core::Result<Self> {
        Ok(Self::new(crate::paths::PinaPaths::role_cache_file()?))
    }
}

impl RoleCache for TomlRoleCache {
    fn get(&self) -> Option<String> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "failed to read role cache");
                return None;
            }
        };
        match toml::from_str::<CachedRole>(&text) {
            Ok(cached) => Some(cached.role),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "malformed role cache");
                None
            }
        }
    }

    fn set(&self, role: &str) {
        let cached = CachedRole {
            role: role.to_string(),
        };
        let text = match toml::to_string(&cached) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(%err, "failed to serialize role cache");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), %err, "failed to create cache dir");
                return;
            }
        }
        if let Err(err) = std::fs::write(&self.path, text) {
            tracing::warn!(path = %self.path.display(), %err, "failed to write role cache");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "failed to clear role cache");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_cache_set_get_clear() {
        let cache = MemoryRoleCache::new();
        assert_eq!(cache.get(), None);
        cache.set("admin");
        assert_eq!(cache.get(), Some("admin".to_string()));
        cache.clear();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_toml_cache_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TomlRoleCache::new(dir.path().join("role_cache.toml"));
        assert_eq!(cache.get(), None);
        cache.set("farmer");
        assert_eq!(cache.get(), Some("farmer".to_string()));
        cache.clear();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_toml_cache_tolerates_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("role_cache.toml");
        std::fs::write(&path, "not really toml [[").unwrap();
        let cache = TomlRoleCache::new(path);
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_toml_cache_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TomlRoleCache::new(dir.path().join("role_cache.toml"));
        cache.clear();
        cache.clear();
        assert_eq!(cache.get(), None);
    }
}
