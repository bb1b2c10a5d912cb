//! Data feed adapter contracts.
//!
//! The core never talks to a backend SDK directly. Live data (auth state,
//! profile documents, announcement and product lists) arrives as push-based
//! snapshots behind these traits, and the core only ever consumes the latest
//! delivered snapshot. Adapters must deliver snapshots for a given
//! subscription in non-decreasing recency order; the core does not reorder
//! or deduplicate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity snapshot emitted by the auth feed. `None` on the wire means
/// signed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Backend user id.
    pub uid: String,
    /// Display name, if the identity provider has one.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Avatar URL, if any.
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Profile document fields the core cares about. All optional: the backing
/// document may be partially filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Role string as stored ("farmer", "user", "admin", ...).
    #[serde(default)]
    pub role: Option<String>,
}

/// One delivery from the profile feed.
///
/// `NotFound` is a tolerated transient state (the document may not exist yet
/// right after sign-up); it is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProfileEvent {
    Snapshot(ProfileSnapshot),
    NotFound,
}

/// Minimal record shape shared by announcement and product feeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedRecord {
    pub id: String,
    pub title: String,
    pub image_url: String,
}

/// Adapter-side failure surfaced to the core.
///
/// Permission-denied is special-cased: during the auth race window right
/// after sign-up/sign-in it is expected and silently tolerated (logged, not
/// surfaced). Everything else becomes a user-visible notice.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum FeedError {
    #[error("permission denied: {context}")]
    PermissionDenied { context: String },

    #[error("feed unavailable: {message}")]
    Unavailable { message: String },
}

impl FeedError {
    /// Creates a permission-denied error.
    pub fn permission_denied(context: impl Into<String>) -> Self {
        Self::PermissionDenied {
            context: context.into(),
        }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Check if this is the tolerated permission-denied case.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

/// RAII unsubscribe guard returned by every feed subscription.
///
/// Dropping the guard tears the subscription down; no deliveries happen
/// afterwards. Screens leaving must drop their guard before (or while)
/// transitioning away.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wraps a teardown closure.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A guard with nothing to tear down.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Tears the subscription down explicitly.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Callback invoked with each auth state change.
pub type AuthCallback = Box<dyn Fn(Option<AuthUser>) + Send + Sync>;

/// Callback invoked with each profile delivery.
pub type ProfileCallback = Box<dyn Fn(ProfileEvent) + Send + Sync>;

/// Callback invoked with each record list snapshot (ordered).
pub type RecordCallback = Box<dyn Fn(Vec<FeedRecord>) + Send + Sync>;

/// Auth-state change notifications.
///
/// Emits once on sign-in/out and whenever the underlying identity changes.
pub trait AuthFeed {
    fn on_change(&self, callback: AuthCallback) -> Subscription;
}

/// Live profile document feed for a single user.
///
/// Must tolerate a transient not-found state: the core defaults the role to
/// the lowest privilege instead of erroring.
pub trait ProfileFeed {
    fn subscribe(&self, user_id: &str, callback: ProfileCallback) -> Subscription;
}

/// Live record-list feed. Announcements and products share this shape; the
/// two backend collections are just two instances of the same contract.
pub trait RecordFeed {
    fn subscribe(&self, callback: RecordCallback) -> Subscription;
}

/// Local best-effort role cache, consulted for instant UI feedback before
/// the authoritative profile value arrives. A hint, never a source of truth:
/// the profile feed's value always overwrites it.
pub trait RoleCache {
    fn get(&self) -> Option<String>;
    fn set(&self, role: &str);
    fn clear(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_subscription_drops_run_teardown() {
        let torn_down = Arc::new(AtomicBool::new(false));
        let flag = torn_down.clone();
        {
            let _sub = Subscription::new(move || flag.store(true, Ordering::SeqCst));
        }
        assert!(torn_down.load(Ordering::SeqCst));
    }

    #[test]
    fn test_subscription_unsubscribe_runs_once() {
        let count = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = count.clone();
        let sub = Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        sub.unsubscribe();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_feed_error_discriminants() {
        assert!(FeedError::permission_denied("users/abc").is_permission_denied());
        assert!(!FeedError::unavailable("offline").is_permission_denied());
    }
}
