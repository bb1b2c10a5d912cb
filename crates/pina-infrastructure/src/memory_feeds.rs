//! In-memory feed implementations.
//!
//! These back the adapter contracts with a locked subscriber registry. All
//! emissions happen on the emitter's thread while holding the registry lock,
//! which gives each subscription the required non-decreasing recency order
//! for free: there is a single serialized delivery path.
//!
//! Subscribing delivers the latest retained snapshot immediately (when one
//! exists), matching the snapshot-listener semantics of the hosted backend
//! the real app talks to.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use pina_core::feed::{
    AuthCallback, AuthFeed, AuthUser, FeedRecord, ProfileCallback, ProfileEvent, ProfileFeed,
    RecordCallback, RecordFeed, Subscription,
};

struct AuthState {
    latest: Option<Option<AuthUser>>,
    subscribers: HashMap<Uuid, AuthCallback>,
}

/// In-memory [`AuthFeed`] with a programmatic emitter.
#[derive(Clone)]
pub struct MemoryAuthFeed {
    state: Arc<Mutex<AuthState>>,
}

impl Default for MemoryAuthFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAuthFeed {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AuthState {
                latest: None,
                subscribers: HashMap::new(),
            })),
        }
    }

    /// Emits an auth state change to every live subscriber, in order.
    pub fn emit(&self, user: Option<AuthUser>) {
        let mut state = self.state.lock().expect("auth feed lock poisoned");
        state.latest = Some(user.clone());
        for callback in state.subscribers.values() {
            callback(user.clone());
        }
    }
}

impl AuthFeed for MemoryAuthFeed {
    fn on_change(&self, callback: AuthCallback) -> Subscription {
        let id = Uuid::new_v4();
        {
            let mut state = self.state.lock().expect("auth feed lock poisoned");
            if let Some(latest) = &state.latest {
                callback(latest.clone());
            }
            state.subscribers.insert(id, callback);
        }
        let state = self.state.clone();
        Subscription::new(move || {
            if let Ok(mut state) = state.lock() {
                state.subscribers.remove(&id);
            }
        })
    }
}

struct ProfileState {
    latest: HashMap<String, ProfileEvent>,
    subscribers: HashMap<Uuid, (String, ProfileCallback)>,
}

/// In-memory [`ProfileFeed`] keyed by user id.
#[derive(Clone)]
pub struct MemoryProfileFeed {
    state: Arc<Mutex<ProfileState>>,
}

impl Default for MemoryProfileFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProfileFeed {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ProfileState {
                latest: HashMap::new(),
                subscribers: HashMap::new(),
            })),
        }
    }

    /// Emits a profile event for one user to that user's subscribers.
    pub fn emit(&self, user_id: &str, event: ProfileEvent) {
        let mut state = self.state.lock().expect("profile feed lock poisoned");
        state.latest.insert(user_id.to_string(), event.clone());
        for (subscribed_id, callback) in state.subscribers.values() {
            if subscribed_id == user_id {
                callback(event.clone());
            }
        }
    }
}

impl ProfileFeed for MemoryProfileFeed {
    fn subscribe(&self, user_id: &str, callback: ProfileCallback) -> Subscription {
        let id = Uuid::new_v4();
        {
            let mut state = self.state.lock().expect("profile feed lock poisoned");
            if let Some(latest) = state.latest.get(user_id) {
                callback(latest.clone());
            }
            state
                .subscribers
                .insert(id, (user_id.to_string(), callback));
        }
        let state = self.state.clone();
        Subscription::new(move || {
            if let Ok(mut state) = state.lock() {
                state.subscribers.remove(&id);
            }
        })
    }
}

struct RecordState {
    latest: Option<Vec<FeedRecord>>,
    subscribers: HashMap<Uuid, RecordCallback>,
}

/// In-memory [`RecordFeed`]. Instantiate one per backend collection
/// (announcements, products).
#[derive(Clone)]
pub struct MemoryRecordFeed {
    state: Arc<Mutex<RecordState>>,
}

impl Default for MemoryRecordFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRecordFeed {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(RecordState {
                latest: None,
                subscribers: HashMap::new(),
            })),
        }
    }

    /// Emits a full snapshot of the record list.
    pub fn emit(&self, records: Vec<FeedRecord>) {
        let mut state = self.state.lock().expect("record feed lock poisoned");
        state.latest = Some(records.clone());
        for callback in state.subscribers.values() {
            callback(records.clone());
        }
    }
}

impl RecordFeed for MemoryRecordFeed {
    fn subscribe(&self, callback: RecordCallback) -> Subscription {
        let id = Uuid::new_v4();
        {
            let mut state = self.state.lock().expect("record feed lock poisoned");
            if let Some(latest) = &state.latest {
                callback(latest.clone());
            }
            state.subscribers.insert(id, callback);
        }
        let state = self.state.clone();
        Subscription::new(move || {
            if let Ok(mut state) = state.lock() {
                state.subscribers.remove(&id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pina_core::feed::ProfileSnapshot;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn record(id: &str) -> FeedRecord {
        FeedRecord {
            id: id.to_string(),
            title: format!("title {id}"),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_auth_feed_delivers_to_subscriber() {
        let feed = MemoryAuthFeed::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = feed.on_change(Box::new(move |user| {
            sink.lock().unwrap().push(user.map(|u| u.uid));
        }));
        feed.emit(Some(AuthUser {
            uid: "u1".to_string(),
            display_name: None,
            photo_url: None,
        }));
        feed.emit(None);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Some("u1".to_string()), None]
        );
    }

    #[test]
    fn test_no_delivery_after_unsubscribe() {
        let feed = MemoryRecordFeed::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let sub = feed.subscribe(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        feed.emit(vec![record("a")]);
        sub.unsubscribe();
        feed.emit(vec![record("b")]);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_tears_down_subscription() {
        let feed = MemoryRecordFeed::new();
        let count = Arc::new(AtomicUsize::new(0));
        {
            let counter = count.clone();
            let _sub = feed.subscribe(Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        }
        feed.emit(vec![record("a")]);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_latest_snapshot_delivered_on_subscribe() {
        let feed = MemoryRecordFeed::new();
        feed.emit(vec![record("a"), record("b")]);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = feed.subscribe(Box::new(move |records| {
            sink.lock().unwrap().push(records.len());
        }));
        assert_eq!(*seen.lock().unwrap(), vec![2]);
    }

    #[test]
    fn test_profile_feed_routes_by_user() {
        let feed = MemoryProfileFeed::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = feed.subscribe(
            "u1",
            Box::new(move |event| {
                sink.lock().unwrap().push(event);
            }),
        );
        feed.emit("u2", ProfileEvent::NotFound);
        feed.emit(
            "u1",
            ProfileEvent::Snapshot(ProfileSnapshot {
                role: Some("admin".to_string()),
                ..ProfileSnapshot::default()
            }),
        );
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(matches!(seen[0], ProfileEvent::Snapshot(_)));
    }

    #[test]
    fn test_profile_not_found_is_a_delivery_not_an_error() {
        let feed = MemoryProfileFeed::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let _sub = feed.subscribe(
            "u1",
            Box::new(move |event| {
                sink.lock().unwrap().push(event);
            }),
        );
        feed.emit("u1", ProfileEvent::NotFound);
        assert_eq!(*seen.lock().unwrap(), vec![ProfileEvent::NotFound]);
    }
}
