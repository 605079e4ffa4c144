//! Live assistant conversations keyed by session id, forgotten after an idle period.

use bitto_core::ChatSession;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

pub(crate) type SharedSession = Arc<Mutex<ChatSession>>;

struct Slot {
    session: SharedSession,
    last_seen: Instant,
}

pub(crate) struct SessionStore {
    ttl: Duration,
    slots: DashMap<String, Slot>,
}

impl SessionStore {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: DashMap::new(),
        }
    }

    /// The session for `id`, created if absent. Marks it as seen at `now`.
    pub(crate) fn open_at(&self, id: &str, now: Instant) -> SharedSession {
        let mut slot = self.slots.entry(id.to_string()).or_insert_with(|| Slot {
            session: Arc::new(Mutex::new(ChatSession::new())),
            last_seen: now,
        });
        slot.last_seen = now;
        Arc::clone(&slot.session)
    }

    pub(crate) fn open(&self, id: &str) -> SharedSession {
        self.open_at(id, Instant::now())
    }

    pub(crate) fn get(&self, id: &str) -> Option<SharedSession> {
        self.slots.get(id).map(|slot| Arc::clone(&slot.session))
    }

    pub(crate) fn remove(&self, id: &str) -> bool {
        self.slots.remove(id).is_some()
    }

    /// Drops sessions not seen for longer than the idle period. Returns how many were dropped.
    pub(crate) fn prune_idle_at(&self, now: Instant) -> usize {
        let before = self.slots.len();
        let ttl = self.ttl;
        self.slots
            .retain(|_, slot| now.saturating_duration_since(slot.last_seen) <= ttl);
        before.saturating_sub(self.slots.len())
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reopening_returns_the_same_conversation() {
        let store = SessionStore::new(Duration::from_secs(60));
        store.open("a").lock().await.push_user("hi");
        assert_eq!(store.open("a").lock().await.history.len(), 1);
        assert_eq!(store.len(), 1);
        assert!(store.remove("a"));
        assert!(!store.remove("a"));
        assert!(store.get("a").is_none());
    }

    #[test]
    fn idle_sessions_are_dropped_and_active_ones_kept() {
        let store = SessionStore::new(Duration::from_secs(1800));
        let t0 = Instant::now();
        for i in 0..200 {
            store.open_at(&format!("anon-{}", i), t0);
        }
        store.open_at("regular", t0);
        store.open_at("regular", t0 + Duration::from_secs(1500));

        assert_eq!(store.prune_idle_at(t0 + Duration::from_secs(1800)), 0);
        assert_eq!(store.prune_idle_at(t0 + Duration::from_secs(1801)), 200);
        assert_eq!(store.len(), 1);
        assert!(store.get("regular").is_some());
    }
}
