//! Session store
//!
//! Authoritative read/write surface for the persisted credential record.
//! All other components read the session through these accessors; nothing
//! else writes the underlying storage keys.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use linkshort_storage::Database;

use crate::subscription::{Callback, SubscriberMap, Subscription};
use crate::Result;

const TOKEN_KEY: &str = "auth.token";
const EMAIL_KEY: &str = "auth.email";

pub struct SessionStore {
    db: Database,
    subscribers: Arc<SubscriberMap>,
    next_subscriber_id: Arc<AtomicU64>,
}

impl SessionStore {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            subscribers: Arc::new(SubscriberMap::default()),
            next_subscriber_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get the stored bearer token, if any. No side effects.
    pub fn token(&self) -> Result<Option<String>> {
        Ok(self.db.get_value(TOKEN_KEY)?)
    }

    /// Get the stored account email, if any.
    ///
    /// The email is inert metadata: its presence says nothing about
    /// whether a session is active.
    pub fn email(&self) -> Result<Option<String>> {
        Ok(self.db.get_value(EMAIL_KEY)?)
    }

    /// True iff a non-empty token is stored.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.token(), Ok(Some(token)) if !token.is_empty())
    }

    /// Store a new credential record and notify subscribers.
    ///
    /// Token and email are written in one transaction; no reader can
    /// observe a state with only one of the two set. Notification fires
    /// after the write is durable.
    pub fn set_auth(&self, token: &str, email: &str) -> Result<()> {
        let updated_at = chrono::Utc::now().to_rfc3339();
        self.db.transaction(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO credentials (key, value, updated_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![TOKEN_KEY, token, updated_at],
            )?;
            conn.execute(
                "INSERT OR REPLACE INTO credentials (key, value, updated_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![EMAIL_KEY, email, updated_at],
            )?;
            Ok(())
        })?;

        tracing::info!(email = %email, "Stored session credentials");

        self.notify();
        Ok(())
    }

    /// Remove both credential fields and notify subscribers.
    ///
    /// Idempotent: clearing an already-empty session still notifies, so
    /// subscribers must tolerate redundant notifications.
    pub fn clear_auth(&self) -> Result<()> {
        self.db.transaction(|conn| {
            conn.execute(
                "DELETE FROM credentials WHERE key IN (?1, ?2)",
                rusqlite::params![TOKEN_KEY, EMAIL_KEY],
            )?;
            Ok(())
        })?;

        tracing::info!("Cleared session credentials");

        self.notify();
        Ok(())
    }

    /// Register a callback invoked on every future session mutation.
    ///
    /// Subscriptions are independent; dropping one does not affect
    /// others. Delivery order across subscribers is unspecified.
    pub fn on_change<F>(&self, handler: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers.write().insert(id, Arc::new(handler));
        Subscription::new(id, Arc::downgrade(&self.subscribers))
    }

    /// Deliver a change notification to every current subscriber.
    ///
    /// Callbacks run outside the subscriber-map lock, so a handler may
    /// register or drop subscriptions without deadlocking. A panicking
    /// handler does not prevent delivery to the remaining handlers.
    fn notify(&self) {
        let callbacks: Vec<Callback> = self.subscribers.read().values().cloned().collect();
        for callback in callbacks {
            if catch_unwind(AssertUnwindSafe(|| callback())).is_err() {
                tracing::warn!("Session change handler panicked");
            }
        }
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            subscribers: Arc::clone(&self.subscribers),
            next_subscriber_id: Arc::clone(&self.next_subscriber_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn store() -> SessionStore {
        SessionStore::new(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_set_and_read_auth() {
        let store = store();

        assert!(!store.is_authenticated());
        assert_eq!(store.token().unwrap(), None);
        assert_eq!(store.email().unwrap(), None);

        store.set_auth("tok1", "a@x.com").unwrap();
        assert_eq!(store.token().unwrap(), Some("tok1".to_string()));
        assert_eq!(store.email().unwrap(), Some("a@x.com".to_string()));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let store = store();
        store.set_auth("", "a@x.com").unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_clear_removes_both_fields() {
        let store = store();
        store.set_auth("tok1", "a@x.com").unwrap();

        store.clear_auth().unwrap();
        assert_eq!(store.token().unwrap(), None);
        assert_eq!(store.email().unwrap(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_authenticated_iff_last_call_was_set() {
        let store = store();

        store.set_auth("t1", "a@x.com").unwrap();
        store.clear_auth().unwrap();
        store.set_auth("t2", "b@x.com").unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.token().unwrap(), Some("t2".to_string()));

        store.clear_auth().unwrap();
        store.clear_auth().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_notifications_per_mutation() {
        let store = store();
        let count = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&count);
        let sub = store.on_change(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set_auth("t", "a@x.com").unwrap();
        store.clear_auth().unwrap();
        // Clearing when already logged out still notifies
        store.clear_auth().unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 3);

        drop(sub);
        store.set_auth("t", "a@x.com").unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_subscriptions_are_independent() {
        let store = store();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&first);
        let sub_a = store.on_change(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = Arc::clone(&second);
        let _sub_b = store.on_change(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set_auth("t", "a@x.com").unwrap();
        sub_a.unsubscribe();
        store.clear_auth().unwrap();

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_panicking_handler_does_not_block_delivery() {
        let store = store();
        let delivered = Arc::new(AtomicUsize::new(0));

        let _bad = store.on_change(|| panic!("handler failure"));
        let counter = Arc::clone(&delivered);
        let _good = store.on_change(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set_auth("t", "a@x.com").unwrap();
        assert_eq!(delivered.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let store = store();
        let other = store.clone();

        store.set_auth("tok", "a@x.com").unwrap();
        assert!(other.is_authenticated());
        assert_eq!(other.token().unwrap(), Some("tok".to_string()));
    }
}
