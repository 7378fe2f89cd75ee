//! Change-notification subscriptions

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

pub(crate) type Callback = Arc<dyn Fn() + Send + Sync>;
pub(crate) type SubscriberMap = RwLock<HashMap<u64, Callback>>;

/// Handle to a registered change callback.
///
/// The callback stays registered for as long as the handle is alive.
/// Dropping the handle (or calling [`Subscription::unsubscribe`])
/// guarantees the callback receives no further notifications.
pub struct Subscription {
    id: u64,
    subscribers: Weak<SubscriberMap>,
}

impl Subscription {
    pub(crate) fn new(id: u64, subscribers: Weak<SubscriberMap>) -> Self {
        Self { id, subscribers }
    }

    /// Explicitly remove the callback. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.write().remove(&self.id);
        }
    }
}
