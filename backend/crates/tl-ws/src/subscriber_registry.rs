use crate::{Result as WsErrorResult, SubscriberId, SubscriberInfo, WsError};

use tl_core::PostEvent;

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{debug, info, warn};
use tokio::sync::{RwLock, mpsc};

/// Write half of a subscriber channel. Only the registry holds it.
pub type SubscriberSender = mpsc::Sender<Arc<PostEvent>>;
/// Read half of a subscriber channel, owned by the subscriber's handler.
pub type SubscriberReceiver = mpsc::Receiver<Arc<PostEvent>>;

/// Result of a successful registration
pub struct Registration {
    pub subscriber_id: SubscriberId,
    pub receiver: SubscriberReceiver,
    /// Subscriber count right after this registration
    pub subscriber_count: usize,
}

/// Registry of active timeline subscribers.
///
/// Each entry owns the only sender of its subscriber channel, so removing the
/// entry is what closes the channel. Entries are never closed any other way.
pub struct SubscriberRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    channel_capacity: usize,
    max_subscribers: usize,
}

struct RegistryInner {
    subscribers: HashMap<SubscriberId, SubscriberEntry>,
}

struct SubscriberEntry {
    info: SubscriberInfo,
    sender: SubscriberSender,
}

impl SubscriberRegistry {
    pub fn new(channel_capacity: usize, max_subscribers: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                subscribers: HashMap::new(),
            })),
            channel_capacity: channel_capacity.max(1),
            max_subscribers,
        }
    }

    /// Create a bounded channel for a new subscriber and mark it active.
    pub async fn register(&self, identity: impl Into<String>) -> WsErrorResult<Registration> {
        let mut inner = self.inner.write().await;

        let current = inner.subscribers.len();
        if current >= self.max_subscribers {
            drop(inner);
            warn!(
                "Subscriber limit reached: {current}/{}",
                self.max_subscribers
            );
            return Err(WsError::SubscriberLimitExceeded {
                current,
                max: self.max_subscribers,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let (sender, receiver) = mpsc::channel(self.channel_capacity);
        let subscriber_id = SubscriberId::new();
        let info = SubscriberInfo {
            subscriber_id,
            identity: identity.into(),
            registered_at: chrono::Utc::now(),
        };

        inner
            .subscribers
            .insert(subscriber_id, SubscriberEntry { info, sender });
        let subscriber_count = inner.subscribers.len();
        drop(inner);

        info!("Registered subscriber {subscriber_id} ({subscriber_count} total)");

        Ok(Registration {
            subscriber_id,
            receiver,
            subscriber_count,
        })
    }

    /// Remove a subscriber, closing its channel. Removing an absent subscriber is a no-op.
    ///
    /// Returns whether an entry was actually removed.
    pub async fn remove(&self, subscriber_id: SubscriberId) -> bool {
        let mut inner = self.inner.write().await;
        let removed = inner.subscribers.remove(&subscriber_id);
        let remaining = inner.subscribers.len();
        drop(inner);

        // The entry, and with it the channel sender, is released outside the lock
        match removed {
            Some(_entry) => {
                info!("Removed subscriber {subscriber_id} ({remaining} remaining)");
                true
            }
            None => {
                debug!("Subscriber {subscriber_id} already removed");
                false
            }
        }
    }

    /// Remove several subscribers under one write lock. Returns how many were present.
    pub async fn remove_all(&self, subscriber_ids: &[SubscriberId]) -> usize {
        if subscriber_ids.is_empty() {
            return 0;
        }

        let mut inner = self.inner.write().await;
        let removed = subscriber_ids
            .iter()
            .filter(|id| inner.subscribers.remove(*id).is_some())
            .count();
        let remaining = inner.subscribers.len();
        drop(inner);

        if removed > 0 {
            info!("Removed {removed} subscriber(s) ({remaining} remaining)");
        }
        removed
    }

    /// Visit every active subscriber while holding the read lock.
    ///
    /// Registrations and removals wait until the visit completes. `f` must not
    /// block or log.
    pub async fn for_each_active<F>(&self, mut f: F)
    where
        F: FnMut(&SubscriberInfo, &SubscriberSender),
    {
        let inner = self.inner.read().await;
        for entry in inner.subscribers.values() {
            f(&entry.info, &entry.sender);
        }
    }

    pub async fn contains(&self, subscriber_id: SubscriberId) -> bool {
        let inner = self.inner.read().await;
        inner.subscribers.contains_key(&subscriber_id)
    }

    pub async fn count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.subscribers.len()
    }

    /// Snapshot of all active subscribers
    pub async fn subscribers(&self) -> Vec<SubscriberInfo> {
        let inner = self.inner.read().await;
        inner
            .subscribers
            .values()
            .map(|entry| entry.info.clone())
            .collect()
    }

    pub fn channel_capacity(&self) -> usize {
        self.channel_capacity
    }

    /// Whether any task currently holds the registry lock
    #[cfg(test)]
    pub(crate) fn is_locked(&self) -> bool {
        self.inner.try_write().is_err()
    }
}

impl Clone for SubscriberRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            channel_capacity: self.channel_capacity,
            max_subscribers: self.max_subscribers,
        }
    }
}
