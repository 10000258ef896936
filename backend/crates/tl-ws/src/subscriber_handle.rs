use crate::{CleanupHandle, SubscriberId, subscriber_registry::SubscriberReceiver};

use tl_core::PostEvent;

use std::sync::Arc;

use tokio::sync::mpsc::error::TryRecvError;

/// Subscriber side of a registration.
///
/// Removal from the registry is requested exactly once: explicitly through
/// [`SubscriberHandle::close`], or implicitly when the handle is dropped.
pub struct SubscriberHandle {
    subscriber_id: SubscriberId,
    identity: String,
    receiver: SubscriberReceiver,
    cleanup: CleanupHandle,
    removal_requested: bool,
}

impl SubscriberHandle {
    pub(crate) fn new(
        subscriber_id: SubscriberId,
        identity: String,
        receiver: SubscriberReceiver,
        cleanup: CleanupHandle,
    ) -> Self {
        Self {
            subscriber_id,
            identity,
            receiver,
            cleanup,
            removal_requested: false,
        }
    }

    pub fn id(&self) -> SubscriberId {
        self.subscriber_id
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Next event in publish order.
    ///
    /// Returns `None` once the registry has dropped this subscriber and the
    /// buffered events are drained.
    pub async fn recv(&mut self) -> Option<Arc<PostEvent>> {
        self.receiver.recv().await
    }

    pub fn try_recv(&mut self) -> Result<Arc<PostEvent>, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Stop receiving and ask for this subscriber to be removed.
    pub fn close(mut self) {
        self.request_removal();
    }

    fn request_removal(&mut self) {
        if self.removal_requested {
            return;
        }
        self.removal_requested = true;
        self.cleanup.request_removal(self.subscriber_id);
    }
}

impl Drop for SubscriberHandle {
    fn drop(&mut self) {
        self.request_removal();
    }
}
