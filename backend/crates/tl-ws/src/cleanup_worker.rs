use crate::{Metrics, ShutdownGuard, SubscriberId, SubscriberRegistry};

use log::{debug, info};
use tokio::sync::mpsc;

/// Sends best-effort removal requests to the [`CleanupWorker`].
#[derive(Clone)]
pub struct CleanupHandle {
    requests: mpsc::Sender<SubscriberId>,
    metrics: Metrics,
}

impl CleanupHandle {
    pub(crate) fn new(requests: mpsc::Sender<SubscriberId>, metrics: Metrics) -> Self {
        Self { requests, metrics }
    }

    /// Ask for a subscriber to be removed. Never waits.
    ///
    /// A request that does not fit is dropped; the broadcaster removes the
    /// subscriber on its next fan-out once it notices the handler is gone.
    pub fn request_removal(&self, subscriber_id: SubscriberId) -> bool {
        match self.requests.try_send(subscriber_id) {
            Ok(()) => true,
            Err(_) => {
                debug!("Removal request for {subscriber_id} dropped");
                self.metrics.removal_request_dropped();
                false
            }
        }
    }
}

/// Applies removal requests to the registry off the connection exit path.
pub struct CleanupWorker {
    requests: mpsc::Receiver<SubscriberId>,
    registry: SubscriberRegistry,
    metrics: Metrics,
}

impl CleanupWorker {
    pub(crate) fn new(
        requests: mpsc::Receiver<SubscriberId>,
        registry: SubscriberRegistry,
        metrics: Metrics,
    ) -> Self {
        Self {
            requests,
            registry,
            metrics,
        }
    }

    pub async fn run(mut self, mut shutdown: ShutdownGuard) {
        info!("Cleanup worker started");

        loop {
            tokio::select! {
                biased;

                _ = shutdown.wait() => {
                    info!("Cleanup worker shutting down");
                    break;
                }

                next = self.requests.recv() => {
                    match next {
                        Some(subscriber_id) => {
                            if self.registry.remove(subscriber_id).await {
                                self.metrics.subscriber_count(self.registry.count().await);
                            }
                        }
                        None => {
                            info!("Cleanup queue closed, worker exiting");
                            break;
                        }
                    }
                }
            }
        }
    }
}
