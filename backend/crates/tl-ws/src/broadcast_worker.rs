use crate::{Metrics, ShutdownGuard, SubscriberId, SubscriberRegistry};

use tl_core::PostEvent;

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::mpsc::{self, error::TrySendError};

/// Outcome of delivering one event to the registry
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FanOutReport {
    /// Subscribers the event was enqueued for
    pub enqueued: usize,
    /// Subscribers removed because their queue was full
    pub dropped_slow: Vec<SubscriberId>,
    /// Subscribers removed because their handler had already gone away
    pub dropped_gone: Vec<SubscriberId>,
}

/// Single consumer of the intake queue and the only writer into subscriber channels.
pub struct BroadcastWorker {
    intake: mpsc::Receiver<PostEvent>,
    registry: SubscriberRegistry,
    metrics: Metrics,
}

impl BroadcastWorker {
    pub(crate) fn new(
        intake: mpsc::Receiver<PostEvent>,
        registry: SubscriberRegistry,
        metrics: Metrics,
    ) -> Self {
        Self {
            intake,
            registry,
            metrics,
        }
    }

    /// Drain the intake queue until shutdown or until every producer handle is dropped.
    pub async fn run(mut self, mut shutdown: ShutdownGuard) {
        info!("Broadcast worker started");

        loop {
            tokio::select! {
                biased;

                _ = shutdown.wait() => {
                    info!("Broadcast worker shutting down");
                    break;
                }

                next = self.intake.recv() => {
                    match next {
                        Some(event) => {
                            self.fan_out(Arc::new(event)).await;
                        }
                        None => {
                            info!("Broadcast intake closed, worker exiting");
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Offer `event` to every active subscriber without waiting on any of them.
    ///
    /// Subscribers whose queue is full are removed from the registry before
    /// this returns, so the next fan-out never sees them.
    pub async fn fan_out(&self, event: Arc<PostEvent>) -> FanOutReport {
        let mut report = FanOutReport::default();

        let mut slow_identities = Vec::new();
        self.registry
            .for_each_active(|info, sender| match sender.try_send(Arc::clone(&event)) {
                Ok(()) => report.enqueued += 1,
                Err(TrySendError::Full(_)) => {
                    report.dropped_slow.push(info.subscriber_id);
                    slow_identities.push(info.identity.clone());
                }
                Err(TrySendError::Closed(_)) => report.dropped_gone.push(info.subscriber_id),
            })
            .await;

        for (subscriber_id, identity) in report.dropped_slow.iter().zip(&slow_identities) {
            warn!("Subscriber {subscriber_id} ({identity}) is not keeping up, disconnecting");
        }
        for subscriber_id in &report.dropped_gone {
            debug!("Subscriber {subscriber_id} handler is gone, removing");
        }

        if !report.dropped_slow.is_empty() || !report.dropped_gone.is_empty() {
            let stale: Vec<SubscriberId> = report
                .dropped_slow
                .iter()
                .chain(report.dropped_gone.iter())
                .copied()
                .collect();
            self.registry.remove_all(&stale).await;
            self.metrics.subscriber_count(self.registry.count().await);
        }

        debug!(
            "Fan-out of post {}: {} enqueued, {} dropped",
            event.post_id(),
            report.enqueued,
            report.dropped_slow.len()
        );
        self.metrics
            .fan_out(report.enqueued, report.dropped_slow.len());

        report
    }
}
