use crate::{
    BroadcastConfig, BroadcastWorker, Broadcaster, CleanupHandle, CleanupWorker, Metrics,
    PublishOutcome, Result as WsErrorResult, ShutdownCoordinator, SubscriberHandle,
    SubscriberInfo, SubscriberRegistry,
};

use tl_core::PostEvent;

use log::info;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Shared entry point for producers and subscriber handlers.
///
/// Cloning is cheap; all clones talk to the same registry and workers.
#[derive(Clone)]
pub struct EventHub {
    broadcaster: Broadcaster,
    registry: SubscriberRegistry,
    cleanup: CleanupHandle,
    metrics: Metrics,
}

impl EventHub {
    /// Build the hub and the workers that drive it. Nothing runs until
    /// [`HubWorkers::spawn`] is called.
    pub fn new(
        config: &BroadcastConfig,
        max_subscribers: usize,
        metrics: Metrics,
    ) -> (Self, HubWorkers) {
        let registry = SubscriberRegistry::new(config.subscriber_capacity, max_subscribers);

        let (intake_tx, intake_rx) = mpsc::channel(config.intake_capacity.max(1));
        let (cleanup_tx, cleanup_rx) = mpsc::channel(config.cleanup_capacity.max(1));

        let hub = Self {
            broadcaster: Broadcaster::new(intake_tx, metrics.clone()),
            registry: registry.clone(),
            cleanup: CleanupHandle::new(cleanup_tx, metrics.clone()),
            metrics: metrics.clone(),
        };

        let workers = HubWorkers {
            broadcast: BroadcastWorker::new(intake_rx, registry.clone(), metrics.clone()),
            cleanup: CleanupWorker::new(cleanup_rx, registry, metrics),
        };

        (hub, workers)
    }

    /// Non-blocking, best-effort publish to every current subscriber.
    pub fn publish(&self, event: PostEvent) -> PublishOutcome {
        self.broadcaster.publish(event)
    }

    pub async fn register_subscriber(
        &self,
        identity: impl Into<String>,
    ) -> WsErrorResult<SubscriberHandle> {
        let identity = identity.into();
        let registration = self.registry.register(identity.clone()).await?;
        self.metrics.subscriber_count(registration.subscriber_count);

        Ok(SubscriberHandle::new(
            registration.subscriber_id,
            identity,
            registration.receiver,
            self.cleanup.clone(),
        ))
    }

    pub async fn subscriber_count(&self) -> usize {
        self.registry.count().await
    }

    pub async fn subscribers(&self) -> Vec<SubscriberInfo> {
        self.registry.subscribers().await
    }

    pub fn registry(&self) -> &SubscriberRegistry {
        &self.registry
    }

    pub fn cleanup_handle(&self) -> &CleanupHandle {
        &self.cleanup
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

/// Workers created alongside an [`EventHub`]
pub struct HubWorkers {
    pub broadcast: BroadcastWorker,
    pub cleanup: CleanupWorker,
}

impl HubWorkers {
    /// Spawn both workers on the current runtime.
    pub fn spawn(self, shutdown: &ShutdownCoordinator) -> HubTasks {
        info!("Starting broadcast and cleanup workers");

        HubTasks {
            broadcast: tokio::spawn(self.broadcast.run(shutdown.subscribe_guard())),
            cleanup: tokio::spawn(self.cleanup.run(shutdown.subscribe_guard())),
        }
    }
}

/// Join handles of running hub workers
pub struct HubTasks {
    pub broadcast: JoinHandle<()>,
    pub cleanup: JoinHandle<()>,
}

impl HubTasks {
    /// Wait for both workers to stop
    pub async fn join(self) {
        if let Err(e) = self.broadcast.await {
            log::error!("Broadcast worker panicked: {e}");
        }
        if let Err(e) = self.cleanup.await {
            log::error!("Cleanup worker panicked: {e}");
        }
    }
}
