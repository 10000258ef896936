use crate::SessionStore;

use tl_config::Config;
use tl_ws::{EventHub, HubWorkers, Metrics, ShutdownCoordinator};

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub hub: EventHub,
    pub sessions: SessionStore,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the state together. The returned workers must be spawned before
    /// published posts reach anyone.
    pub fn new(
        pool: SqlitePool,
        config: Arc<Config>,
        shutdown: ShutdownCoordinator,
    ) -> (Self, HubWorkers) {
        let metrics = Metrics::new();
        let (hub, workers) = EventHub::new(
            &config.broadcast,
            config.server.max_connections,
            metrics.clone(),
        );
        let sessions = SessionStore::new(Duration::from_secs(config.session.ttl_secs));

        let state = Self {
            pool,
            hub,
            sessions,
            metrics,
            shutdown,
            config,
        };

        (state, workers)
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.session.cookie_name
    }
}
