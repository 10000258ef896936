pub mod broadcast_worker;
pub mod broadcaster;
pub mod cleanup_worker;
pub mod connection_state;
pub mod error;
pub mod event_hub;
pub mod metrics;
pub mod payload;
pub mod renderer;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod subscriber_connection;
pub mod subscriber_handle;
pub mod subscriber_id;
pub mod subscriber_info;
pub mod subscriber_registry;
pub mod web_socket_sink;

pub use broadcast_worker::{BroadcastWorker, FanOutReport};
pub use broadcaster::{Broadcaster, PublishOutcome};
pub use cleanup_worker::{CleanupHandle, CleanupWorker};
pub use connection_state::{CloseReason, ConnectionOutcome, ConnectionState};
pub use error::{Result, WsError};
pub use event_hub::{EventHub, HubTasks, HubWorkers};
pub use metrics::Metrics;
pub use payload::{Payload, PayloadSink};
pub use renderer::Renderer;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use subscriber_connection::SubscriberConnection;
pub use subscriber_handle::SubscriberHandle;
pub use subscriber_id::SubscriberId;
pub use subscriber_info::SubscriberInfo;
pub use subscriber_registry::{Registration, SubscriberRegistry};
pub use web_socket_sink::{WebSocketSink, disconnect_signal, serve_socket};

pub use tl_config::BroadcastConfig;

#[cfg(test)]
mod tests;

use tracing::info_span;

/// Create a tracing span for one timeline subscriber.
/// All log entries emitted while streaming to it carry these fields.
pub fn create_subscriber_span(identity: &str) -> tracing::Span {
    info_span!("timeline_subscriber", identity = %identity)
}
