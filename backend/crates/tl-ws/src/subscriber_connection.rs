use crate::{
    CloseReason, ConnectionOutcome, ConnectionState, EventHub, Metrics, PayloadSink, Renderer,
    ShutdownGuard, SubscriberHandle,
};

use std::future::Future;

use log::{debug, info, warn};

/// Drives one subscriber from registration to close.
pub struct SubscriberConnection<R: Renderer> {
    hub: EventHub,
    identity: String,
    renderer: R,
    metrics: Metrics,
    state: ConnectionState,
    transitions: Vec<ConnectionState>,
    delivered: usize,
}

impl<R: Renderer> SubscriberConnection<R> {
    pub fn new(hub: EventHub, identity: impl Into<String>, renderer: R, metrics: Metrics) -> Self {
        Self {
            hub,
            identity: identity.into(),
            renderer,
            metrics,
            state: ConnectionState::Connecting,
            transitions: vec![ConnectionState::Connecting],
            delivered: 0,
        }
    }

    /// Register, send the snapshot, then forward events until something ends the stream.
    ///
    /// `disconnected` completes when the remote side goes away. The sink is
    /// closed and removal is requested exactly once, whatever the reason.
    pub async fn run<S, D>(
        mut self,
        mut sink: S,
        disconnected: D,
        mut shutdown: ShutdownGuard,
    ) -> ConnectionOutcome
    where
        S: PayloadSink,
        D: Future<Output = ()> + Send,
    {
        let mut handle = match self.hub.register_subscriber(self.identity.clone()).await {
            Ok(handle) => handle,
            Err(e) => {
                warn!("Rejected subscriber {}: {e}", self.identity);
                return self.finish(None, &mut sink, CloseReason::Rejected).await;
            }
        };
        self.transition(ConnectionState::Registered);

        if let Err(e) = self.send_snapshot(&mut sink).await {
            warn!("Snapshot for subscriber {} failed: {e}", handle.id());
            return self
                .finish(Some(handle), &mut sink, CloseReason::SnapshotFailed)
                .await;
        }
        self.transition(ConnectionState::Streaming);

        tokio::pin!(disconnected);

        let reason = loop {
            tokio::select! {
                biased;

                _ = shutdown.wait() => {
                    debug!("Subscriber {} closing for shutdown", handle.id());
                    break CloseReason::Shutdown;
                }

                _ = &mut disconnected => {
                    debug!("Subscriber {} disconnected", handle.id());
                    break CloseReason::Disconnected;
                }

                next = handle.recv() => {
                    let Some(event) = next else {
                        info!("Subscriber {} channel closed by broadcaster", handle.id());
                        break CloseReason::ChannelClosed;
                    };

                    let payload = match self.renderer.render_event(&event) {
                        Ok(payload) => payload,
                        Err(e) => {
                            warn!("Skipping post {} for {}: {e}", event.post_id(), handle.id());
                            self.metrics.render_failed();
                            continue;
                        }
                    };

                    if let Err(e) = sink.send(payload).await {
                        info!("Send to subscriber {} failed: {e}", handle.id());
                        break CloseReason::SendFailed;
                    }
                    self.delivered += 1;
                    self.metrics.event_delivered();
                }
            }
        };

        self.finish(Some(handle), &mut sink, reason).await
    }

    async fn send_snapshot<S: PayloadSink>(&mut self, sink: &mut S) -> crate::Result<()> {
        let snapshot = self.renderer.render_snapshot().await?;
        sink.send(snapshot).await
    }

    async fn finish<S: PayloadSink>(
        mut self,
        handle: Option<SubscriberHandle>,
        sink: &mut S,
        reason: CloseReason,
    ) -> ConnectionOutcome {
        let subscriber_id = handle.as_ref().map(SubscriberHandle::id);

        if let Some(handle) = handle {
            handle.close();
        }
        sink.close().await;

        self.transition(ConnectionState::Closed);
        self.metrics.connection_closed(reason.as_str());

        info!(
            "Subscriber {} ({}) closed: {reason}, {} event(s) delivered",
            subscriber_id.map(|id| id.to_string()).unwrap_or_default(),
            self.identity,
            self.delivered
        );

        ConnectionOutcome {
            subscriber_id,
            reason,
            delivered: self.delivered,
            transitions: self.transitions,
        }
    }

    fn transition(&mut self, next: ConnectionState) {
        debug!("Subscriber {} {:?} -> {next:?}", self.identity, self.state);
        self.state = next;
        self.transitions.push(next);
    }
}
