use crate::{
    ConnectionOutcome, EventHub, Payload, PayloadSink, Renderer, Result as WsErrorResult,
    ShutdownGuard, SubscriberConnection, create_subscriber_span,
};

use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tracing::Instrument;

/// [`PayloadSink`] over the write half of an axum WebSocket
pub struct WebSocketSink {
    sender: SplitSink<WebSocket, Message>,
}

impl WebSocketSink {
    pub fn new(sender: SplitSink<WebSocket, Message>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl PayloadSink for WebSocketSink {
    async fn send(&mut self, payload: Payload) -> WsErrorResult<()> {
        self.sender
            .send(Message::Text(payload.into_string().into()))
            .await?;
        Ok(())
    }

    async fn close(&mut self) {
        let _ = self.sender.close().await;
    }
}

/// Completes when the client closes the socket, errors, or the stream ends.
///
/// Anything else the client sends is ignored.
pub async fn disconnect_signal(mut receiver: SplitStream<WebSocket>) {
    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Close(_)) => {
                log::debug!("Client sent close frame");
                return;
            }
            Ok(_) => {}
            Err(e) => {
                log::debug!("WebSocket read error: {e}");
                return;
            }
        }
    }
}

/// Run a timeline subscription over an upgraded socket.
pub async fn serve_socket<R: Renderer>(
    socket: WebSocket,
    hub: EventHub,
    identity: String,
    renderer: R,
    shutdown: ShutdownGuard,
) -> ConnectionOutcome {
    let span = create_subscriber_span(&identity);
    let metrics = hub.metrics().clone();
    let (sender, receiver) = socket.split();

    SubscriberConnection::new(hub, identity, renderer, metrics)
        .run(
            WebSocketSink::new(sender),
            disconnect_signal(receiver),
            shutdown,
        )
        .instrument(span)
        .await
}
