
use crate::{
    BroadcastConfig, EventHub, HubWorkers, Metrics, Payload, PayloadSink, Renderer,
    Result as WsErrorResult, WsError,
};

use tl_core::{PostEvent, PostId};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

pub(crate) fn event(id: i64, content: &str) -> PostEvent {
    PostEvent::new(PostId::new(id), "alice", content)
}

pub(crate) fn hub_with(
    intake_capacity: usize,
    subscriber_capacity: usize,
    max_subscribers: usize,
) -> (EventHub, HubWorkers) {
    let config = BroadcastConfig {
        intake_capacity,
        subscriber_capacity,
        cleanup_capacity: 16,
    };
    EventHub::new(&config, max_subscribers, Metrics::new())
}

/// Poll `check` until it holds or a second has passed
pub(crate) async fn wait_until<F: FnMut() -> bool>(mut check: F) -> bool {
    for _ in 0..200 {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    check()
}

pub(crate) async fn wait_for_count(hub: &EventHub, expected: usize) -> bool {
    for _ in 0..200 {
        if hub.subscriber_count().await == expected {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    hub.subscriber_count().await == expected
}

/// In-memory sink that records what was written
#[derive(Clone, Default)]
pub(crate) struct RecordingSink {
    pub sent: Arc<Mutex<Vec<String>>>,
    pub closed: Arc<AtomicBool>,
    /// Number of sends that succeed before every further send fails
    pub fail_after: Option<usize>,
}

impl RecordingSink {
    pub fn failing_after(successful_sends: usize) -> Self {
        Self {
            fail_after: Some(successful_sends),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PayloadSink for RecordingSink {
    async fn send(&mut self, payload: Payload) -> WsErrorResult<()> {
        let mut sent = self.sent.lock().unwrap();
        if let Some(limit) = self.fail_after
            && sent.len() >= limit
        {
            return Err(WsError::connection_closed("broken pipe"));
        }
        sent.push(payload.into_string());
        Ok(())
    }

    async fn close(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Renders events as `post:<content>`; content `boom` fails to render
#[derive(Default)]
pub(crate) struct TextRenderer {
    pub fail_snapshot: bool,
}

#[async_trait]
impl Renderer for TextRenderer {
    async fn render_snapshot(&self) -> WsErrorResult<Payload> {
        if self.fail_snapshot {
            return Err(WsError::render("snapshot unavailable"));
        }
        Ok(Payload::from("snapshot"))
    }

    fn render_event(&self, event: &PostEvent) -> WsErrorResult<Payload> {
        if event.content() == "boom" {
            return Err(WsError::render("cannot render"));
        }
        Ok(Payload::new(format!("post:{}", event.content())))
    }
}
