#![allow(dead_code)]

use tl_core::PostEvent;
use tl_ws::{
    BroadcastConfig, EventHub, HubTasks, Metrics, Payload, Renderer, Result as WsErrorResult,
    ShutdownCoordinator, serve_socket,
};

use async_trait::async_trait;
use axum::{
    Router,
    extract::{State, WebSocketUpgrade},
    response::Response,
    routing::get,
};
use axum_test::TestServer;

pub const TEST_IDENTITY: &str = "test-user";

/// Renders plain text so assertions stay readable
pub struct PlainRenderer;

#[async_trait]
impl Renderer for PlainRenderer {
    async fn render_snapshot(&self) -> WsErrorResult<Payload> {
        Ok(Payload::from("snapshot"))
    }

    fn render_event(&self, event: &PostEvent) -> WsErrorResult<Payload> {
        Ok(Payload::new(format!(
            "{}:{}:{}",
            event.post_id(),
            event.username(),
            event.content()
        )))
    }
}

#[derive(Clone)]
pub struct TestState {
    pub hub: EventHub,
    pub shutdown: ShutdownCoordinator,
}

pub struct TestServerWithState {
    pub server: TestServer,
    pub state: TestState,
    pub tasks: HubTasks,
}

pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(BroadcastConfig::default())
}

pub fn create_test_server_with_config(config: BroadcastConfig) -> TestServerWithState {
    let (hub, workers) = EventHub::new(&config, 100, Metrics::new());
    let shutdown = ShutdownCoordinator::new();
    let tasks = workers.spawn(&shutdown);

    let state = TestState { hub, shutdown };
    let router = Router::new()
        .route("/timeline", get(timeline))
        .with_state(state.clone());

    let server = TestServer::builder()
        .http_transport()
        .build(router)
        .expect("Failed to create test server");

    TestServerWithState {
        server,
        state,
        tasks,
    }
}

async fn timeline(ws: WebSocketUpgrade, State(state): State<TestState>) -> Response {
    ws.on_upgrade(move |socket| async move {
        serve_socket(
            socket,
            state.hub.clone(),
            TEST_IDENTITY.to_string(),
            PlainRenderer,
            state.shutdown.subscribe_guard(),
        )
        .await;
    })
}
