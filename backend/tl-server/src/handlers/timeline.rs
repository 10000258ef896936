use crate::{AppState, CurrentUser, HtmlRenderer};

use tl_db::PostRepository;
use tl_ws::serve_socket;

use axum::{
    extract::{State, WebSocketUpgrade},
    response::Response,
};
use log::info;

/// GET /timeline - live timeline over WebSocket
pub async fn timeline(
    State(state): State<AppState>,
    CurrentUser(username): CurrentUser,
    ws: WebSocketUpgrade,
) -> Response {
    info!("Timeline connection for {username}");

    ws.on_upgrade(move |socket| async move {
        let renderer = HtmlRenderer::new(
            PostRepository::new(state.pool.clone()),
            state.config.timeline.snapshot_limit,
        );

        serve_socket(
            socket,
            state.hub.clone(),
            username,
            renderer,
            state.shutdown.subscribe_guard(),
        )
        .await;
    })
}
