use crate::{AppState, PageError};

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

async fn database_ok(state: &AppState) -> bool {
    sqlx::query("SELECT 1").execute(&state.pool).await.is_ok()
}

/// GET /health - status, version and live subscriber count
pub async fn health(State(state): State<AppState>) -> Response {
    let (status, database) = if database_ok(&state).await {
        ("healthy", "operational")
    } else {
        ("degraded", "unavailable")
    };

    let health = json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "timeline": "operational",
        },
        "subscribers": state.hub.subscriber_count().await,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe, fails while the database is unreachable
pub async fn readiness(State(state): State<AppState>) -> Result<Response, PageError> {
    if !database_ok(&state).await {
        return Err(PageError::unavailable("Database is not reachable"));
    }
    Ok((StatusCode::OK, "Ready").into_response())
}
