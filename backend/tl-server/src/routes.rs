use crate::handlers::{auth, home, posts, timeline};
use crate::{AppState, health};

use axum::{
    Router,
    routing::{get, post},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(auth::root))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/home", get(home::home))
        .route("/add-post", post(posts::add_post))
        // WebSocket endpoint
        .route("/timeline", get(timeline::timeline))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
}
