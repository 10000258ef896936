#![allow(dead_code)]

//! Test infrastructure for tl-server HTTP tests

use tl_config::Config;
use tl_db::{UserRepository, create_pool, run_migrations};
use tl_server::AppState;
use tl_ws::{HubTasks, ShutdownCoordinator};

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;

pub const TEST_USER: &str = "alice";
pub const TEST_PASSWORD: &str = "secret";

/// Running application state backed by an in-memory database
pub struct TestApp {
    pub state: AppState,
    pub tasks: HubTasks,
}

impl TestApp {
    /// Cookie header value for a fresh session of `username`
    pub async fn session_cookie(&self, username: &str) -> String {
        let token = self.state.sessions.create(username).await;
        format!("{}={}", self.state.cookie_name(), token)
    }
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with_config(Config::default()).await
}

pub async fn create_test_app_with_config(mut config: Config) -> TestApp {
    config.seed.demo_users = 0;

    let pool = create_pool(None).await.expect("Failed to create test pool");
    run_migrations(&pool).await.expect("Failed to run migrations");
    UserRepository::new(pool.clone())
        .create(TEST_USER, TEST_PASSWORD)
        .await
        .expect("Failed to create test user");

    let shutdown = ShutdownCoordinator::new();
    let (state, workers) = AppState::new(pool, Arc::new(config), shutdown.clone());
    let tasks = workers.spawn(&shutdown);

    TestApp { state, tasks }
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
