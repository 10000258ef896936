//! Integration tests for the add-post form
mod common;

use common::{TEST_USER, body_text, create_test_app, post_form};

use tl_db::PostRepository;
use tl_server::build_router;

use std::time::Duration;

use axum::http::StatusCode;
use googletest::prelude::*;
use tokio::time::timeout;
use tower::ServiceExt;

#[tokio::test]
async fn given_no_session_when_posting_then_redirected_to_login() {
    let app = create_test_app().await;

    let response = build_router(app.state.clone())
        .oneshot(post_form("/add-post", "post=hello", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn given_short_post_when_submitted_then_too_short_shown() {
    let app = create_test_app().await;
    let cookie = app.session_cookie(TEST_USER).await;

    let response = build_router(app.state.clone())
        .oneshot(post_form("/add-post", "post=ab", Some(&cookie)))
        .await
        .unwrap();

    assert_that!(body_text(response).await, contains_substring("too short"));
    let stored = PostRepository::new(app.state.pool.clone()).count().await.unwrap();
    assert_eq!(stored, 0);
}

#[tokio::test]
async fn given_long_post_when_submitted_then_too_long_shown() {
    let app = create_test_app().await;
    let cookie = app.session_cookie(TEST_USER).await;

    let response = build_router(app.state.clone())
        .oneshot(post_form("/add-post", "post=abcdefghijk", Some(&cookie)))
        .await
        .unwrap();

    assert_that!(body_text(response).await, contains_substring("too long"));
}

#[tokio::test]
async fn given_forbidden_post_when_submitted_then_rejected() {
    let app = create_test_app().await;
    let cookie = app.session_cookie(TEST_USER).await;

    let response = build_router(app.state.clone())
        .oneshot(post_form("/add-post", "post=bad", Some(&cookie)))
        .await
        .unwrap();

    assert_that!(body_text(response).await, contains_substring("bad not allowed"));
}

#[tokio::test]
async fn given_valid_post_when_submitted_then_stored_and_broadcast() {
    let app = create_test_app().await;
    let cookie = app.session_cookie(TEST_USER).await;
    let mut subscriber = app.state.hub.register_subscriber("watcher").await.unwrap();

    let response = build_router(app.state.clone())
        .oneshot(post_form("/add-post", "post=hello", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_that!(
        body_text(response).await,
        contains_substring("Post created successfully! (ID: 1)")
    );

    let recent = PostRepository::new(app.state.pool.clone())
        .list_recent(10)
        .await
        .unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].username(), TEST_USER);

    let event = timeout(Duration::from_secs(1), subscriber.recv())
        .await
        .expect("post should be broadcast")
        .expect("subscriber should stay registered");
    assert_eq!(event.post_id().value(), 1);
    assert_eq!(event.content(), "hello");
    assert_eq!(event.username(), TEST_USER);
}

#[tokio::test]
async fn given_database_down_when_post_submitted_then_failure_shown() {
    let app = create_test_app().await;
    let cookie = app.session_cookie(TEST_USER).await;
    app.state.pool.close().await;

    let response = build_router(app.state.clone())
        .oneshot(post_form("/add-post", "post=hello", Some(&cookie)))
        .await
        .unwrap();

    let body = body_text(response).await;
    assert_that!(
        body,
        contains_substring("Failed to create post. Please try again.")
    );
    assert_that!(body, contains_substring(r#"value="hello""#));
}
