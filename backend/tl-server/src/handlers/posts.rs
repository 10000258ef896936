use crate::html::pages;
use crate::{AppState, CurrentUser};

use tl_core::{FieldErrors, PostForm};
use tl_db::PostRepository;

use axum::{Form, extract::State, response::Html};
use log::{error, info};

const SYSTEM_ERROR_FIELD: &str = "system";

/// POST /add-post - validate, persist, then hand the post to live timelines
pub async fn add_post(
    State(state): State<AppState>,
    CurrentUser(username): CurrentUser,
    Form(form): Form<PostForm>,
) -> Html<String> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Html(pages::add_post_form(&form, &errors, ""));
    }

    let event = match PostRepository::new(state.pool.clone())
        .create(&username, &form.post)
        .await
    {
        Ok(event) => event,
        Err(e) => {
            error!("Error creating post: {e}");
            let mut errors = FieldErrors::new();
            errors.insert(
                SYSTEM_ERROR_FIELD.to_string(),
                "Failed to create post. Please try again.".to_string(),
            );
            return Html(pages::add_post_form(&form, &errors, ""));
        }
    };

    let post_id = event.post_id();
    info!("User {username} created post {post_id}");

    // Outcome is logged by the hub; the post is already stored either way
    state.hub.publish(event);

    Html(pages::add_post_form(
        &PostForm::default(),
        &FieldErrors::new(),
        &format!("Post created successfully! (ID: {post_id})"),
    ))
}
