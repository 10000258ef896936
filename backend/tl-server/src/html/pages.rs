//! HTML fragments for the htmx front end.

use super::escape;

use tl_core::{FieldErrors, PostEvent, PostForm};

const HTMX_SCRIPT: &str = "https://unpkg.com/htmx.org@1.9.12";
const HTMX_WS_SCRIPT: &str = "https://unpkg.com/htmx.org@1.9.12/dist/ext/ws.js";

/// Id of the element timeline updates are swapped into
pub const TIMELINE_ID: &str = "timeline";

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{HTMX_SCRIPT}"></script>
<script src="{HTMX_WS_SCRIPT}"></script>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape(title),
    )
}

pub fn login_page(error: &str) -> String {
    let error = if error.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="error">{}</p>"#, escape(error))
    };

    layout(
        "Login",
        &format!(
            r#"<h1>Login</h1>
{error}
<form method="post" action="/login">
<input type="text" name="username" placeholder="username" required>
<input type="password" name="password" placeholder="password" required>
<button type="submit">Login</button>
</form>"#
        ),
    )
}

pub fn home_page(username: &str) -> String {
    layout(
        "Timeline",
        &format!(
            r#"<header>
<span>Logged in as {username}</span>
<button hx-get="/logout">Logout</button>
</header>
{form}
<div hx-ext="ws" ws-connect="/timeline">
<div id="{TIMELINE_ID}"></div>
</div>"#,
            username = escape(username),
            form = add_post_form(&PostForm::default(), &FieldErrors::new(), ""),
        ),
    )
}

/// The add-post form, swapped in place after every submission.
pub fn add_post_form(values: &PostForm, errors: &FieldErrors, success: &str) -> String {
    let mut messages = String::new();
    for (field, message) in errors {
        messages.push_str(&format!(
            r#"<p class="error" data-field="{}">{}</p>"#,
            escape(field),
            escape(message)
        ));
    }
    if !success.is_empty() {
        messages.push_str(&format!(r#"<p class="success">{}</p>"#, escape(success)));
    }

    format!(
        r#"<form id="add-post" hx-post="/add-post" hx-swap="outerHTML">
<input type="text" name="post" value="{value}">
<button type="submit">Post</button>
{messages}</form>"#,
        value = escape(&values.post),
    )
}

fn post_item(event: &PostEvent) -> String {
    format!(
        r#"<div class="post" id="post-{id}"><span class="author">{author}</span> <span class="content">{content}</span> <time datetime="{time}">{time}</time></div>"#,
        id = event.post_id(),
        author = escape(event.username()),
        content = escape(event.content()),
        time = event.created_at().to_rfc3339(),
    )
}

/// First message on a timeline socket: replaces the timeline with `posts`.
pub fn timeline_snapshot(posts: &[PostEvent]) -> String {
    let items: String = posts.iter().map(post_item).collect();
    format!(r#"<div id="{TIMELINE_ID}" hx-swap-oob="true">{items}</div>"#)
}

/// Out-of-band fragment prepending one post to the timeline.
pub fn timeline_post(event: &PostEvent) -> String {
    format!(
        r#"<div id="{TIMELINE_ID}" hx-swap-oob="afterbegin">{}</div>"#,
        post_item(event)
    )
}
