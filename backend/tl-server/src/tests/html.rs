use crate::html::{escape, pages};

use tl_core::{FieldErrors, PostEvent, PostForm, PostId};

use googletest::prelude::*;

#[test]
fn given_markup_when_escaped_then_inert() {
    assert_that!(
        escape(r#"<script>alert("x") & 'y'</script>"#),
        eq("&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;")
    );
}

#[test]
fn given_plain_text_when_escaped_then_unchanged() {
    assert_that!(escape("hello world"), eq("hello world"));
}

#[test]
fn given_event_when_rendered_then_prepended_out_of_band() {
    let event = PostEvent::new(PostId::new(42), "alice", "<b>hi</b>");

    let html = pages::timeline_post(&event);

    assert_that!(html, starts_with(r#"<div id="timeline" hx-swap-oob="afterbegin">"#));
    assert_that!(html, contains_substring(r#"id="post-42""#));
    assert_that!(html, contains_substring("&lt;b&gt;hi&lt;/b&gt;"));
    assert_that!(html, not(contains_substring("<b>")));
}

#[test]
fn given_posts_when_snapshot_rendered_then_timeline_replaced_in_order() {
    let posts = vec![
        PostEvent::new(PostId::new(2), "bob", "second"),
        PostEvent::new(PostId::new(1), "alice", "first"),
    ];

    let html = pages::timeline_snapshot(&posts);

    assert_that!(html, starts_with(r#"<div id="timeline" hx-swap-oob="true">"#));
    let second = html.find("second").unwrap();
    let first = html.find("first").unwrap();
    assert!(second < first);
}

#[test]
fn given_field_errors_when_form_rendered_then_messages_and_value_shown() {
    let form = PostForm::new("ab");
    let errors = form.validate();

    let html = pages::add_post_form(&form, &errors, "");

    assert_that!(html, contains_substring("too short"));
    assert_that!(html, contains_substring(r#"value="ab""#));
    assert_that!(html, not(contains_substring("success")));
}

#[test]
fn given_success_message_when_form_rendered_then_empty_form_with_message() {
    let html = pages::add_post_form(
        &PostForm::default(),
        &FieldErrors::new(),
        "Post created successfully! (ID: 7)",
    );

    assert_that!(html, contains_substring(r#"value="""#));
    assert_that!(html, contains_substring("Post created successfully! (ID: 7)"));
}

#[test]
fn given_username_when_home_rendered_then_timeline_socket_wired() {
    let html = pages::home_page("alice");

    assert_that!(html, contains_substring(r#"ws-connect="/timeline""#));
    assert_that!(html, contains_substring(r#"hx-post="/add-post""#));
    assert_that!(html, contains_substring("alice"));
}

#[test]
fn given_error_when_login_rendered_then_error_shown() {
    assert_that!(pages::login_page("login failed"), contains_substring("login failed"));
    assert_that!(pages::login_page(""), not(contains_substring("class=\"error\"")));
}
