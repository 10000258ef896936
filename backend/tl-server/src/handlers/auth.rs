use crate::AppState;
use crate::html::pages;
use crate::session::{expired_cookie, session_cookie, session_token};

use tl_db::UserRepository;

use axum::{
    Form,
    extract::State,
    http::{HeaderMap, HeaderName, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use log::{error, info};
use serde::Deserialize;

const HX_REDIRECT: HeaderName = HeaderName::from_static("hx-redirect");

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// GET / - send visitors to their home page or the login form
pub async fn root(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    match state
        .sessions
        .user_from_headers(&headers, state.cookie_name())
        .await
    {
        Some(_) => Redirect::to("/home"),
        None => Redirect::to("/login"),
    }
}

/// GET /login
pub async fn login_form() -> Html<String> {
    Html(pages::login_page(""))
}

/// POST /login
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let users = UserRepository::new(state.pool.clone());

    match users.authenticate(&form.username, &form.password).await {
        Ok(Some(username)) => {
            info!("User {username} logged in");
            let token = state.sessions.create(username).await;
            let cookie = session_cookie(state.cookie_name(), &token, state.sessions.ttl());

            (
                StatusCode::SEE_OTHER,
                [(header::LOCATION, "/home".to_string()), (header::SET_COOKIE, cookie)],
            )
                .into_response()
        }
        Ok(None) => {
            info!("Failed login for {}", form.username);
            Html(pages::login_page("login failed")).into_response()
        }
        Err(e) => {
            error!("Error during login: {e}");
            Html(pages::login_page("retry later")).into_response()
        }
    }
}

/// GET /logout - drop the session and let htmx navigate back to `/`
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token(&headers, state.cookie_name()) {
        state.sessions.remove(&token).await;
    }

    (
        StatusCode::OK,
        [
            (header::SET_COOKIE, expired_cookie(state.cookie_name())),
            (HX_REDIRECT, "/".to_string()),
        ],
    )
        .into_response()
}
