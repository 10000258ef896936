//! Cookie sessions.
//!
//! The cookie only carries a random token; usernames never leave the server.

use crate::AppState;

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{extract::FromRequestParts, response::Redirect};
use http::{HeaderMap, header, request::Parts};
use log::debug;
use tokio::sync::RwLock;
use uuid::Uuid;

struct Session {
    username: String,
    expires_at: Instant,
}

impl Session {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

/// In-memory session table keyed by token
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Start a session and return its token. Expired sessions are purged on the way.
    pub async fn create(&self, username: impl Into<String>) -> String {
        let token = Uuid::new_v4().simple().to_string();
        let now = Instant::now();

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, session| !session.is_expired(now));
        sessions.insert(
            token.clone(),
            Session {
                username: username.into(),
                expires_at: now + self.ttl,
            },
        );

        token
    }

    /// Username behind a live session
    pub async fn username(&self, token: &str) -> Option<String> {
        let now = Instant::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(session) if !session.is_expired(now) => {
                    return Some(session.username.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        debug!("Session expired");
        self.sessions.write().await.remove(token);
        None
    }

    pub async fn remove(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    /// Resolve the session cookie in `headers`
    pub async fn user_from_headers(&self, headers: &HeaderMap, cookie_name: &str) -> Option<String> {
        let token = session_token(headers, cookie_name)?;
        self.username(&token).await
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Value of cookie `cookie_name`, if the request carries one
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, value)| value.to_string())
}

/// `Set-Cookie` value starting a session
pub fn session_cookie(cookie_name: &str, token: &str, ttl: Duration) -> String {
    format!(
        "{cookie_name}={token}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        ttl.as_secs()
    )
}

/// `Set-Cookie` value telling the browser to forget the session
pub fn expired_cookie(cookie_name: &str) -> String {
    format!("{cookie_name}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// Username of the logged-in user. Anonymous requests are sent to `/login`.
pub struct CurrentUser(pub String);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Redirect;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match state
                .sessions
                .user_from_headers(&parts.headers, state.cookie_name())
                .await
            {
                Some(username) => Ok(CurrentUser(username)),
                None => {
                    debug!("No session for {}, redirecting to login", parts.uri.path());
                    Err(Redirect::to("/login"))
                }
            }
        }
    }
}
