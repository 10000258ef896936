use crate::PostId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post that has been persisted and is ready to be shown to live timelines.
///
/// Fields are private: once built, an event is only ever read. Fan-out shares
/// one instance between all subscribers behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEvent {
    post_id: PostId,
    username: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl PostEvent {
    pub fn new(post_id: PostId, username: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_timestamp(post_id, username, content, Utc::now())
    }

    pub fn with_timestamp(
        post_id: PostId,
        username: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            post_id,
            username: username.into(),
            content: content.into(),
            created_at,
        }
    }

    /// Sequence hint handed out by storage
    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    /// Identity of the producer
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
