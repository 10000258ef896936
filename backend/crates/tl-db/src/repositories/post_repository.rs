use crate::{DbError, Result as DbErrorResult};

use tl_core::{ErrorLocation, PostEvent, PostId};

use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub struct PostRepository {
    pool: SqlitePool,
}

impl PostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a post and return the id storage assigned to it.
    pub async fn create(&self, username: &str, content: &str) -> DbErrorResult<PostEvent> {
        let created_at = Utc::now();

        let result =
            sqlx::query("INSERT INTO posts (username, content, created_at) VALUES (?, ?, ?)")
                .bind(username)
                .bind(content)
                .bind(created_at.timestamp())
                .execute(&self.pool)
                .await?;

        let post_id = PostId::new(result.last_insert_rowid());
        let created_at = truncate_to_seconds(created_at)?;

        Ok(PostEvent::with_timestamp(
            post_id, username, content, created_at,
        ))
    }

    /// Most recent posts, newest first.
    pub async fn list_recent(&self, limit: u32) -> DbErrorResult<Vec<PostEvent>> {
        let rows: Vec<(i64, String, String, i64)> = sqlx::query_as(
            r#"
              SELECT id, username, content, created_at
              FROM posts
              ORDER BY id DESC
              LIMIT ?
              "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, username, content, created_at)| {
                Ok(PostEvent::with_timestamp(
                    PostId::new(id),
                    username,
                    content,
                    from_timestamp(created_at)?,
                ))
            })
            .collect()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Posts are stored with second precision; hand back what a later read would return.
fn truncate_to_seconds(at: DateTime<Utc>) -> DbErrorResult<DateTime<Utc>> {
    from_timestamp(at.timestamp())
}

#[track_caller]
fn from_timestamp(ts: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::CorruptRow {
        table: "posts",
        message: format!("created_at out of range: {ts}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
