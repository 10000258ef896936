use crate::Result as DbErrorResult;
use crate::password::{hash_password, verify_password};

use chrono::Utc;
use log::debug;
use sqlx::SqlitePool;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a user. Returns false when the username is already taken.
    pub async fn create(&self, username: &str, password: &str) -> DbErrorResult<bool> {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO users (username, password_hash, created_at) VALUES (?, ?, ?)",
        )
        .bind(username)
        .bind(hash_password(username, password))
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Create `user0`..`user{count-1}` in one transaction. Existing users are left alone.
    pub async fn seed_demo_users(&self, count: u32, password: &str) -> DbErrorResult<u64> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now().timestamp();
        let mut created = 0;

        for i in 0..count {
            let username = format!("user{i}");
            let result = sqlx::query(
                "INSERT OR IGNORE INTO users (username, password_hash, created_at) VALUES (?, ?, ?)",
            )
            .bind(&username)
            .bind(hash_password(&username, password))
            .bind(now)
            .execute(&mut *tx)
            .await?;
            created += result.rows_affected();
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Check credentials. Returns the canonical username on success.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> DbErrorResult<Option<String>> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT username, password_hash FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some((name, stored_hash)) if verify_password(&name, password, &stored_hash) => {
                Ok(Some(name))
            }
            Some(_) => {
                debug!("Password mismatch for {username}");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    pub async fn exists(&self, username: &str) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
