#![allow(dead_code)]

use tl_db::{UserRepository, create_pool, run_migrations};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let pool = create_pool(None)
        .await
        .expect("Failed to create test pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a user so posts can reference it
pub async fn create_test_user(pool: &SqlitePool, username: &str) {
    UserRepository::new(pool.clone())
        .create(username, "password")
        .await
        .expect("Failed to create test user");
}
