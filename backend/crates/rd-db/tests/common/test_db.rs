#![allow(dead_code)]

use sqlx::SqlitePool;
use tempfile::TempDir;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    rd_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Creates a file-backed pool with several connections, for concurrency tests.
/// Keep the returned TempDir alive for as long as the pool is used.
pub async fn create_file_pool(max_connections: u32) -> (TempDir, SqlitePool) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let pool = rd_db::connect(&dir.path().join("scores.db"), max_connections)
        .await
        .expect("Failed to create file pool");
    (dir, pool)
}

pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}

/// Makes every UPDATE on `users` fail, simulating a store write failure
pub async fn install_failing_update_trigger(pool: &SqlitePool) {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query(
        r#"
            CREATE TRIGGER fail_user_updates BEFORE UPDATE ON users
            BEGIN
                SELECT RAISE(ABORT, 'simulated store failure');
            END
        "#,
    )
    .execute(pool)
    .await
    .expect("Failed to install trigger");
}

pub async fn remove_failing_update_trigger(pool: &SqlitePool) {
    sqlx::query("DROP TRIGGER IF EXISTS fail_user_updates")
        .execute(pool)
        .await
        .expect("Failed to drop trigger");
}
