#![allow(dead_code)]

use rd_auth::PasswordPolicy;
use rd_core::{Identity, Outcome, Registration};
use rd_db::{AccountRepository, IdentityRepository};
use rd_service::{AccountService, LocalIdentityProvider, ServiceConfig};

use std::sync::Arc;

use sqlx::SqlitePool;
use tempfile::TempDir;

pub const TEST_PASSWORD: &str = "correct-horse";

/// Service wired to SQLite the same way the server wires it
pub fn create_service(pool: &SqlitePool) -> AccountService {
    let identities = LocalIdentityProvider::new(
        IdentityRepository::new(pool.clone()),
        PasswordPolicy::default(),
    );
    let accounts = AccountRepository::new(pool.clone());

    AccountService::new(
        Arc::new(identities),
        Arc::new(accounts),
        ServiceConfig::default(),
    )
}

pub async fn create_test_pool() -> SqlitePool {
    rd_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Keep the returned TempDir alive for as long as the pool is used
pub async fn create_file_pool(max_connections: u32) -> (TempDir, SqlitePool) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let pool = rd_db::connect(&dir.path().join("service.db"), max_connections)
        .await
        .expect("Failed to create file pool");
    (dir, pool)
}

pub async fn register(service: &AccountService, name: &str) -> Identity {
    service
        .register(Registration::new(
            format!("{}@example.com", name.to_lowercase()),
            name,
            TEST_PASSWORD,
        ))
        .await
        .expect("Failed to register")
}

/// Register, initialize and play `wins` winning rounds
pub async fn player_with_wins(service: &AccountService, name: &str, wins: usize) -> Identity {
    let identity = register(service, name).await;
    service
        .load_or_init(identity.id)
        .await
        .expect("Failed to initialize");
    for _ in 0..wins {
        service
            .record_outcome(identity.id, Outcome::Win)
            .await
            .expect("Failed to record win");
    }
    identity
}

/// Makes every UPDATE on `users` fail, simulating a store write failure
pub async fn install_failing_update_trigger(pool: &SqlitePool) {
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
