#![allow(dead_code)]

use rd_core::{AccountRecord, Identity};
use rd_db::{AccountRepository, IdentityRepository};

use sqlx::SqlitePool;

pub const TEST_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g";

/// Creates a test Identity with sensible defaults
pub fn create_test_identity(display_name: &str) -> Identity {
    let email = format!(
        "{}-{}@example.com",
        display_name.to_lowercase().replace(' ', "."),
        uuid::Uuid::new_v4().simple()
    );
    Identity::new(email, display_name.to_string())
}

/// Inserts an identity so account rows satisfy the foreign key
pub async fn insert_test_identity(pool: &SqlitePool, display_name: &str) -> Identity {
    let identity = create_test_identity(display_name);
    IdentityRepository::new(pool.clone())
        .create(&identity, TEST_PASSWORD_HASH)
        .await
        .expect("Failed to create test identity");
    identity
}

/// Inserts an identity plus an account record with the given counters
pub async fn insert_test_account(
    pool: &SqlitePool,
    display_name: &str,
    wins: i64,
    ties: i64,
    losses: i64,
) -> AccountRecord {
    let identity = insert_test_identity(pool, display_name).await;
    let mut record = AccountRecord::initial(&identity);
    record.wins = wins;
    record.ties = ties;
    record.losses = losses;
    record.matches_played = wins + ties + losses;

    AccountRepository::new(pool.clone())
        .insert_if_absent(&record)
        .await
        .expect("Failed to create test account");
    record
}
