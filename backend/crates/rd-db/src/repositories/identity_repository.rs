//! Identity repository backing the local identity provider.

use crate::repositories::account_repository::timestamp;
use crate::{DbError, Result as DbErrorResult};

use rd_core::Identity;

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// An identity together with its stored password hash
#[derive(Debug, Clone)]
pub struct StoredIdentity {
    pub identity: Identity,
    pub password_hash: String,
}

#[derive(Clone)]
pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fails with `DbError::DuplicateKey` when the email is already registered
    pub async fn create(&self, identity: &Identity, password_hash: &str) -> DbErrorResult<()> {
        let created_at = identity.created_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO identities (
                    id, email, display_name, password_hash, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(identity.id.to_string())
        .bind(&identity.email)
        .bind(&identity.display_name)
        .bind(password_hash)
        .bind(created_at)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                DbError::DuplicateKey {
                    message: format!("identity with email {} already exists", identity.email),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            other => DbError::from(other),
        })?;

        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<StoredIdentity>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, display_name, password_hash, created_at
                FROM identities
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(|r| -> DbErrorResult<StoredIdentity> {
                Ok(StoredIdentity {
                    identity: map_identity_row(r)?,
                    password_hash: r.try_get("password_hash")?,
                })
            })
            .transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, display_name, created_at
                FROM identities
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_identity_row).transpose()
    }

    /// Returns `false` when the identity does not exist
    pub async fn update_display_name(&self, id: Uuid, display_name: &str) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE identities
                SET display_name = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(display_name)
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}

fn map_identity_row(r: &SqliteRow) -> DbErrorResult<Identity> {
    let id: String = r.try_get("id")?;
    let created_at: i64 = r.try_get("created_at")?;

    Ok(Identity {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in identities.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        email: r.try_get("email")?,
        display_name: r.try_get("display_name")?,
        created_at: timestamp(created_at, "identities.created_at")?,
    })
}
