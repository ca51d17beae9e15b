//! Account repository for the per-identity score records (`users` table).
//!
//! ## Counter updates
//!
//! Score counters are never written as absolute values. Each completed round
//! is one `UPDATE ... SET match_played = match_played + 1, <outcome> = <outcome> + 1`
//! statement, so:
//!
//! - two overlapping rounds for the same identity both land (no lost update),
//! - `match_played` and the outcome counter move together or not at all,
//! - records for different identities never contend on anything but the
//!   SQLite write lock itself.
//!
//! The table CHECK constraint rejects any row where
//! `match_played != match_win_score + match_tie_score + match_loss_score`.

use crate::{DbError, Result as DbErrorResult};

use rd_core::{AccountRecord, LeaderboardEntry, Outcome};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const INCREMENT_WIN_SQL: &str = r#"
    UPDATE users
    SET match_played = match_played + 1,
        match_win_score = match_win_score + 1,
        updated_at = ?
    WHERE identity_id = ?
    RETURNING identity_id, username, match_played, match_win_score,
        match_tie_score, match_loss_score, xp_level, created_at, updated_at
"#;

const INCREMENT_TIE_SQL: &str = r#"
    UPDATE users
    SET match_played = match_played + 1,
        match_tie_score = match_tie_score + 1,
        updated_at = ?
    WHERE identity_id = ?
    RETURNING identity_id, username, match_played, match_win_score,
        match_tie_score, match_loss_score, xp_level, created_at, updated_at
"#;

const INCREMENT_LOSS_SQL: &str = r#"
    UPDATE users
    SET match_played = match_played + 1,
        match_loss_score = match_loss_score + 1,
        updated_at = ?
    WHERE identity_id = ?
    RETURNING identity_id, username, match_played, match_win_score,
        match_tie_score, match_loss_score, xp_level, created_at, updated_at
"#;

#[derive(Clone)]
pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_identity(
        &self,
        identity_id: Uuid,
    ) -> DbErrorResult<Option<AccountRecord>> {
        let row = sqlx::query(
            r#"
                SELECT identity_id, username, match_played, match_win_score,
                    match_tie_score, match_loss_score, xp_level, created_at, updated_at
                FROM users
                WHERE identity_id = ?
            "#,
        )
        .bind(identity_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_account_row).transpose()
    }

    /// Insert a record unless one already exists for the identity.
    /// Returns `true` only for the call that actually created the row.
    pub async fn insert_if_absent(&self, record: &AccountRecord) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                INSERT INTO users (
                    identity_id, username, match_played, match_win_score,
                    match_tie_score, match_loss_score, xp_level, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(identity_id) DO NOTHING
            "#,
        )
        .bind(record.identity_id.to_string())
        .bind(&record.display_name)
        .bind(record.matches_played)
        .bind(record.wins)
        .bind(record.ties)
        .bind(record.losses)
        .bind(record.xp_level)
        .bind(record.created_at.timestamp())
        .bind(record.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Returns `false` when there is no record for the identity
    pub async fn update_display_name(
        &self,
        identity_id: Uuid,
        display_name: &str,
    ) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET username = ?, updated_at = ?
                WHERE identity_id = ?
            "#,
        )
        .bind(display_name)
        .bind(Utc::now().timestamp())
        .bind(identity_id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Atomically count one completed round and return the updated record.
    /// `None` means no record exists for the identity and nothing was written.
    pub async fn record_outcome(
        &self,
        identity_id: Uuid,
        outcome: Outcome,
    ) -> DbErrorResult<Option<AccountRecord>> {
        let sql = match outcome {
            Outcome::Win => INCREMENT_WIN_SQL,
            Outcome::Tie => INCREMENT_TIE_SQL,
            Outcome::Loss => INCREMENT_LOSS_SQL,
        };

        let row = sqlx::query(sql)
            .bind(Utc::now().timestamp())
            .bind(identity_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_account_row).transpose()
    }

    /// Highest win counts first. Order among equal win counts is whatever
    /// SQLite's index scan produces and must not be relied on.
    pub async fn top_by_wins(&self, limit: u32) -> DbErrorResult<Vec<LeaderboardEntry>> {
        let rows = sqlx::query(
            r#"
                SELECT username, match_played, match_win_score,
                    match_tie_score, match_loss_score
                FROM users
                ORDER BY match_win_score DESC
                LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| -> DbErrorResult<LeaderboardEntry> {
                Ok(LeaderboardEntry {
                    display_name: r.try_get("username")?,
                    matches_played: r.try_get("match_played")?,
                    wins: r.try_get("match_win_score")?,
                    ties: r.try_get("match_tie_score")?,
                    losses: r.try_get("match_loss_score")?,
                })
            })
            .collect::<DbErrorResult<Vec<_>>>()
    }
}

fn map_account_row(r: &SqliteRow) -> DbErrorResult<AccountRecord> {
    let identity_id: String = r.try_get("identity_id")?;
    let created_at: i64 = r.try_get("created_at")?;
    let updated_at: i64 = r.try_get("updated_at")?;

    Ok(AccountRecord {
        identity_id: Uuid::parse_str(&identity_id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in users.identity_id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        display_name: r.try_get("username")?,
        matches_played: r.try_get("match_played")?,
        wins: r.try_get("match_win_score")?,
        ties: r.try_get("match_tie_score")?,
        losses: r.try_get("match_loss_score")?,
        xp_level: r.try_get("xp_level")?,
        created_at: timestamp(created_at, "users.created_at")?,
        updated_at: timestamp(updated_at, "users.updated_at")?,
    })
}

#[track_caller]
pub(crate) fn timestamp(ts: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
