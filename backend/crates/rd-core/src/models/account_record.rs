//! Account record - persisted per-user profile and score counters.

use crate::{Identity, Outcome};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Level every account starts (and currently stays) at
pub const DEFAULT_XP_LEVEL: i32 = 1;

/// Profile and score counters for one identity.
///
/// Counters only ever grow, one step per recorded round, and
/// `matches_played == wins + ties + losses` holds for every stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub identity_id: Uuid,
    pub display_name: String,
    pub matches_played: i64,
    pub wins: i64,
    pub ties: i64,
    pub losses: i64,
    /// Not advanced by any operation yet
    pub xp_level: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AccountRecord {
    /// Zero-valued record for a first-time player
    pub fn initial(identity: &Identity) -> Self {
        let now = Utc::now();
        Self {
            identity_id: identity.id,
            display_name: identity.display_name.clone(),
            matches_played: 0,
            wins: 0,
            ties: 0,
            losses: 0,
            xp_level: DEFAULT_XP_LEVEL,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply one completed round in memory.
    /// Stores perform the same step atomically on their side.
    pub fn apply_outcome(&mut self, outcome: Outcome) {
        self.matches_played += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.updated_at = Utc::now();
    }

    pub fn is_consistent(&self) -> bool {
        self.matches_played == self.wins + self.ties + self.losses
            && self.wins >= 0
            && self.ties >= 0
            && self.losses >= 0
    }
}
