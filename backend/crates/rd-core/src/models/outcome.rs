use crate::{CoreError, Result as CoreErrorResult};

use std::cmp::Ordering;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Result of one completed round from the tracked player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Tie,
    Loss,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Win, Outcome::Tie, Outcome::Loss];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Tie => "tie",
            Self::Loss => "loss",
        }
    }

    /// Resolve a two-dice round: the higher die wins, equal dice tie.
    pub fn from_rolls(player: u8, opponent: u8) -> Self {
        match player.cmp(&opponent) {
            Ordering::Greater => Self::Win,
            Ordering::Equal => Self::Tie,
            Ordering::Less => Self::Loss,
        }
    }
}

impl FromStr for Outcome {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "win" => Ok(Self::Win),
            "tie" => Ok(Self::Tie),
            "loss" => Ok(Self::Loss),
            _ => Err(CoreError::InvalidOutcome {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
