use crate::{ApiError, ApiResult};

use rd_core::Outcome;
use rd_service::ServiceError;

use std::str::FromStr;

use serde::Deserialize;

const MIN_DIE_FACE: u8 = 1;
const MAX_DIE_FACE: u8 = 6;

/// Request body for recording one completed round.
///
/// Either `outcome` ("win" / "tie" / "loss") or both die faces.
#[derive(Debug, Deserialize)]
pub struct RecordOutcomeRequest {
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub player_roll: Option<u8>,
    #[serde(default)]
    pub opponent_roll: Option<u8>,
}

impl RecordOutcomeRequest {
    pub fn into_outcome(self) -> ApiResult<Outcome> {
        match (self.outcome, self.player_roll, self.opponent_roll) {
            (Some(outcome), None, None) => Outcome::from_str(&outcome)
                .map_err(|e| ApiError::from(ServiceError::from(e))),
            (None, Some(player), Some(opponent)) => {
                for roll in [player, opponent] {
                    if !(MIN_DIE_FACE..=MAX_DIE_FACE).contains(&roll) {
                        return Err(ApiError::bad_request(format!(
                            "Die rolls must be between {} and {}",
                            MIN_DIE_FACE, MAX_DIE_FACE
                        )));
                    }
                }
                Ok(Outcome::from_rolls(player, opponent))
            }
            _ => Err(ApiError::bad_request(
                "Provide either outcome or both player_roll and opponent_roll",
            )),
        }
    }
}
