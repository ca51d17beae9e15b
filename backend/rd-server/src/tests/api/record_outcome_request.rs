use crate::{ApiError, RecordOutcomeRequest};

use rd_core::Outcome;

fn request(
    outcome: Option<&str>,
    player_roll: Option<u8>,
    opponent_roll: Option<u8>,
) -> RecordOutcomeRequest {
    RecordOutcomeRequest {
        outcome: outcome.map(str::to_string),
        player_roll,
        opponent_roll,
    }
}

#[test]
fn test_named_outcome_parsed() {
    assert_eq!(
        request(Some("loss"), None, None).into_outcome().unwrap(),
        Outcome::Loss
    );
}

#[test]
fn test_rolls_decide_outcome() {
    assert_eq!(
        request(None, Some(6), Some(2)).into_outcome().unwrap(),
        Outcome::Win
    );
    assert_eq!(
        request(None, Some(3), Some(3)).into_outcome().unwrap(),
        Outcome::Tie
    );
    assert_eq!(
        request(None, Some(1), Some(4)).into_outcome().unwrap(),
        Outcome::Loss
    );
}

#[test]
fn test_out_of_range_roll_rejected() {
    let result = request(None, Some(7), Some(2)).into_outcome();

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[test]
fn test_unknown_outcome_is_validation_error() {
    let result = request(Some("draw"), None, None).into_outcome();

    assert!(matches!(result, Err(ApiError::Service { .. })));
}

#[test]
fn test_both_forms_rejected() {
    let result = request(Some("win"), Some(6), Some(1)).into_outcome();

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}
