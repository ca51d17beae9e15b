use crate::Outcome;

use std::str::FromStr;

#[test]
fn test_outcome_as_str() {
    assert_eq!(Outcome::Win.as_str(), "win");
    assert_eq!(Outcome::Tie.as_str(), "tie");
    assert_eq!(Outcome::Loss.as_str(), "loss");
}

#[test]
fn test_outcome_from_str() {
    assert_eq!(Outcome::from_str("win").unwrap(), Outcome::Win);
    assert_eq!(Outcome::from_str("tie").unwrap(), Outcome::Tie);
    assert_eq!(Outcome::from_str("loss").unwrap(), Outcome::Loss);
    assert!(Outcome::from_str("draw").is_err());
    assert!(Outcome::from_str("WIN").is_err());
}

#[test]
fn test_outcome_display_matches_as_str() {
    for outcome in Outcome::ALL {
        assert_eq!(outcome.to_string(), outcome.as_str());
    }
}

#[test]
fn test_outcome_from_rolls() {
    assert_eq!(Outcome::from_rolls(6, 1), Outcome::Win);
    assert_eq!(Outcome::from_rolls(3, 3), Outcome::Tie);
    assert_eq!(Outcome::from_rolls(2, 5), Outcome::Loss);
}

#[test]
fn test_outcome_from_rolls_covers_every_pair() {
    for player in 1..=6u8 {
        for opponent in 1..=6u8 {
            let outcome = Outcome::from_rolls(player, opponent);
            let expected = if player > opponent {
                Outcome::Win
            } else if player == opponent {
                Outcome::Tie
            } else {
                Outcome::Loss
            };
            assert_eq!(outcome, expected, "rolls {} vs {}", player, opponent);
        }
    }
}
