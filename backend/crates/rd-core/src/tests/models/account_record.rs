use crate::{AccountRecord, DEFAULT_XP_LEVEL, Identity, LeaderboardEntry, Outcome};

fn test_identity() -> Identity {
    Identity::new("player@example.com".to_string(), "Player One".to_string())
}

#[test]
fn test_account_record_initial_is_zeroed() {
    let identity = test_identity();
    let record = AccountRecord::initial(&identity);

    assert_eq!(record.identity_id, identity.id);
    assert_eq!(record.display_name, "Player One");
    assert_eq!(record.matches_played, 0);
    assert_eq!(record.wins, 0);
    assert_eq!(record.ties, 0);
    assert_eq!(record.losses, 0);
    assert_eq!(record.xp_level, DEFAULT_XP_LEVEL);
    assert!(record.is_consistent());
}

#[test]
fn test_account_record_apply_outcome_keeps_totals_consistent() {
    let mut record = AccountRecord::initial(&test_identity());

    let rounds = [
        Outcome::Win,
        Outcome::Loss,
        Outcome::Tie,
        Outcome::Win,
        Outcome::Win,
    ];
    for outcome in rounds {
        record.apply_outcome(outcome);
        assert!(record.is_consistent());
    }

    assert_eq!(record.matches_played, 5);
    assert_eq!(record.wins, 3);
    assert_eq!(record.ties, 1);
    assert_eq!(record.losses, 1);
    assert_eq!(record.xp_level, DEFAULT_XP_LEVEL);
}

#[test]
fn test_account_record_is_consistent_detects_mismatch() {
    let mut record = AccountRecord::initial(&test_identity());
    record.wins = 2;

    assert!(!record.is_consistent());
}

#[test]
fn test_leaderboard_entry_from_record() {
    let mut record = AccountRecord::initial(&test_identity());
    record.apply_outcome(Outcome::Win);
    record.apply_outcome(Outcome::Loss);

    let entry = LeaderboardEntry::from(&record);

    assert_eq!(entry.display_name, "Player One");
    assert_eq!(entry.matches_played, 2);
    assert_eq!(entry.wins, 1);
    assert_eq!(entry.ties, 0);
    assert_eq!(entry.losses, 1);
}
