use crate::{Player, RosterResult};

#[test]
fn test_player_count_only_for_rosters() {
    let roster = RosterResult::Players(vec![
        Player::new("Alice").unwrap(),
        Player::new("Alice").unwrap(),
    ]);

    assert_eq!(roster.player_count(), Some(2));
    assert_eq!(RosterResult::Ignored.player_count(), None);
    assert_eq!(RosterResult::error("boom").player_count(), None);
}

#[test]
fn test_labels() {
    assert_eq!(RosterResult::Players(Vec::new()).label(), "players");
    assert_eq!(RosterResult::Ignored.label(), "ignored");
    assert_eq!(RosterResult::error("boom").label(), "error");
}
