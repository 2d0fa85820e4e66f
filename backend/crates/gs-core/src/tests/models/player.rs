use crate::Player;

#[test]
fn test_player_trims_name() {
    let player = Player::new("  Alice ").unwrap();
    assert_eq!(player.name(), "Alice");
}

#[test]
fn test_player_rejects_blank_name() {
    assert!(Player::new("").is_err());
    assert!(Player::new("   ").is_err());
}

#[test]
fn test_players_serialize_as_string_array() {
    let players = vec![Player::new("Alice").unwrap(), Player::new("Bob").unwrap()];
    let json = serde_json::to_string(&players).unwrap();
    assert_eq!(json, r#"["Alice","Bob"]"#);
}
