//! Integration tests for the CLI client using wiremock mock server

use gs_cli::{Client, WatchTarget};
use gs_core::{CommandResult, Player, RosterResult, Status};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

#[tokio::test]
async fn test_start_no_content_is_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/start"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.start().await.unwrap();

    assert_eq!(result, CommandResult::Success);
}

#[tokio::test]
async fn test_start_conflict_is_ignored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/start"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "Server is already starting or running",
            "code": "CONFLICT"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.start().await.unwrap();

    assert_eq!(result, CommandResult::Ignored);
}

#[tokio::test]
async fn test_stop_internal_error_carries_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/stop"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "`docker compose -f /srv/compose.yaml down` exited with 1: boom",
            "code": "COMMAND_FAILED"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.stop().await.unwrap();

    let CommandResult::Error { detail } = result else {
        panic!("expected error, got {:?}", result);
    };
    assert!(detail.contains("boom"));
}

#[tokio::test]
async fn test_unexpected_status_is_client_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/stop"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.stop().await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("502"));
}

#[tokio::test]
async fn test_status_token_parsed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("starting"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());

    assert_eq!(client.status().await.unwrap(), Status::Starting);
}

#[tokio::test]
async fn test_unknown_status_token_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("sideways"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.status().await;

    assert!(result.unwrap_err().to_string().contains("sideways"));
}

#[tokio::test]
async fn test_players_listed_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Alice", "Bob"])))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.players().await.unwrap();

    assert_eq!(
        result,
        RosterResult::Players(vec![
            Player::new("Alice").unwrap(),
            Player::new("Bob").unwrap()
        ])
    );
}

#[tokio::test]
async fn test_players_conflict_is_ignored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "Server is not accepting roster queries",
            "code": "CONFLICT"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());

    assert_eq!(client.players().await.unwrap(), RosterResult::Ignored);
}

#[tokio::test]
async fn test_watch_yields_each_data_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/presence"))
        .and(header("accept", "text/event-stream"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "data: inactive\n\n:\n\ndata: starting\n\ndata: healthy 2\n\n",
            "text/event-stream",
        ))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let mut payloads = Vec::new();
    client
        .watch(WatchTarget::Presence, |payload| payloads.push(payload.to_string()))
        .await
        .unwrap();

    assert_eq!(payloads, vec!["inactive", "starting", "healthy 2"]);
}
