use crate::client::client::unexpected_status;
use crate::{Client, ClientError, WatchTarget, server_url_for};

use gs_config::ServerConfig;

use reqwest::StatusCode;

fn server(host: &str, port: u16) -> ServerConfig {
    ServerConfig {
        host: host.to_string(),
        port,
        ..ServerConfig::default()
    }
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:3000/");
    assert_eq!(client.base_url, "http://localhost:3000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:3000");
    assert_eq!(client.base_url, "http://localhost:3000");
}

#[test]
fn test_wildcard_bind_address_reached_through_loopback() {
    assert_eq!(server_url_for(&server("0.0.0.0", 3000)), "http://127.0.0.1:3000");
    assert_eq!(server_url_for(&server("::", 3001)), "http://[::1]:3001");
}

#[test]
fn test_explicit_bind_address_kept() {
    assert_eq!(server_url_for(&server("10.0.0.5", 8080)), "http://10.0.0.5:8080");
}

#[test]
fn test_watch_target_paths() {
    assert_eq!(WatchTarget::Presence.path(), "/presence");
    assert_eq!(WatchTarget::Status.path(), "/status/stream");
    assert_eq!(WatchTarget::Start.path(), "/start/status");
}

#[test]
fn test_api_error_records_the_calling_line() {
    let line = line!() + 1;
    let err = unexpected_status(
        StatusCode::BAD_GATEWAY,
        r#"{"error": "upstream down", "code": "BAD_GATEWAY"}"#,
    );

    let (code, message, location) = match err {
        ClientError::Api {
            code,
            message,
            location,
        } => (code, message, location),
        other => panic!("expected an API error, got {:?}", other),
    };
    assert_eq!(code, "BAD_GATEWAY");
    assert_eq!(message, "upstream down");
    assert_eq!(location.line, line);
}

#[test]
fn test_unparseable_body_is_unexpected_response() {
    let err = unexpected_status(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");

    assert!(matches!(err, ClientError::UnexpectedResponse { .. }));
    assert!(err.to_string().contains("502"));
}
