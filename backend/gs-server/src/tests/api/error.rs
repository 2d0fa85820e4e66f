use crate::ApiError;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_conflict_returns_409_with_flat_json_body() {
    let response = ApiError::conflict("Server is not running").into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Server is not running");
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn test_command_failed_returns_500_with_detail() {
    let response =
        ApiError::command_failed("`docker compose -f c.yaml up -d` exited with 1: boom")
            .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "COMMAND_FAILED");
    assert!(json["error"].as_str().unwrap().contains("boom"));
}

#[tokio::test]
async fn test_not_found_returns_404() {
    let response = ApiError::not_found("metrics recorder is not installed").into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_body_omits_source_location() {
    let response = ApiError::conflict("already running").into_response();

    let json = body_json(response).await;

    assert_eq!(json["error"], "already running");
    assert_eq!(json.as_object().unwrap().len(), 2);
}
