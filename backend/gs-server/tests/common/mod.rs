#![allow(dead_code)]

//! Test infrastructure for gs-server API tests

use gs_control::{
    ContainerCommands, ControlPlane, RconSettings, ScriptedRunner, ShutdownCoordinator,
    StreamSettings,
};
use gs_core::ContainerRef;
use gs_server::{AppState, build_router};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Method, Request},
    response::Response,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const CONTAINER: &str = "server-1";
pub const PASSWORD: &str = "hunter2";

pub struct TestApp {
    pub runner: Arc<ScriptedRunner>,
    pub state: AppState,
}

impl TestApp {
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub async fn send(&self, method: Method, uri: &str) -> Response {
        self.router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

/// Create an app backed by a scripted runner
pub fn create_test_app() -> TestApp {
    create_test_app_with_password(Some(PASSWORD))
}

pub fn create_test_app_with_password(password: Option<&str>) -> TestApp {
    let runner = Arc::new(ScriptedRunner::new());
    let shutdown = ShutdownCoordinator::new();
    let container = ContainerRef::new(CONTAINER, "/srv/game/compose.yaml");

    let control = ControlPlane::new(
        runner.clone(),
        ContainerCommands::new(container.clone(), "docker"),
        RconSettings {
            password: password.map(str::to_string),
            address: "127.0.0.1:27015".to_string(),
            binary: "rcon".to_string(),
        },
        StreamSettings::default(),
        shutdown.clone(),
    );

    TestApp {
        runner,
        state: AppState {
            control,
            shutdown,
            container,
            metrics: None,
            keep_alive: Duration::from_secs(15),
        },
    }
}

pub async fn body_string(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Read SSE frames until the next `data:` payload; None once the stream ends.
pub async fn next_data(body: &mut Body) -> Option<String> {
    while let Some(frame) = body.frame().await {
        let Ok(data) = frame.unwrap().into_data() else {
            continue;
        };
        let text = String::from_utf8(data.to_vec()).unwrap();
        if let Some(payload) = text
            .lines()
            .find_map(|line| line.strip_prefix("data:"))
        {
            return Some(payload.trim().to_string());
        }
    }
    None
}
