use crate::{CliClientResult, ClientError, SseDecoder, WatchTarget};

use gs_config::ServerConfig;
use gs_core::{CommandResult, Player, RosterResult, Status};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, Response, StatusCode};
use serde::Deserialize;

/// Error body returned by gs-server
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    code: Option<String>,
}

/// HTTP client for the gs-server API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// POST /start
    pub async fn start(&self) -> CliClientResult<CommandResult> {
        let response = self.request(Method::POST, "/start").send().await?;
        command_result(response).await
    }

    /// POST /stop
    pub async fn stop(&self) -> CliClientResult<CommandResult> {
        let response = self.request(Method::POST, "/stop").send().await?;
        command_result(response).await
    }

    /// GET /status
    pub async fn status(&self) -> CliClientResult<Status> {
        let response = self.request(Method::GET, "/status").send().await?;
        if response.status() != StatusCode::OK {
            let (status, body) = unexpected_reply(response).await;
            return Err(unexpected_status(status, &body));
        }

        let body = response.text().await?;
        body.parse().map_err(|_| {
            ClientError::unexpected(format!("unknown status '{}'", body.trim()))
        })
    }

    /// GET /players
    pub async fn players(&self) -> CliClientResult<RosterResult> {
        let response = self.request(Method::GET, "/players").send().await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.bytes().await?;
                let players: Vec<Player> = serde_json::from_slice(&body)?;
                Ok(RosterResult::Players(players))
            }
            StatusCode::CONFLICT => Ok(RosterResult::Ignored),
            StatusCode::INTERNAL_SERVER_ERROR => {
                Ok(RosterResult::error(error_message(response).await))
            }
            _ => {
                let (status, body) = unexpected_reply(response).await;
                Err(unexpected_status(status, &body))
            }
        }
    }

    /// Follow an SSE endpoint, calling `on_event` with each payload until
    /// the server ends the stream.
    pub async fn watch<F>(&self, target: WatchTarget, mut on_event: F) -> CliClientResult<()>
    where
        F: FnMut(&str),
    {
        let mut response = self
            .request(Method::GET, target.path())
            .header(reqwest::header::ACCEPT, "text/event-stream")
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            let (status, body) = unexpected_reply(response).await;
            return Err(unexpected_status(status, &body));
        }

        let mut decoder = SseDecoder::new();
        while let Some(chunk) = response.chunk().await? {
            for payload in decoder.push(&chunk) {
                on_event(&payload);
            }
        }

        Ok(())
    }
}

/// Base URL for a server bound per `server`. Wildcard bind addresses are
/// reached through loopback.
pub fn server_url_for(server: &ServerConfig) -> String {
    let host = match server.host.as_str() {
        "0.0.0.0" | "" => "127.0.0.1",
        "::" | "[::]" => "[::1]",
        host => host,
    };
    format!("http://{}:{}", host, server.port)
}

async fn command_result(response: Response) -> CliClientResult<CommandResult> {
    match response.status() {
        StatusCode::NO_CONTENT | StatusCode::OK | StatusCode::ACCEPTED => {
            Ok(CommandResult::Success)
        }
        StatusCode::CONFLICT => Ok(CommandResult::Ignored),
        StatusCode::INTERNAL_SERVER_ERROR => {
            Ok(CommandResult::error(error_message(response).await))
        }
        _ => {
            let (status, body) = unexpected_reply(response).await;
            Err(unexpected_status(status, &body))
        }
    }
}

/// Pull the `error` field out of an error body, falling back to raw text
async fn error_message(response: Response) -> String {
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return format!("unreadable error body: {}", e),
    };

    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.error,
        Err(_) => body,
    }
}

/// Status and body of a response the client has no mapping for
async fn unexpected_reply(response: Response) -> (StatusCode, String) {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    (status, body)
}

#[track_caller]
pub(crate) fn unexpected_status(status: StatusCode, body: &str) -> ClientError {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return ClientError::Api {
            code: parsed.code.unwrap_or_else(|| status.as_u16().to_string()),
            message: parsed.error,
            location: ErrorLocation::from(Location::caller()),
        };
    }

    ClientError::unexpected(format!("HTTP {}: {}", status, body.trim()))
}
