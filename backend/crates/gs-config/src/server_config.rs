use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SSE_KEEP_ALIVE_SECS,
    MAX_SSE_KEEP_ALIVE_SECS, MIN_PORT, MIN_SSE_KEEP_ALIVE_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Interval between SSE keep-alive comments on idle streams
    pub sse_keep_alive_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            sse_keep_alive_secs: DEFAULT_SSE_KEEP_ALIVE_SECS,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 lets the OS pick a free port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host cannot be empty"));
        }

        if self.sse_keep_alive_secs < MIN_SSE_KEEP_ALIVE_SECS
            || self.sse_keep_alive_secs > MAX_SSE_KEEP_ALIVE_SECS
        {
            return Err(ConfigError::server(format!(
                "server.sse_keep_alive_secs must be {}-{}, got {}",
                MIN_SSE_KEEP_ALIVE_SECS, MAX_SSE_KEEP_ALIVE_SECS, self.sse_keep_alive_secs
            )));
        }

        Ok(())
    }
}
