use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_RCON_BINARY, DEFAULT_RCON_HOST, DEFAULT_RCON_PORT,
};

use serde::Deserialize;

/// Roster query settings.
///
/// The password is optional at startup; roster queries report an error
/// result until it is set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RconConfig {
    pub password: Option<String>,
    /// Query address as seen from inside the container
    pub host: String,
    pub port: u16,
    /// RCON client executable inside the container
    pub binary: String,
}

impl Default for RconConfig {
    fn default() -> Self {
        Self {
            password: None,
            host: String::from(DEFAULT_RCON_HOST),
            port: DEFAULT_RCON_PORT,
            binary: String::from(DEFAULT_RCON_BINARY),
        }
    }
}

impl RconConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.port == 0 {
            return Err(ConfigError::rcon("rcon.port cannot be 0"));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::rcon("rcon.host cannot be empty"));
        }

        if self.binary.trim().is_empty() {
            return Err(ConfigError::rcon("rcon.binary cannot be empty"));
        }

        Ok(())
    }

    /// `host:port` passed to the RCON client
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
