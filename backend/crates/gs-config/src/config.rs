use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, ContainerConfig,
    DEFAULT_CONFIG_DIR, LoggingConfig, PollingConfig, RconConfig, ServerConfig,
};

use gs_core::ContainerRef;

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub container: ContainerConfig,
    pub rcon: RconConfig,
    pub polling: PollingConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for GS_CONFIG_DIR env var, else use ./.gs/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply GS_* (and legacy unprefixed) environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GS_CONFIG_DIR env var > ./.gs/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.container.validate()?;
        self.rcon.validate()?;
        self.polling.validate()?;

        Ok(())
    }

    /// Resolve the managed container reference with an absolute compose path.
    pub fn container_ref(&self) -> ConfigErrorResult<ContainerRef> {
        let compose_file = self
            .container
            .compose_file
            .as_deref()
            .ok_or_else(|| ConfigError::container("container.compose_file is required"))?;

        let resolved = std::path::absolute(compose_file).map_err(|e| ConfigError::Io {
            path: PathBuf::from(compose_file),
            source: e,
        })?;

        Ok(ContainerRef::new(self.container.name.clone(), resolved))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.polling.command_timeout_secs)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (sse keep-alive {}s)",
            self.server.host, self.server.port, self.server.sse_keep_alive_secs
        );
        info!(
            "  container: {} via {} ({})",
            self.container.name,
            self.container.compose_file.as_deref().unwrap_or("<unset>"),
            self.container.docker_binary
        );
        info!(
            "  rcon: {} via {} (password {})",
            self.rcon.address(),
            self.rcon.binary,
            if self.rcon.password.is_some() {
                "set"
            } else {
                "NOT SET, roster queries disabled"
            }
        );
        info!(
            "  polling: status={}s, start grace={}s, start poll={}s, timeout={}s, buffer={}",
            self.polling.status_interval_secs,
            self.polling.start_grace_secs,
            self.polling.start_poll_interval_secs,
            self.polling.command_timeout_secs,
            self.polling.stream_buffer_size
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("GS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("GS_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "GS_SSE_KEEP_ALIVE_SECS",
            &mut self.server.sse_keep_alive_secs,
        );

        // Container
        Self::apply_env_option_string(
            &["GS_COMPOSE_FILE", "COMPOSE_FILE"],
            &mut self.container.compose_file,
        );
        if let Some(name) = Self::first_env(&["GS_CONTAINER_NAME", "CONTAINER_NAME"]) {
            self.container.name = name;
        }
        Self::apply_env_string("GS_DOCKER_BINARY", &mut self.container.docker_binary);

        // Rcon
        Self::apply_env_option_string(
            &["GS_RCON_PASSWORD", "RCON_PASSWORD"],
            &mut self.rcon.password,
        );
        Self::apply_env_string("GS_RCON_HOST", &mut self.rcon.host);
        Self::apply_env_parse("GS_RCON_PORT", &mut self.rcon.port);
        Self::apply_env_string("GS_RCON_BINARY", &mut self.rcon.binary);

        // Polling
        Self::apply_env_parse(
            "GS_STATUS_INTERVAL_SECS",
            &mut self.polling.status_interval_secs,
        );
        Self::apply_env_parse("GS_START_GRACE_SECS", &mut self.polling.start_grace_secs);
        Self::apply_env_parse(
            "GS_START_POLL_INTERVAL_SECS",
            &mut self.polling.start_poll_interval_secs,
        );
        Self::apply_env_parse(
            "GS_COMMAND_TIMEOUT_SECS",
            &mut self.polling.command_timeout_secs,
        );
        Self::apply_env_parse(
            "GS_STREAM_BUFFER_SIZE",
            &mut self.polling.stream_buffer_size,
        );

        // Logging
        Self::apply_env_parse("GS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string(&["GS_LOG_FILE"], &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply the first set variable of `var_names` to an Option<String>.
    /// Empty values are treated as unset.
    fn apply_env_option_string(var_names: &[&str], target: &mut Option<String>) {
        if let Some(val) = Self::first_env(var_names) {
            *target = Some(val);
        }
    }

    fn first_env(var_names: &[&str]) -> Option<String> {
        var_names
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|val| !val.trim().is_empty())
    }
}
