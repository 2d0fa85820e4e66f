mod config;
mod container_config;
mod error;
mod log_level;
mod logging_config;
mod polling_config;
mod rcon_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use container_config::ContainerConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use polling_config::PollingConfig;
pub use rcon_config::RconConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "GS_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".gs";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;

const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;
const MIN_SSE_KEEP_ALIVE_SECS: u64 = 1;
const MAX_SSE_KEEP_ALIVE_SECS: u64 = 300;

const DEFAULT_CONTAINER_NAME: &str = "server-1";
const DEFAULT_DOCKER_BINARY: &str = "docker";

const DEFAULT_RCON_HOST: &str = "127.0.0.1";
const DEFAULT_RCON_PORT: u16 = 27015;
const DEFAULT_RCON_BINARY: &str = "rcon";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
