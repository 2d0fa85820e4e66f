use crate::{ConfigError, ConfigErrorResult, DEFAULT_CONTAINER_NAME, DEFAULT_DOCKER_BINARY};

use std::path::Path;

use serde::Deserialize;

/// The managed container and the tooling used to drive it
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Path to the compose definition (required)
    pub compose_file: Option<String>,
    /// Container name as created by compose
    pub name: String,
    /// Container engine executable
    pub docker_binary: String,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            compose_file: None,
            name: String::from(DEFAULT_CONTAINER_NAME),
            docker_binary: String::from(DEFAULT_DOCKER_BINARY),
        }
    }
}

impl ContainerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let compose_file = self.compose_file.as_deref().ok_or_else(|| {
            ConfigError::container(
                "container.compose_file is required (set GS_COMPOSE_FILE or COMPOSE_FILE)",
            )
        })?;

        if !Path::new(compose_file).is_file() {
            return Err(ConfigError::container(format!(
                "container.compose_file does not name an existing file: {}",
                compose_file
            )));
        }

        if self.name.trim().is_empty() {
            return Err(ConfigError::container("container.name cannot be empty"));
        }

        if self.docker_binary.trim().is_empty() {
            return Err(ConfigError::container(
                "container.docker_binary cannot be empty",
            ));
        }

        Ok(())
    }
}
