use crate::{Invocation, RconSettings};

use gs_core::ContainerRef;

/// Template the container engine uses to print the state block as JSON
const STATE_FORMAT: &str = "{{json .State}}";

/// Builds the external command lines for the managed container.
#[derive(Debug, Clone)]
pub struct ContainerCommands {
    container: ContainerRef,
    docker_binary: String,
}

impl ContainerCommands {
    pub fn new<S: Into<String>>(container: ContainerRef, docker_binary: S) -> Self {
        Self {
            container,
            docker_binary: docker_binary.into(),
        }
    }

    pub fn container(&self) -> &ContainerRef {
        &self.container
    }

    /// `docker container inspect --format {{json .State}} <name>`
    pub fn inspect_state(&self) -> Invocation {
        Invocation::new(&self.docker_binary)
            .arg("container")
            .arg("inspect")
            .arg("--format")
            .arg(STATE_FORMAT)
            .arg(self.container.name())
    }

    /// `docker compose -f <file> up -d`
    pub fn compose_up(&self) -> Invocation {
        self.compose().arg("up").arg("-d")
    }

    /// `docker compose -f <file> down`
    pub fn compose_down(&self) -> Invocation {
        self.compose().arg("down")
    }

    /// `docker exec <name> <rcon> -a <addr> -p <password> players`
    pub fn list_players(&self, rcon: &RconSettings, password: &str) -> Invocation {
        Invocation::new(&self.docker_binary)
            .arg("exec")
            .arg(self.container.name())
            .arg(&rcon.binary)
            .arg("-a")
            .arg(&rcon.address)
            .arg("-p")
            .secret_arg(password)
            .arg("players")
    }

    fn compose(&self) -> Invocation {
        Invocation::new(&self.docker_binary)
            .arg("compose")
            .arg("-f")
            .arg(self.container.compose_file().to_string_lossy())
    }
}
