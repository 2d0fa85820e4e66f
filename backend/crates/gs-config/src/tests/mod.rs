mod container;
mod server;

use std::env;

use tempfile::TempDir;

/// Variables that would leak into tests from the developer's shell
const CONFIG_ENV_VARS: &[&str] = &[
    "COMPOSE_FILE",
    "CONTAINER_NAME",
    "RCON_PASSWORD",
    "GS_COMPOSE_FILE",
    "GS_CONTAINER_NAME",
    "GS_RCON_PASSWORD",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Isolated config environment: temp GS_CONFIG_DIR and no inherited container vars
pub(crate) struct TestEnv {
    pub(crate) dir: TempDir,
    _guards: Vec<EnvGuard>,
}

impl TestEnv {
    /// Write a compose file into the temp dir and point GS_COMPOSE_FILE at it
    pub(crate) fn with_compose_file(mut self) -> Self {
        let path = self.dir.path().join("compose.yaml");
        std::fs::write(&path, "services: {}\n").unwrap();
        self._guards
            .push(EnvGuard::set("GS_COMPOSE_FILE", path.to_str().unwrap()));
        self
    }
}

pub(crate) fn setup_config_dir() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set("GS_CONFIG_DIR", dir.path().to_str().unwrap())];
    guards.extend(CONFIG_ENV_VARS.iter().map(|key| EnvGuard::remove(key)));
    TestEnv {
        dir,
        _guards: guards,
    }
}
