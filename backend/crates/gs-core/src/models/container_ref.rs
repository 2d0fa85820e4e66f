use std::path::{Path, PathBuf};

/// The managed container, addressed by name and compose definition.
///
/// Resolved once at startup. It does not own the container process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    name: String,
    compose_file: PathBuf,
}

impl ContainerRef {
    pub fn new<S: Into<String>, P: Into<PathBuf>>(name: S, compose_file: P) -> Self {
        Self {
            name: name.into(),
            compose_file: compose_file.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compose_file(&self) -> &Path {
        &self.compose_file
    }
}

impl std::fmt::Display for ContainerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.compose_file.display())
    }
}
