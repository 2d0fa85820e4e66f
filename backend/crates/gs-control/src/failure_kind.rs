/// Why an external command failed, as far as the caller needs to know
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The container engine does not know the container
    NoSuchContainer,
    /// The query tool could not reach the server's query port
    ConnectionRefused,
    /// The executable could not be found or invoked
    ToolMissing,
    /// The command exceeded its time budget
    TimedOut,
    Other,
}

impl FailureKind {
    /// Classify a non-zero exit.
    ///
    /// Exit codes 126/127 are the shell/engine convention for "cannot invoke"
    /// and "not found". Anything else falls back to matching the tool's
    /// output text, case-insensitively.
    pub fn classify(exit_code: Option<i32>, stdout: &str, stderr: &str) -> Self {
        if matches!(exit_code, Some(126) | Some(127)) {
            return Self::ToolMissing;
        }

        let text = format!("{}\n{}", stderr, stdout).to_lowercase();

        if text.contains("no such container") || text.contains("no such object") {
            Self::NoSuchContainer
        } else if text.contains("connection refused") {
            Self::ConnectionRefused
        } else {
            Self::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoSuchContainer => "no_such_container",
            Self::ConnectionRefused => "connection_refused",
            Self::ToolMissing => "tool_missing",
            Self::TimedOut => "timed_out",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
