//! In-memory [`ProcessRunner`] for tests: replays canned replies by
//! matching a substring of the (redacted) command line.

use crate::{ControlError, Invocation, ProcessOutput, ProcessRunner, Result as ControlResult};

use std::collections::VecDeque;
use std::panic::Location;
use std::sync::Mutex;

use async_trait::async_trait;
use error_location::ErrorLocation;

/// Matches the status probe
pub const INSPECT: &str = "container inspect";
/// Matches `compose ... up -d`
pub const COMPOSE_UP: &str = " up -d";
/// Matches `compose ... down`
pub const COMPOSE_DOWN: &str = " down";
/// Matches the roster query
pub const ROSTER: &str = " players";

#[derive(Debug, Clone)]
pub enum ScriptedReply {
    Stdout(String),
    Failure { exit_code: i32, stderr: String },
    SpawnError(std::io::ErrorKind),
    Timeout,
    /// Never completes
    Hang,
}

impl ScriptedReply {
    /// `docker container inspect` output for a running container
    pub fn running(health: Option<&str>) -> Self {
        let state = match health {
            Some(health) => format!(
                r#"{{"Status":"running","Running":true,"Health":{{"Status":"{}","FailingStreak":0}}}}"#,
                health
            ),
            None => r#"{"Status":"running","Running":true}"#.to_string(),
        };
        Self::Stdout(state)
    }

    pub fn healthy() -> Self {
        Self::running(Some("healthy"))
    }

    pub fn starting() -> Self {
        Self::running(Some("starting"))
    }

    pub fn exited() -> Self {
        Self::Stdout(r#"{"Status":"exited","Running":false,"ExitCode":0}"#.to_string())
    }

    pub fn no_such_container(name: &str) -> Self {
        Self::Failure {
            exit_code: 1,
            stderr: format!("Error response from daemon: No such container: {}", name),
        }
    }

    pub fn connection_refused() -> Self {
        Self::Failure {
            exit_code: 1,
            stderr: "Failed to connect to RCON serverdial tcp 127.0.0.1:27015: connect: connection refused"
                .to_string(),
        }
    }

    pub fn roster(names: &[&str]) -> Self {
        let mut out = format!("Players Connected ({}):\n", names.len());
        for name in names {
            out.push_str(&format!("- {}\n", name));
        }
        Self::Stdout(out)
    }

    pub fn ok() -> Self {
        Self::Stdout(String::new())
    }

    pub fn failure(exit_code: i32, stderr: &str) -> Self {
        Self::Failure {
            exit_code,
            stderr: stderr.to_string(),
        }
    }
}

struct Rule {
    pattern: String,
    replies: VecDeque<ScriptedReply>,
}

#[derive(Default)]
struct Script {
    rules: Vec<Rule>,
    calls: Vec<String>,
}

/// Replies are consumed in order; the last reply of a rule repeats forever.
#[derive(Default)]
pub struct ScriptedRunner {
    script: Mutex<Script>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the replies for invocations containing `pattern`.
    pub fn script<I>(&self, pattern: &str, replies: I)
    where
        I: IntoIterator<Item = ScriptedReply>,
    {
        let mut script = self.lock();
        let replies: VecDeque<_> = replies.into_iter().collect();
        match script.rules.iter_mut().find(|rule| rule.pattern == pattern) {
            Some(rule) => rule.replies = replies,
            None => script.rules.push(Rule {
                pattern: pattern.to_string(),
                replies,
            }),
        }
    }

    /// Builder form of [`script`](Self::script)
    pub fn with<I>(self, pattern: &str, replies: I) -> Self
    where
        I: IntoIterator<Item = ScriptedReply>,
    {
        self.script(pattern, replies);
        self
    }

    /// Every command line run so far, secrets redacted
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn count(&self, pattern: &str) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.contains(pattern))
            .count()
    }

    fn next_reply(&self, line: &str) -> Option<ScriptedReply> {
        let mut script = self.lock();
        script.calls.push(line.to_string());

        let rule = script
            .rules
            .iter_mut()
            .find(|rule| line.contains(&rule.pattern))?;
        if rule.replies.len() > 1 {
            rule.replies.pop_front()
        } else {
            rule.replies.front().cloned()
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        // A panicking test thread must not hide the script from the rest
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ProcessRunner for ScriptedRunner {
    async fn run(&self, invocation: &Invocation) -> ControlResult<ProcessOutput> {
        let line = invocation.to_string();
        let reply = self.next_reply(&line);

        match reply {
            Some(ScriptedReply::Stdout(stdout)) => Ok(ProcessOutput::from_stdout(stdout)),
            Some(ScriptedReply::Failure { exit_code, stderr }) => Err(
                ControlError::command_failed(line, Some(exit_code), "", &stderr),
            ),
            Some(ScriptedReply::SpawnError(kind)) => Err(ControlError::Spawn {
                invocation: line,
                source: std::io::Error::from(kind),
                location: ErrorLocation::from(Location::caller()),
            }),
            Some(ScriptedReply::Timeout) => Err(ControlError::Timeout {
                invocation: line,
                timeout_secs: 30,
                location: ErrorLocation::from(Location::caller()),
            }),
            Some(ScriptedReply::Hang) => std::future::pending().await,
            None => Err(ControlError::command_failed(
                line,
                Some(1),
                "",
                "no scripted reply",
            )),
        }
    }
}
