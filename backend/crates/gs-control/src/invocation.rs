/// Text shown in place of secret arguments
pub const REDACTED: &str = "********";

#[derive(Clone, PartialEq, Eq)]
enum Arg {
    Plain(String),
    Secret(String),
}

impl Arg {
    fn value(&self) -> &str {
        match self {
            Arg::Plain(value) | Arg::Secret(value) => value,
        }
    }
}

/// A single external command: program plus argument list.
///
/// Arguments are passed to the OS as-is, never through a shell. Secret
/// arguments are redacted from `Display` and `Debug` so an invocation can be
/// logged or put into an error without leaking credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<Arg>,
}

impl Invocation {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg<S: Into<String>>(mut self, value: S) -> Self {
        self.args.push(Arg::Plain(value.into()));
        self
    }

    pub fn secret_arg<S: Into<String>>(mut self, value: S) -> Self {
        self.args.push(Arg::Secret(value.into()));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Real argument values, secrets included. Only for handing to the OS.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(Arg::value)
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            match arg {
                Arg::Plain(value) => write!(f, " {}", value)?,
                Arg::Secret(_) => write!(f, " {}", REDACTED)?,
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invocation({})", self)
    }
}
