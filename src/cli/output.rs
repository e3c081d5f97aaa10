//! Failure reporting for terminals and CI logs.

use std::io::{self, Write};

/// Writes the single user-facing failure message of a run.
#[derive(Debug, Clone)]
pub struct OutputManager {
    /// Emit GitHub Actions workflow commands
    github_actions: bool,
}

impl OutputManager {
    pub fn new(github_actions: bool) -> Self {
        Self { github_actions }
    }

    /// Detect GitHub Actions from `GITHUB_ACTIONS=true`.
    pub fn from_env() -> Self {
        Self::new(std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true"))
    }

    /// Report a terminal failure.
    ///
    /// Always writes `Error: <message>` to stderr; on GitHub Actions also
    /// writes an `::error::` annotation to stdout so the step is marked failed.
    pub fn failure(&self, message: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "Error: {message}")?;
        if self.github_actions {
            writeln!(io::stdout().lock(), "{}", error_annotation(message))?;
        }
        Ok(())
    }
}

/// `::error::<message>` with the workflow-command escapes applied.
pub fn error_annotation(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{escaped}")
}
