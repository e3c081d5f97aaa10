//! Boundary between the pipeline and the machine it runs on.
//!
//! The pipeline only ever asks three things of the host: does a path exist,
//! where is an executable on `PATH`, and run this command to completion.
//! [`SystemHost`] answers them for real; tests substitute a recording fake.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

/// One command-line argument, possibly sensitive.
#[derive(Clone)]
struct Argument {
    value: String,
    secret: bool,
}

/// Executable plus ordered arguments for a single external process call.
#[derive(Clone)]
pub struct CommandInvocation {
    program: PathBuf,
    args: Vec<Argument>,
}

impl CommandInvocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument that may appear in logs.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(Argument {
            value: value.into(),
            secret: false,
        });
        self
    }

    /// Append an argument that is masked whenever the command is displayed.
    pub fn secret_arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(Argument {
            value: value.into(),
            secret: true,
        });
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The argument list exactly as the child process receives it.
    pub fn args(&self) -> Vec<&str> {
        self.args.iter().map(|a| a.value.as_str()).collect()
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.program.display())?;
        for arg in &self.args {
            if arg.secret {
                f.write_str(" ***")?;
            } else {
                write!(f, " {}", arg.value)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommandInvocation({self})")
    }
}

/// Captured result of a finished child process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Filesystem, search-path and process primitives used by the pipeline.
#[allow(async_fn_in_trait)]
pub trait Host {
    /// Whether `path` exists right now.
    fn exists(&self, path: &Path) -> bool;

    /// Search `PATH` for `name`; `None` means "not found, use a fallback".
    fn which(&self, name: &str) -> Option<PathBuf>;

    /// Directory that relative paths given as-is are relative to.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Run `invocation` to completion, buffering stdout and stderr.
    async fn run(&self, invocation: &CommandInvocation) -> io::Result<ProcessOutput>;
}

/// The real host.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemHost;

impl Host for SystemHost {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn which(&self, name: &str) -> Option<PathBuf> {
        match which::which(name) {
            Ok(path) => {
                log::debug!("Found {} at: {}", name, path.display());
                Some(path)
            }
            Err(e) => {
                log::debug!("{} not found in PATH: {}", name, e);
                None
            }
        }
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    async fn run(&self, invocation: &CommandInvocation) -> io::Result<ProcessOutput> {
        let mut command = Command::new(invocation.program());
        for arg in invocation.args() {
            push_arg(&mut command, arg);
        }
        command.stdin(Stdio::null());

        let output = command.output().await?;

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Pre-quoted arguments go through untouched so the child sees the quotes
/// the same way a shell-built command line would deliver them.
#[cfg(windows)]
fn push_arg(command: &mut Command, arg: &str) {
    if arg.len() >= 2 && arg.starts_with('"') && arg.ends_with('"') {
        command.raw_arg(arg);
    } else {
        command.arg(arg);
    }
}

#[cfg(not(windows))]
fn push_arg(command: &mut Command, arg: &str) {
    command.arg(arg);
}

/// Wrap a path in double quotes.
pub fn quoted(path: &Path) -> String {
    format!("\"{}\"", path.display())
}

/// Join Windows path fragments with `\`, independent of the host separator.
pub fn join_windows(root: &str, relative: &str) -> PathBuf {
    let root = root.trim_end_matches(['\\', '/']);
    let relative = relative.trim_start_matches(['\\', '/']);
    PathBuf::from(format!("{root}\\{relative}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_masks_secret_arguments() {
        let invocation = CommandInvocation::new("tool.exe")
            .arg("sign")
            .arg("/p")
            .secret_arg("hunter2")
            .arg("\"a.vsix\"");

        assert_eq!(invocation.args(), vec!["sign", "/p", "hunter2", "\"a.vsix\""]);
        let shown = invocation.to_string();
        assert_eq!(shown, "\"tool.exe\" sign /p *** \"a.vsix\"");
        assert!(!format!("{invocation:?}").contains("hunter2"));
    }

    #[test]
    fn join_windows_uses_backslashes() {
        assert_eq!(
            join_windows("C:\\VS\\2022", "vssdk\\tool.exe"),
            PathBuf::from("C:\\VS\\2022\\vssdk\\tool.exe")
        );
        assert_eq!(
            join_windows("C:\\VS\\2022\\", "\\vssdk\\tool.exe"),
            PathBuf::from("C:\\VS\\2022\\vssdk\\tool.exe")
        );
    }

    #[test]
    fn quoting_wraps_the_whole_path() {
        assert_eq!(quoted(Path::new("C:\\a b\\c.pfx")), "\"C:\\a b\\c.pfx\"");
    }

    #[test]
    fn success_means_exit_code_zero() {
        let ok = ProcessOutput {
            code: Some(0),
            ..Default::default()
        };
        let failed = ProcessOutput {
            code: Some(1),
            ..Default::default()
        };
        let killed = ProcessOutput::default();
        assert!(ok.success());
        assert!(!failed.success());
        assert!(!killed.success());
    }
}
