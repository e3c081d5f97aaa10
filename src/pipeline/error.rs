//! Error types for the signing pipeline.
//!
//! Every variant is terminal: the orchestrator stops at the first one it sees.
//! None of the messages carry the signing password.

use std::path::PathBuf;
use thiserror::Error;

use super::platform::Platform;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline failure taxonomy
#[derive(Error, Debug)]
pub enum Error {
    /// Host platform is not Windows
    #[error("vsix_signer can only be run on Windows-based runners (current platform: {platform})")]
    PlatformMismatch {
        /// Platform the process is running on
        platform: Platform,
    },

    /// A required input was absent or empty
    #[error("Input required and not supplied: {name}")]
    MissingInput {
        /// Input name as the CI platform knows it
        name: &'static str,
    },

    /// An input file exists neither as given nor under the workspace root
    #[error("No {description} located at: '{}'", path.display())]
    MissingInputFile {
        /// Human readable file role, e.g. "VSIX file"
        description: &'static str,
        /// Last path that was checked
        path: PathBuf,
    },

    /// The installation-discovery helper could not be found
    #[error("This action requires the path to '{tool}' exists (checked: '{}')", path.display())]
    ToolNotFound {
        /// Helper executable name
        tool: &'static str,
        /// Candidate path that failed the existence check
        path: PathBuf,
    },

    /// The discovery helper failed or reported no usable installation
    #[error("Unable to locate a Visual Studio installation with vswhere: {reason}")]
    DiscoveryFailure {
        /// What went wrong
        reason: String,
    },

    /// An installation was reported but the signing tool is not inside it
    #[error(
        "Unable to locate the Visual Studio installation directory / location of VsixSignTool.exe (checked: '{}')",
        path.display()
    )]
    ToolPathUnresolved {
        /// Signing tool path derived from the installation root
        path: PathBuf,
    },

    /// An input path could not be made absolute
    #[error("Failed to resolve absolute path of '{}': {error}", path.display())]
    PathResolution {
        /// Path as it was found on disk
        path: PathBuf,
        /// Underlying IO error, usually an unusable working directory
        #[source]
        error: std::io::Error,
    },

    /// The signing tool ran and exited unsuccessfully
    #[error(
        "VsixSignTool failed for '{}' with {}{}",
        artifact.display(),
        describe_exit(*code),
        describe_output(output)
    )]
    SigningProcessFailure {
        /// Artifact being signed
        artifact: PathBuf,
        /// Exit code, if the process exited normally
        code: Option<i32>,
        /// Trimmed tool diagnostics with the password masked
        output: String,
    },

    /// An external command could not be executed at all
    #[error("Failed to execute {command}: {error}")]
    CommandFailed {
        /// Redacted command line
        command: String,
        /// Underlying IO error
        #[source]
        error: std::io::Error,
    },
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn describe_output(output: &str) -> String {
    if output.is_empty() {
        String::new()
    } else {
        format!(": {output}")
    }
}
