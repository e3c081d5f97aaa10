//! Top-level error types for the signer binary.
//!
//! Pipeline failures keep their own taxonomy in [`crate::pipeline::Error`];
//! this module adds the errors that can happen around it.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, SignerError>;

/// Main error type for a signer run
#[derive(Error, Debug)]
pub enum SignerError {
    /// CLI argument and environment errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// A pipeline stage failed
    #[error(transparent)]
    Pipeline(#[from] crate::pipeline::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// No workspace root was given and the current directory is unusable
    #[error("Cannot determine workspace root: {reason}")]
    WorkspaceUnavailable {
        /// Reason for the error
        reason: String,
    },
}
