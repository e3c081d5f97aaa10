//! Sign Visual Studio extension packages with VsixSignTool.
//!
//! VsixSignTool ships inside the Visual Studio SDK, so its location depends on
//! where Visual Studio is installed. This crate asks `vswhere.exe` for the
//! installation, derives the tool path, and runs it against a `.vsix` file.
//!
//! It can be used both as a CLI tool (and GitHub Actions step) and as a library.

pub mod cli;
pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use error::{CliError, Result, SignerError};
pub use pipeline::{Platform, PipelineEnvironment, RawInputs, SigningRequest};
