//! The discovery-then-invoke signing pipeline.
//!
//! Stages run strictly in order and the first failure ends the run:
//!
//! 1. [`platform::check`] - refuse anything but Windows
//! 2. [`SigningRequest::from_raw`] and [`inputs::resolve`] - required inputs and input files
//! 3. [`locator::locate`] - find `vswhere.exe`
//! 4. [`discovery::discover`] - ask vswhere for the installation, derive VsixSignTool
//! 5. [`signing::sign`] - run VsixSignTool
//!
//! # Example
//!
//! ```no_run
//! use vsix_signer::pipeline::{self, Platform, PipelineEnvironment, RawInputs, SystemHost};
//!
//! # async fn example() -> vsix_signer::pipeline::Result<()> {
//! let raw = RawInputs {
//!     sign_password: Some("password".into()),
//!     vsix_path: Some("out/extension.vsix".into()),
//!     sign_certificate_path: Some("cert.pfx".into()),
//!     ..Default::default()
//! };
//! let env = PipelineEnvironment {
//!     workspace_root: "C:\\work".into(),
//!     program_files_x86: "C:\\Program Files (x86)".into(),
//! };
//! pipeline::run(&SystemHost, Platform::current(), raw, &env).await?;
//! # Ok(())
//! # }
//! ```

pub mod discovery;
pub mod error;
pub mod host;
pub mod inputs;
pub mod locator;
pub mod platform;
pub mod request;
pub mod signing;

#[cfg(test)]
mod testing;

use std::path::PathBuf;

pub use discovery::{InstallationRecord, SigningToolLocation};
pub use error::{Error, Result};
pub use host::{CommandInvocation, Host, ProcessOutput, SystemHost};
pub use inputs::ResolvedPaths;
pub use locator::DiscoveryToolLocation;
pub use platform::Platform;
pub use request::{Password, RawInputs, SigningRequest, VersionConstraint};

/// Host directories the pipeline needs besides the inputs.
#[derive(Clone, Debug)]
pub struct PipelineEnvironment {
    /// Base for relative input paths
    pub workspace_root: PathBuf,
    /// Root of the vswhere fallback location
    pub program_files_x86: PathBuf,
}

/// Run every stage in order against `host`.
pub async fn run<H: Host>(
    host: &H,
    platform: Platform,
    raw: RawInputs,
    env: &PipelineEnvironment,
) -> Result<()> {
    platform::check(platform)?;

    let request = SigningRequest::from_raw(raw)?;
    let paths = inputs::resolve(host, &request, &env.workspace_root)?;
    let vswhere = locator::locate(host, &env.program_files_x86)?;
    let tool = discovery::discover(host, &vswhere, &request).await?;
    signing::sign(host, &tool, &paths, &request).await
}
