//! Visual Studio installation discovery via vswhere.
//!
//! vswhere is asked for the newest installation that carries MSBuild and
//! prints its `installationPath`. VsixSignTool lives at a fixed location
//! below that root, inside the VS SDK.

use std::path::{Path, PathBuf};

use super::error::{Error, Result};
use super::host::{CommandInvocation, Host, join_windows};
use super::locator::DiscoveryToolLocation;
use super::request::{SigningRequest, VersionConstraint};

/// VsixSignTool relative to an installation root.
pub const VSIXSIGNTOOL_RELATIVE: &str =
    "vssdk\\VisualStudioIntegration\\tools\\bin\\vsixsigntool.exe";

/// Component every accepted installation must include.
pub const REQUIRED_COMPONENT: &str = "Microsoft.Component.MSBuild";

/// One installation root as printed by vswhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallationRecord {
    root: String,
}

impl InstallationRecord {
    /// Interpret one line of vswhere output; blank lines carry no record.
    pub fn from_line(line: &str) -> Option<Self> {
        let root = line.trim();
        if root.is_empty() {
            return None;
        }
        Some(Self {
            root: root.to_string(),
        })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Where VsixSignTool should be inside this installation.
    pub fn signing_tool_path(&self) -> PathBuf {
        join_windows(&self.root, VSIXSIGNTOOL_RELATIVE)
    }
}

/// Existence-checked path to VsixSignTool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningToolLocation(PathBuf);

impl SigningToolLocation {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Build the vswhere call for `request`.
pub fn build_invocation(
    location: &DiscoveryToolLocation,
    request: &SigningRequest,
) -> CommandInvocation {
    let mut invocation = CommandInvocation::new(location.path())
        .arg("-products")
        .arg("*")
        .arg("-requires")
        .arg(REQUIRED_COMPONENT)
        .arg("-property")
        .arg("installationPath")
        .arg("-latest");

    if request.allow_prerelease {
        invocation = invocation.arg("-prerelease");
    }

    if let VersionConstraint::Range(range) = &request.version_constraint {
        invocation = invocation.arg("-version").arg(format!("\"{range}\""));
    }

    invocation
}

/// Ask vswhere for the installation root and derive the VsixSignTool path.
pub async fn discover<H: Host>(
    host: &H,
    location: &DiscoveryToolLocation,
    request: &SigningRequest,
) -> Result<SigningToolLocation> {
    let invocation = build_invocation(location, request);
    log::debug!("Running {}", invocation);

    let output = host
        .run(&invocation)
        .await
        .map_err(|error| Error::CommandFailed {
            command: invocation.to_string(),
            error,
        })?;

    if !output.success() {
        let reason = match output.code {
            Some(code) => format!("vswhere exited with code {code}"),
            None => "vswhere was terminated".to_string(),
        };
        let stderr = output.stderr.trim();
        return Err(Error::DiscoveryFailure {
            reason: if stderr.is_empty() {
                reason
            } else {
                format!("{reason}: {stderr}")
            },
        });
    }

    match resolve_output(host, &output.stdout)? {
        Some(tool) => {
            log::info!("✓ VsixSignTool available at {}", tool.path().display());
            Ok(tool)
        }
        None => Err(Error::DiscoveryFailure {
            reason: format!(
                "no installation matched (version: {}, prerelease: {})",
                match &request.version_constraint {
                    VersionConstraint::Latest => "latest",
                    VersionConstraint::Range(range) => range.as_str(),
                },
                request.allow_prerelease
            ),
        }),
    }
}

/// Walk vswhere's stdout line by line. The last resolved line wins; any line
/// whose installation lacks VsixSignTool fails immediately.
pub fn resolve_output<H: Host>(host: &H, stdout: &str) -> Result<Option<SigningToolLocation>> {
    let mut found = None;

    for record in stdout.lines().filter_map(InstallationRecord::from_line) {
        let tool_path = record.signing_tool_path();
        if !host.exists(&tool_path) {
            return Err(Error::ToolPathUnresolved { path: tool_path });
        }
        log::debug!("Installation {} provides {}", record.root(), tool_path.display());
        found = Some(SigningToolLocation::new(tool_path));
    }

    Ok(found)
}
