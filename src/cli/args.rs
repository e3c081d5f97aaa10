//! Command line argument parsing.
//!
//! Every input can also come from the environment using the GitHub Actions
//! convention (`INPUT_<NAME>`), so the binary works unchanged as an action step.

use clap::Parser;
use std::fmt;
use std::path::PathBuf;

use crate::error::{CliError, Result};
use crate::pipeline::locator::DEFAULT_PROGRAM_FILES_X86;
use crate::pipeline::{PipelineEnvironment, RawInputs};

/// Sign a Visual Studio extension with VsixSignTool
#[derive(Parser)]
#[command(
    name = "vsix_signer",
    version,
    about = "Sign a .vsix package with VsixSignTool",
    long_about = "Locates VsixSignTool.exe inside a Visual Studio installation (found with vswhere) and signs a .vsix package with a PFX certificate.

Usage:
  vsix_signer --vsix-path out/ext.vsix --sign-certificate-path cert.pfx --sign-password <PASSWORD>
  vsix_signer --vs-version \"[17.0,18.0)\" --vs-prerelease true ...

Relative paths are tried as given, then under the workspace root.
Exit code 0 = VsixSignTool ran and reported success."
)]
pub struct Args {
    /// Visual Studio version range passed to vswhere, or "latest"
    #[arg(long, env = "INPUT_VS-VERSION", value_name = "VERSION")]
    pub vs_version: Option<String>,

    /// Include prerelease Visual Studio installations ("true" to enable)
    #[arg(long, env = "INPUT_VS-PRERELEASE", value_name = "BOOL")]
    pub vs_prerelease: Option<String>,

    /// Password for the signing certificate
    #[arg(long, env = "INPUT_SIGN-PASSWORD", value_name = "PASSWORD", hide_env_values = true)]
    pub sign_password: Option<String>,

    /// The .vsix package to sign
    #[arg(long, env = "INPUT_VSIX-PATH", value_name = "PATH")]
    pub vsix_path: Option<String>,

    /// The PFX signing certificate
    #[arg(long, env = "INPUT_SIGN-CERTIFICATE-PATH", value_name = "PATH")]
    pub sign_certificate_path: Option<String>,

    /// Base directory for relative input paths (defaults to the current directory)
    #[arg(long, env = "GITHUB_WORKSPACE", value_name = "DIR")]
    pub workspace: Option<String>,

    /// Program Files (x86) root used to find vswhere when it is not on PATH
    #[arg(long, env = "ProgramFiles(x86)", value_name = "DIR")]
    pub program_files_x86: Option<String>,
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Args")
            .field("vs_version", &self.vs_version)
            .field("vs_prerelease", &self.vs_prerelease)
            .field("sign_password", &self.sign_password.as_ref().map(|_| "***"))
            .field("vsix_path", &self.vsix_path)
            .field("sign_certificate_path", &self.sign_certificate_path)
            .field("workspace", &self.workspace)
            .field("program_files_x86", &self.program_files_x86)
            .finish()
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    inputs: RawInputs,
    environment: PipelineEnvironment,
}

impl RuntimeConfig {
    /// Split arguments into pipeline inputs and host directories.
    ///
    /// Empty directory values count as unset.
    pub fn from_args(args: &Args) -> Result<Self> {
        let workspace_root = match non_empty(&args.workspace) {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir().map_err(|e| CliError::WorkspaceUnavailable {
                reason: e.to_string(),
            })?,
        };

        let program_files_x86 =
            PathBuf::from(non_empty(&args.program_files_x86).unwrap_or(DEFAULT_PROGRAM_FILES_X86));

        Ok(Self {
            inputs: RawInputs {
                vs_version: args.vs_version.clone(),
                vs_prerelease: args.vs_prerelease.clone(),
                sign_password: args.sign_password.clone(),
                vsix_path: args.vsix_path.clone(),
                sign_certificate_path: args.sign_certificate_path.clone(),
            },
            environment: PipelineEnvironment {
                workspace_root,
                program_files_x86,
            },
        })
    }

    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    pub fn environment(&self) -> &PipelineEnvironment {
        &self.environment
    }

    /// Hand the inputs over to the pipeline.
    pub fn into_parts(self) -> (RawInputs, PipelineEnvironment) {
        (self.inputs, self.environment)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
