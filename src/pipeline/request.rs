//! The immutable signing request threaded through every pipeline stage.

use std::fmt;
use std::path::PathBuf;

use super::error::{Error, Result};

/// Names of the required inputs as declared by the action.
pub const INPUT_SIGN_PASSWORD: &str = "sign-password";
pub const INPUT_VSIX_PATH: &str = "vsix-path";
pub const INPUT_SIGN_CERTIFICATE_PATH: &str = "sign-certificate-path";

/// Inputs exactly as delivered by the host, before any validation.
///
/// `None` and `Some("")` mean the same thing: the input was not supplied.
#[derive(Clone, Default)]
pub struct RawInputs {
    pub vs_version: Option<String>,
    pub vs_prerelease: Option<String>,
    pub sign_password: Option<String>,
    pub vsix_path: Option<String>,
    pub sign_certificate_path: Option<String>,
}

impl fmt::Debug for RawInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawInputs")
            .field("vs_version", &self.vs_version)
            .field("vs_prerelease", &self.vs_prerelease)
            .field(
                "sign_password",
                &self.sign_password.as_ref().map(|_| Password::REDACTED),
            )
            .field("vsix_path", &self.vsix_path)
            .field("sign_certificate_path", &self.sign_certificate_path)
            .finish()
    }
}

/// Certificate password. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const REDACTED: &'static str = "[PASSWORD REDACTED]";

    pub fn new(password: impl Into<String>) -> Self {
        Password(password.into())
    }

    /// The raw value, for handing to the signing tool only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::REDACTED)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::REDACTED)
    }
}

/// Which Visual Studio version vswhere should select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VersionConstraint {
    /// No `-version` filter
    Latest,
    /// A vswhere version range such as `17.0` or `[16.0,17.0)`
    Range(String),
}

impl VersionConstraint {
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "latest" => VersionConstraint::Latest,
            range => VersionConstraint::Range(range.to_string()),
        }
    }
}

/// Validated request, built once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct SigningRequest {
    pub artifact_path: PathBuf,
    pub certificate_path: PathBuf,
    pub password: Password,
    pub version_constraint: VersionConstraint,
    pub allow_prerelease: bool,
}

impl SigningRequest {
    /// Build a request, failing on the first missing required input.
    ///
    /// Required inputs are checked in the order password, artifact, certificate.
    pub fn from_raw(raw: RawInputs) -> Result<Self> {
        let password = required(raw.sign_password, INPUT_SIGN_PASSWORD)?;
        let artifact_path = required(raw.vsix_path, INPUT_VSIX_PATH)?;
        let certificate_path = required(raw.sign_certificate_path, INPUT_SIGN_CERTIFICATE_PATH)?;

        let version_constraint =
            VersionConstraint::parse(raw.vs_version.as_deref().unwrap_or_default());
        let allow_prerelease = raw.vs_prerelease.as_deref() == Some("true");

        Ok(Self {
            artifact_path: PathBuf::from(artifact_path),
            certificate_path: PathBuf::from(certificate_path),
            password: Password::new(password),
            version_constraint,
            allow_prerelease,
        })
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingInput { name }),
    }
}
