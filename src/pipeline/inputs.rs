//! Input file resolution.
//!
//! Each file input is tried as given first, then relative to the workspace
//! root, so callers can pass either form.

use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;

use super::error::{Error, Result};
use super::host::Host;
use super::request::SigningRequest;

/// Absolute, existence-checked input files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub artifact_path: PathBuf,
    pub certificate_path: PathBuf,
}

/// Resolve the artifact and certificate paths of `request`.
///
/// The artifact is resolved first; the first missing file ends resolution.
pub fn resolve<H: Host>(
    host: &H,
    request: &SigningRequest,
    workspace_root: &Path,
) -> Result<ResolvedPaths> {
    let artifact_path = resolve_file(host, &request.artifact_path, workspace_root, "VSIX file")?;
    let certificate_path = resolve_file(
        host,
        &request.certificate_path,
        workspace_root,
        "signing certificate file",
    )?;

    Ok(ResolvedPaths {
        artifact_path,
        certificate_path,
    })
}

fn resolve_file<H: Host>(
    host: &H,
    given: &Path,
    workspace_root: &Path,
    description: &'static str,
) -> Result<PathBuf> {
    if host.exists(given) {
        log::debug!("Found {} at: {}", description, given.display());
        return absolute(host, given);
    }

    let candidate = workspace_root.join(given);
    if !host.exists(&candidate) {
        return Err(Error::MissingInputFile {
            description,
            path: candidate,
        });
    }

    log::debug!(
        "Found {} relative to workspace at: {}",
        description,
        candidate.display()
    );
    absolute(host, &candidate)
}

/// Absolute form of an existing path, relative to the host's working directory.
fn absolute<H: Host>(host: &H, path: &Path) -> Result<PathBuf> {
    let to_error = |error| Error::PathResolution {
        path: path.to_path_buf(),
        error,
    };
    if path.is_absolute() {
        return path.absolutize().map(|p| p.into_owned()).map_err(to_error);
    }
    let cwd = host.current_dir().map_err(to_error)?;
    path.absolutize_from(&cwd)
        .map(|p| p.into_owned())
        .map_err(to_error)
}
