//! Location of `vswhere.exe`, the Visual Studio installation-discovery helper.

use std::path::{Path, PathBuf};

use super::error::{Error, Result};
use super::host::{Host, join_windows};

/// Name looked up on `PATH`.
pub const VSWHERE: &str = "vswhere";

/// Where the Visual Studio installer drops vswhere, relative to `ProgramFiles(x86)`.
pub const VSWHERE_DEFAULT_RELATIVE: &str = "Microsoft Visual Studio\\Installer\\vswhere.exe";

/// Used when `ProgramFiles(x86)` is not set.
pub const DEFAULT_PROGRAM_FILES_X86: &str = "C:\\Program Files (x86)";

/// Existence-checked path to the discovery helper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveryToolLocation(PathBuf);

impl DiscoveryToolLocation {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Find vswhere on `PATH`, falling back to the installer's default location.
///
/// Whichever candidate is chosen must exist; the fallback is only a guess.
pub fn locate<H: Host>(host: &H, program_files_x86: &Path) -> Result<DiscoveryToolLocation> {
    let candidate = match host.which(VSWHERE) {
        Some(path) => path,
        None => {
            let fallback = default_location(program_files_x86);
            log::debug!(
                "{} not on PATH, trying default location {}",
                VSWHERE,
                fallback.display()
            );
            fallback
        }
    };

    if !host.exists(&candidate) {
        return Err(Error::ToolNotFound {
            tool: "vswhere.exe",
            path: candidate,
        });
    }

    log::info!("✓ vswhere available at {}", candidate.display());
    Ok(DiscoveryToolLocation::new(candidate))
}

/// `<ProgramFiles(x86)>\Microsoft Visual Studio\Installer\vswhere.exe`
pub fn default_location(program_files_x86: &Path) -> PathBuf {
    join_windows(
        &program_files_x86.to_string_lossy(),
        VSWHERE_DEFAULT_RELATIVE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::testing::{Call, FakeHost};

    const PF86: &str = "C:\\Program Files (x86)";
    const FALLBACK: &str = "C:\\Program Files (x86)\\Microsoft Visual Studio\\Installer\\vswhere.exe";

    #[test]
    fn path_lookup_wins_when_it_succeeds() {
        let host = FakeHost::new()
            .with_on_path("C:\\tools\\vswhere.exe")
            .with_file("C:\\tools\\vswhere.exe");
        let location = locate(&host, Path::new(PF86)).unwrap();
        assert_eq!(location.path(), Path::new("C:\\tools\\vswhere.exe"));
        assert_eq!(
            host.calls(),
            vec![
                Call::Which(VSWHERE.to_string()),
                Call::Exists(PathBuf::from("C:\\tools\\vswhere.exe")),
            ]
        );
    }

    #[test]
    fn falls_back_to_installer_location() {
        let host = FakeHost::new().with_file(FALLBACK);
        let location = locate(&host, Path::new(PF86)).unwrap();
        assert_eq!(location.path(), Path::new(FALLBACK));
    }

    #[test]
    fn missing_fallback_is_tool_not_found() {
        let host = FakeHost::new();
        match locate(&host, Path::new(PF86)) {
            Err(Error::ToolNotFound { tool, path }) => {
                assert_eq!(tool, "vswhere.exe");
                assert_eq!(path, PathBuf::from(FALLBACK));
            }
            other => panic!("expected ToolNotFound, got {other:?}"),
        }
    }

    #[test]
    fn path_hit_is_still_existence_checked() {
        let host = FakeHost::new().with_on_path("C:\\gone\\vswhere.exe");
        assert!(matches!(
            locate(&host, Path::new(PF86)),
            Err(Error::ToolNotFound { .. })
        ));
    }
}
