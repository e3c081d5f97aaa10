//! Host platform detection and the Windows-only guard.

use std::fmt;

use super::error::{Error, Result};

/// Operating system family the process runs on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Platform {
    /// Windows - the only platform with vswhere and VsixSignTool
    Windows,
    /// Linux
    Linux,
    /// macOS
    MacOs,
    /// Anything else (BSDs, wasm, ...)
    Other,
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            "macos" => Platform::MacOs,
            _ => Platform::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reject every platform except Windows.
///
/// Pure check: touches neither the filesystem nor any process.
pub fn check(platform: Platform) -> Result<()> {
    if platform != Platform::Windows {
        return Err(Error::PlatformMismatch { platform });
    }
    Ok(())
}
