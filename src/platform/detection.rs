use log::debug;
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Failure kinds for platform resolution. The two cases are distinct so
/// callers can tell an unknown OS apart from an unknown CPU.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("Unsupported platform: {0}")]
    UnsupportedOs(String),

    #[error("Unsupported architecture: {0}")]
    UnsupportedArch(String),
}

/// Operating systems the catalog ships binaries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Darwin,
    Linux,
    Windows,
}

impl Os {
    /// Canonical name as used in catalog file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Os::Darwin => "darwin",
            Os::Linux => "linux",
            Os::Windows => "windows",
        }
    }

    /// Executable suffix for this OS (`.exe` on Windows, empty elsewhere).
    pub fn exe_suffix(self) -> &'static str {
        match self {
            Os::Windows => ".exe",
            _ => "",
        }
    }
}

impl FromStr for Os {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "macos" | "darwin" => Ok(Os::Darwin),
            "linux" => Ok(Os::Linux),
            "windows" => Ok(Os::Windows),
            other => Err(PlatformError::UnsupportedOs(other.to_string())),
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU architectures the catalog ships binaries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Amd64,
    Arm64,
}

impl Arch {
    /// Canonical name as used in catalog file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Arch::Amd64 => "amd64",
            Arch::Arm64 => "arm64",
        }
    }
}

impl FromStr for Arch {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x86_64" | "amd64" | "x64" => Ok(Arch::Amd64),
            "aarch64" | "arm64" => Ok(Arch::Arm64),
            other => Err(PlatformError::UnsupportedArch(other.to_string())),
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A supported (OS, CPU) build target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformKey {
    pub os: Os,
    pub arch: Arch,
}

impl PlatformKey {
    /// Resolve the key for the running platform.
    pub fn detect() -> Result<Self, PlatformError> {
        let key = Self::from_identifiers(env::consts::OS, env::consts::ARCH)?;
        debug!(
            "Resolved {}/{} to {}",
            env::consts::OS,
            env::consts::ARCH,
            key
        );
        Ok(key)
    }

    /// Resolve from explicit OS and architecture identifiers.
    ///
    /// The OS is checked first, so an unknown OS paired with an unknown
    /// architecture reports the OS.
    pub fn from_identifiers(os: &str, arch: &str) -> Result<Self, PlatformError> {
        Ok(Self {
            os: os.parse()?,
            arch: arch.parse()?,
        })
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
