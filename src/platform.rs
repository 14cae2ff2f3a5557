//! Target platform descriptors
//!
//! A [`Platform`] names the machine an archive is resolved for: OS family,
//! CPU architecture and, on Linux, an optional distro release. Values are
//! built once by the caller (typically from CLI flags or an external
//! detection layer) and never mutated afterwards.

use crate::distro::DistroVersion;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsFamily {
    Linux,
    MacOs,
    Windows,
}

impl OsFamily {
    /// Get OS family name as string
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an OS family or architecture name is not recognized
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {what} '{name}'")]
pub struct UnknownPlatformName {
    pub(crate) what: &'static str,
    pub(crate) name: String,
}

impl FromStr for OsFamily {
    type Err = UnknownPlatformName;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().trim() {
            "linux" => Ok(Self::Linux),
            "macos" | "osx" | "darwin" => Ok(Self::MacOs),
            "windows" | "win32" => Ok(Self::Windows),
            _ => Err(UnknownPlatformName {
                what: "OS family",
                name: name.to_string(),
            }),
        }
    }
}

/// Pointer width derived from the architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitSize {
    B32,
    B64,
}

/// CPU architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Architecture {
    /// 32-bit x86 (i686 in download URLs)
    X86,
    /// 64-bit x86
    X64,
    /// 64-bit ARM (aarch64 in download URLs)
    Arm64,
}

impl Architecture {
    /// Pointer width of this architecture
    #[inline]
    pub const fn bit_size(self) -> BitSize {
        match self {
            Self::X86 => BitSize::B32,
            Self::X64 | Self::Arm64 => BitSize::B64,
        }
    }

    /// Get architecture name as string
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::X64 => "x86_64",
            Self::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = UnknownPlatformName;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().trim() {
            "x86" | "i686" | "x86_32" => Ok(Self::X86),
            "x86_64" | "x64" | "amd64" => Ok(Self::X64),
            "arm64" | "aarch64" => Ok(Self::Arm64),
            _ => Err(UnknownPlatformName {
                what: "architecture",
                name: name.to_string(),
            }),
        }
    }
}

/// Immutable descriptor of the machine a download is resolved for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    /// Operating system family
    pub os: OsFamily,
    /// CPU architecture (bit size is derived from it)
    pub architecture: Architecture,
    /// Distro release, when one is known (Linux only)
    pub distro_version: Option<DistroVersion>,
}

impl Platform {
    /// Create a platform with no distro information
    #[must_use]
    pub const fn new(os: OsFamily, architecture: Architecture) -> Self {
        Self {
            os,
            architecture,
            distro_version: None,
        }
    }

    /// Attach a concrete distro release to this platform
    #[must_use]
    pub fn with_distro_version(mut self, version: DistroVersion) -> Self {
        self.distro_version = Some(version);
        self
    }

    /// Pointer width of this platform
    #[inline]
    pub const fn bit_size(&self) -> BitSize {
        self.architecture.bit_size()
    }

    /// The same platform with the distro release stripped.
    ///
    /// Used as the generic fallback variant when no distro-specific rule
    /// applies.
    #[must_use]
    pub fn without_distro(&self) -> Self {
        Self {
            os: self.os,
            architecture: self.architecture,
            distro_version: None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.distro_version {
            Some(version) => write!(f, "{}/{} ({version})", self.os, self.architecture),
            None => write!(f, "{}/{}", self.os, self.architecture),
        }
    }
}
