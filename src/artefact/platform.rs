//! Canonical platform and architecture identifiers.
//!
//! Hosts name themselves in several dialects (`darwin`/`win32`/`x64` as CI
//! runners report them, `macos`/`windows`/`aarch64` from Rust's
//! [`std::env::consts`]). Both map onto three platforms and four
//! architectures here; anything else is rejected at construction time.

use super::error::{ArtefactError, Result};
use serde::Serialize;
use std::fmt;

/// Host platform names and the platform they map to.
const PLATFORM_NAMES: &[(&str, Platform)] = &[
    ("darwin", Platform::MacOs),
    ("macos", Platform::MacOs),
    ("linux", Platform::Linux),
    ("win32", Platform::Windows),
    ("windows", Platform::Windows),
];

/// Host architecture names and the architecture they map to.
const ARCH_NAMES: &[(&str, Arch)] = &[
    ("ia32", Arch::X86_32),
    ("x86", Arch::X86_32),
    ("x86_32", Arch::X86_32),
    ("x64", Arch::X86_64),
    ("x86_64", Arch::X86_64),
    ("arm", Arch::Arm32),
    ("arm32", Arch::Arm32),
    ("arm64", Arch::Arm64),
    ("aarch64", Arch::Arm64),
];

fn accepted_names<T>(table: &[(&str, T)]) -> String {
    table
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A target operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// macOS.
    MacOs,
    /// Linux (historically published as X11).
    Linux,
    /// Windows.
    Windows,
}

impl Platform {
    /// Every platform, in a stable order.
    pub const ALL: [Self; 3] = [Self::Linux, Self::MacOs, Self::Windows];

    /// Return the canonical token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Windows => "windows",
        }
    }

    /// Return the platform this program is running on, if supported.
    #[must_use]
    pub fn host() -> Option<Self> {
        Self::try_from(std::env::consts::OS).ok()
    }
}

impl TryFrom<&str> for Platform {
    type Error = ArtefactError;

    fn try_from(value: &str) -> Result<Self> {
        PLATFORM_NAMES
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, platform)| *platform)
            .ok_or_else(|| ArtefactError::UnsupportedPlatform {
                value: value.to_owned(),
                expected: accepted_names(PLATFORM_NAMES),
            })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pointer width of an architecture or artefact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordSize {
    /// 32-bit.
    Bits32,
    /// 64-bit.
    Bits64,
}

impl WordSize {
    /// Return the width as it appears in artefact names (`32` or `64`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bits32 => "32",
            Self::Bits64 => "64",
        }
    }
}

/// A target CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Arch {
    /// 32-bit x86.
    #[serde(rename = "x86_32")]
    X86_32,
    /// 64-bit x86.
    #[serde(rename = "x86_64")]
    X86_64,
    /// 32-bit ARM.
    #[serde(rename = "arm32")]
    Arm32,
    /// 64-bit ARM.
    #[serde(rename = "arm64")]
    Arm64,
}

impl Arch {
    /// Every architecture, in a stable order.
    pub const ALL: [Self; 4] = [Self::X86_32, Self::X86_64, Self::Arm32, Self::Arm64];

    /// Return the canonical token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X86_32 => "x86_32",
            Self::X86_64 => "x86_64",
            Self::Arm32 => "arm32",
            Self::Arm64 => "arm64",
        }
    }

    /// Return the pointer width.
    #[must_use]
    pub const fn word_size(self) -> WordSize {
        match self {
            Self::X86_32 | Self::Arm32 => WordSize::Bits32,
            Self::X86_64 | Self::Arm64 => WordSize::Bits64,
        }
    }

    /// Whether this is an ARM architecture.
    #[must_use]
    pub const fn is_arm(self) -> bool {
        matches!(self, Self::Arm32 | Self::Arm64)
    }

    /// Return the x86 architecture with the same pointer width.
    #[must_use]
    pub const fn x86_equivalent(self) -> Self {
        match self.word_size() {
            WordSize::Bits32 => Self::X86_32,
            WordSize::Bits64 => Self::X86_64,
        }
    }

    /// Return the architecture this program is running on, if supported.
    #[must_use]
    pub fn host() -> Option<Self> {
        Self::try_from(std::env::consts::ARCH).ok()
    }
}

impl TryFrom<&str> for Arch {
    type Error = ArtefactError;

    fn try_from(value: &str) -> Result<Self> {
        ARCH_NAMES
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, arch)| *arch)
            .ok_or_else(|| ArtefactError::UnsupportedArch {
                value: value.to_owned(),
                expected: accepted_names(ARCH_NAMES),
            })
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
