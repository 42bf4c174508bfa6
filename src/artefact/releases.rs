//! Releases at which the published artefact layout changed.
//!
//! Every entry is a plain `const`; resolution compares the requested version
//! against these and nothing else.

use crate::version::GodotVersion;

/// First release published under the current repository naming scheme.
pub const OLDEST_PUBLISHED_RELEASE: GodotVersion = GodotVersion::release(2, 0, 0, "");

/// macOS artefacts split into separate 32-bit and 64-bit downloads.
pub const MACOS_64_BIT_INTRODUCED: GodotVersion = GodotVersion::release(2, 0, 3, "");

/// macOS artefacts became a single fat binary (tagged `2.0.4.1-stable`).
pub const MACOS_FAT_INTRODUCED: GodotVersion = GodotVersion::release(2, 0, 4, "");

/// File names switched from `2.0_stable` to `2.1-stable` spelling.
pub const DASHED_RELEASE_NAMES: GodotVersion = GodotVersion::release(2, 1, 0, "");

/// macOS fat binaries were replaced by a 64-bit-only build.
pub const MACOS_FAT_DROPPED: GodotVersion = GodotVersion::release(3, 1, 0, "alpha1");

/// The one 3.x release that shipped without mono builds.
pub const RELEASE_WITHOUT_MONO: GodotVersion = GodotVersion::release(3, 2, 0, "beta3");

/// macOS artefacts became universal (x86_64 plus arm64) binaries.
pub const MACOS_UNIVERSAL_INTRODUCED: GodotVersion = GodotVersion::release(3, 2, 4, "beta3");

/// Linux ARM builds in the 3.x series.
pub const LINUX_ARM_3X: GodotVersion = GodotVersion::release(3, 6, 0, "beta4");

/// Linux platform token changed from `x11` to `linux`.
pub const LINUX_PLATFORM_RENAMED: GodotVersion = GodotVersion::release(4, 0, 0, "alpha1");

/// macOS platform token changed from `osx` to `macos`.
pub const MACOS_PLATFORM_RENAMED: GodotVersion = GodotVersion::release(4, 0, 0, "alpha13");

/// Linux x86 architecture tokens gained their `x86_` prefix.
pub const LINUX_X86_PREFIX_INTRODUCED: GodotVersion = GodotVersion::release(4, 0, 0, "alpha15");

/// Mono builds in the 4.x series.
pub const MONO_4X: GodotVersion = GodotVersion::release(4, 0, 0, "beta1");

/// Linux ARM builds in the 4.x series.
pub const LINUX_ARM_4X: GodotVersion = GodotVersion::release(4, 2, 0, "beta5");

/// Windows ARM64 builds.
pub const WINDOWS_ARM: GodotVersion = GodotVersion::release(4, 3, 0, "rc1");
