//! Artefact resolution for a release, platform, architecture and runtime.
//!
//! Every function here is a pure computation over a [`GodotVersion`] and the
//! constants in [`super::releases`]. Unsupported combinations resolve to
//! `None` or `false`; nothing in this module returns an error.

use log::debug;

use super::naming::ArtefactName;
use super::platform::{Arch, Platform, WordSize};
use super::releases::{
    LINUX_ARM_3X, LINUX_ARM_4X, LINUX_PLATFORM_RENAMED, LINUX_X86_PREFIX_INTRODUCED,
    MACOS_PLATFORM_RENAMED, MACOS_UNIVERSAL_INTRODUCED, MONO_4X, OLDEST_PUBLISHED_RELEASE,
    RELEASE_WITHOUT_MONO, WINDOWS_ARM,
};
use super::rules::{MacosEra, macos_era, macos_mono_spelling};
use super::token::ArtefactToken;
use crate::version::{GodotVersion, VersionInput};

/// What the caller wants to run: a platform, an architecture, and whether
/// the mono (C#) build is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineTarget {
    /// Target operating system.
    pub platform: Platform,
    /// Target CPU architecture.
    pub arch: Arch,
    /// Whether the mono build is requested.
    pub mono: bool,
}

impl EngineTarget {
    /// Describe a target.
    #[must_use]
    pub const fn new(platform: Platform, arch: Arch, mono: bool) -> Self {
        Self {
            platform,
            arch,
            mono,
        }
    }

    /// Describe the machine this program is running on, if it is supported.
    #[must_use]
    pub fn host(mono: bool) -> Option<Self> {
        Some(Self::new(Platform::host()?, Arch::host()?, mono))
    }

    const fn without_mono(self) -> Self {
        Self { mono: false, ..self }
    }
}

/// Return the platform token a release uses in its file names.
///
/// # Examples
///
/// ```
/// use godot_release::artefact::platform::Platform;
/// use godot_release::artefact::resolver::platform_token;
/// use godot_release::version::GodotVersion;
///
/// assert_eq!(platform_token(&GodotVersion::parse("3.6"), Platform::Linux), "x11");
/// assert_eq!(platform_token(&GodotVersion::parse("4.0-alpha13"), Platform::MacOs), "macos");
/// ```
#[must_use]
pub fn platform_token(version: &GodotVersion, platform: Platform) -> &'static str {
    match platform {
        Platform::MacOs if *version < MACOS_PLATFORM_RENAMED => "osx",
        Platform::MacOs => "macos",
        Platform::Linux if *version < LINUX_PLATFORM_RENAMED => "x11",
        Platform::Linux => "linux",
        Platform::Windows => "windows",
    }
}

/// Whether a mono build was published for this release and target.
#[must_use]
pub fn supports_mono(version: &GodotVersion, platform: Platform, arch: Arch) -> bool {
    match version.major() {
        3 => *version != RELEASE_WITHOUT_MONO && !(platform == Platform::Linux && arch.is_arm()),
        4 => *version >= MONO_4X,
        _ => false,
    }
}

/// Whether native ARM builds were published for this release and platform.
///
/// On macOS this reports the universal-binary era, whose archives carry
/// arm64 code without naming it.
#[must_use]
pub fn provides_arm(version: &GodotVersion, platform: Platform) -> bool {
    match platform {
        Platform::Linux => match version.major() {
            3 => *version >= LINUX_ARM_3X,
            4 => *version >= LINUX_ARM_4X,
            _ => false,
        },
        Platform::Windows => *version >= WINDOWS_ARM,
        Platform::MacOs => *version >= MACOS_UNIVERSAL_INTRODUCED,
    }
}

/// Resolve the platform/architecture token for `target`.
///
/// The mono flag is taken as given; callers that have not checked
/// [`supports_mono`] should clear it first. On Linux an ARM request for a
/// release without ARM builds resolves to the x86 build of the same width.
///
/// # Examples
///
/// ```
/// use godot_release::artefact::platform::{Arch, Platform};
/// use godot_release::artefact::resolver::{EngineTarget, arch_platform_token};
/// use godot_release::version::GodotVersion;
///
/// let target = EngineTarget::new(Platform::Linux, Arch::X86_64, false);
/// let token = arch_platform_token(&GodotVersion::parse("4.2"), target);
/// assert_eq!(token.as_str(), "linux.x86_64");
/// ```
#[must_use]
pub fn arch_platform_token(version: &GodotVersion, target: EngineTarget) -> ArtefactToken {
    match target.platform {
        Platform::MacOs => macos_token(version, target),
        Platform::Windows => windows_token(version, target.arch),
        Platform::Linux => linux_token(version, target),
    }
}

fn macos_token(version: &GodotVersion, target: EngineTarget) -> ArtefactToken {
    let suffix = match macos_era(version) {
        MacosEra::Legacy32 => return ArtefactToken::new("osx32"),
        MacosEra::Split => {
            return ArtefactToken::new(format!("osx{}", target.arch.word_size().as_str()));
        }
        MacosEra::Fat => "fat",
        MacosEra::Intel64 => "64",
        MacosEra::Universal => "universal",
    };

    macos_mono_spelling(version)
        .filter(|_| target.mono)
        .map_or_else(
            || ArtefactToken::joined(platform_token(version, Platform::MacOs), '.', suffix),
            ArtefactToken::new,
        )
}

fn windows_token(version: &GodotVersion, arch: Arch) -> ArtefactToken {
    if arch == Arch::Arm64 && provides_arm(version, Platform::Windows) {
        return ArtefactToken::new("windows_arm64");
    }
    match arch.word_size() {
        WordSize::Bits64 => ArtefactToken::new("win64"),
        WordSize::Bits32 => ArtefactToken::new("win32"),
    }
}

fn linux_token(version: &GodotVersion, target: EngineTarget) -> ArtefactToken {
    let arch = if target.arch.is_arm() && !provides_arm(version, Platform::Linux) {
        let substitute = target.arch.x86_equivalent();
        debug!(
            "{version} has no Linux {} build; resolving {substitute} instead",
            target.arch
        );
        substitute
    } else {
        target.arch
    };

    let platform = if version.major() < 3 || (version.major() <= 3 && !arch.is_arm()) {
        "x11"
    } else if arch.is_arm() {
        "linux"
    } else {
        platform_token(version, Platform::Linux)
    };
    let separator = if target.mono { '_' } else { '.' };

    if arch.is_arm() {
        return ArtefactToken::joined(platform, separator, arch.as_str());
    }
    let prefix = if *version >= LINUX_X86_PREFIX_INTRODUCED {
        "x86_"
    } else {
        ""
    };
    let bits = arch.word_size().as_str();
    ArtefactToken::joined(platform, separator, &format!("{prefix}{bits}"))
}

/// Why a target has no usable download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unavailable {
    InvalidVersion,
    PredatesRepository,
    NoMonoBuild,
    NarrowerThanRequested,
    Only32BitMacos,
    NoArmBuild,
}

fn check_published(version: &GodotVersion) -> Result<(), Unavailable> {
    if !version.is_valid() {
        return Err(Unavailable::InvalidVersion);
    }
    if *version < OLDEST_PUBLISHED_RELEASE {
        return Err(Unavailable::PredatesRepository);
    }
    Ok(())
}

fn check_availability(version: &GodotVersion, target: EngineTarget) -> Result<(), Unavailable> {
    check_published(version)?;
    if target.mono && !supports_mono(version, target.platform, target.arch) {
        return Err(Unavailable::NoMonoBuild);
    }

    let token = arch_platform_token(version, target);
    let requested = target.arch.word_size();
    let resolved = token.word_size();
    if target.platform == Platform::MacOs
        && resolved == Some(WordSize::Bits32)
        && requested != WordSize::Bits32
    {
        return Err(Unavailable::Only32BitMacos);
    }
    if resolved == Some(WordSize::Bits64) && requested == WordSize::Bits32 {
        return Err(Unavailable::NarrowerThanRequested);
    }
    if target.platform == Platform::Linux && target.arch.is_arm() && !token.is_arm() {
        return Err(Unavailable::NoArmBuild);
    }
    Ok(())
}

/// Whether a download exists that can run on `target` without an
/// unacceptable substitution.
///
/// A 64-bit build is never offered for a 32-bit request, a 32-bit-only
/// macOS build is only offered when 32-bit was asked for, and a Linux ARM
/// request needs a real ARM build.
///
/// # Examples
///
/// ```
/// use godot_release::artefact::platform::{Arch, Platform};
/// use godot_release::artefact::resolver::{EngineTarget, has_download_available};
///
/// let arm_linux = EngineTarget::new(Platform::Linux, Arch::Arm64, false);
/// assert!(!has_download_available("4.1", arm_linux));
/// assert!(has_download_available("4.2", arm_linux));
/// ```
#[must_use]
pub fn has_download_available<'a>(
    version: impl Into<VersionInput<'a>>,
    target: EngineTarget,
) -> bool {
    let parsed = version.into().into_version();
    check_availability(&parsed, target)
        .inspect_err(|reason| {
            debug!(
                "no {} download for {parsed} on {}/{}: {reason:?}",
                if target.mono { "mono" } else { "standard" },
                target.platform,
                target.arch
            );
        })
        .is_ok()
}

/// Name the engine archive for `target` without checking availability.
///
/// The mono flag is dropped when no mono build exists, and a mono archive
/// outside macOS spells its token with `_`.
#[must_use]
pub fn engine_artefact(version: &GodotVersion, target: EngineTarget) -> ArtefactName {
    let effective = if target.mono && !supports_mono(version, target.platform, target.arch) {
        target.without_mono()
    } else {
        target
    };

    let mut token = arch_platform_token(version, effective);
    if effective.mono && effective.platform != Platform::MacOs {
        token = token.with_mono_separator();
    }
    let executable = effective.platform == Platform::Windows && !effective.mono;
    ArtefactName::engine(version, token, effective.mono, executable)
}

/// Return the engine download URL for `target` without checking
/// availability.
///
/// # Examples
///
/// ```
/// use godot_release::artefact::platform::{Arch, Platform};
/// use godot_release::artefact::resolver::{EngineTarget, download_url};
/// use godot_release::version::GodotVersion;
///
/// let target = EngineTarget::new(Platform::Linux, Arch::X86_64, false);
/// assert_eq!(
///     download_url(&GodotVersion::parse("3.2.1"), target),
///     "https://github.com/godotengine/godot-builds/releases/download/3.2.1-stable/Godot_v3.2.1-stable_x11.64.zip",
/// );
/// ```
#[must_use]
pub fn download_url(version: &GodotVersion, target: EngineTarget) -> String {
    engine_artefact(version, target).download_url()
}

/// Return the engine download URL for `target`, or `None` when
/// [`has_download_available`] says there is nothing suitable.
#[must_use]
pub fn engine_download_url<'a>(
    version: impl Into<VersionInput<'a>>,
    target: EngineTarget,
) -> Option<String> {
    let parsed = version.into().into_version();
    has_download_available(&*parsed, target).then(|| download_url(&parsed, target))
}

/// Return the export templates URL, or `None` when the release was never
/// published or mono templates were requested for a release without mono
/// builds.
///
/// The bundle name carries no mono marker; `mono` only gates eligibility.
/// Templates cover every platform, so that gate uses the Linux x86_64 rule
/// whatever the caller's own platform is.
///
/// # Examples
///
/// ```
/// use godot_release::artefact::resolver::templates_download_url;
///
/// assert_eq!(
///     templates_download_url("4.2.1", false).as_deref(),
///     Some("https://github.com/godotengine/godot-builds/releases/download/4.2.1-stable/Godot_v4.2.1-stable_export_templates.tpz"),
/// );
/// assert_eq!(templates_download_url("3.2-beta3", true), None);
/// assert_eq!(templates_download_url("1.1", false), None);
/// ```
#[must_use]
pub fn templates_download_url<'a>(
    version: impl Into<VersionInput<'a>>,
    mono: bool,
) -> Option<String> {
    let parsed = version.into().into_version();
    check_published(&parsed)
        .and_then(|()| {
            if mono && !supports_mono(&parsed, Platform::Linux, Arch::X86_64) {
                Err(Unavailable::NoMonoBuild)
            } else {
                Ok(())
            }
        })
        .inspect_err(|reason| {
            debug!(
                "no {} export templates for {parsed}: {reason:?}",
                if mono { "mono" } else { "standard" }
            );
        })
        .ok()?;
    Some(ArtefactName::export_templates(&parsed).download_url())
}
