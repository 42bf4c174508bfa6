//! Ordered naming rules for the irregular parts of macOS history.
//!
//! Each table is scanned top-down and the first matching rule wins, so a new
//! historical quirk is a new row rather than another branch.

use super::releases::{
    MACOS_64_BIT_INTRODUCED, MACOS_FAT_DROPPED, MACOS_FAT_INTRODUCED, MACOS_UNIVERSAL_INTRODUCED,
    RELEASE_WITHOUT_MONO,
};
use crate::version::GodotVersion;

/// The shape of macOS downloads for a range of releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacosEra {
    /// Only a 32-bit build was published (`osx32`).
    Legacy32,
    /// Separate `osx32` and `osx64` builds.
    Split,
    /// A single fat binary (`osx.fat`).
    Fat,
    /// A 64-bit-only build (`osx.64`).
    Intel64,
    /// A universal binary (`osx.universal`, later `macos.universal`).
    Universal,
}

/// A release from which an era applies.
#[derive(Debug, Clone)]
pub struct EraStart {
    /// First release of the era.
    pub since: GodotVersion,
    /// The era that begins there.
    pub era: MacosEra,
}

/// macOS eras, newest first. Versions older than every entry are
/// [`MacosEra::Legacy32`].
pub const MACOS_ERAS: &[EraStart] = &[
    EraStart {
        since: MACOS_UNIVERSAL_INTRODUCED,
        era: MacosEra::Universal,
    },
    EraStart {
        since: MACOS_FAT_DROPPED,
        era: MacosEra::Intel64,
    },
    EraStart {
        since: MACOS_FAT_INTRODUCED,
        era: MacosEra::Fat,
    },
    EraStart {
        since: MACOS_64_BIT_INTRODUCED,
        era: MacosEra::Split,
    },
];

/// Return the macOS era `version` belongs to.
#[must_use]
pub fn macos_era(version: &GodotVersion) -> MacosEra {
    MACOS_ERAS
        .iter()
        .find(|start| *version >= start.since)
        .map_or(MacosEra::Legacy32, |start| start.era)
}

/// A complete macOS token used by mono builds of a narrow set of releases.
#[derive(Debug, Clone, Copy)]
pub struct MonoSpelling {
    /// Selects the releases using this spelling.
    pub applies: fn(&GodotVersion) -> bool,
    /// The token published for those releases.
    pub token: &'static str,
}

/// Mono macOS spellings, first match wins. Only consulted from the fat era
/// onwards; older releases had no mono builds.
pub const MACOS_MONO_SPELLINGS: &[MonoSpelling] = &[
    MonoSpelling {
        applies: is_early_3_0,
        token: "osx64",
    },
    MonoSpelling {
        applies: is_3_2_beta2,
        token: "osx_64",
    },
    MonoSpelling {
        applies: is_3_2_beta3_to_3_3_4,
        token: "osx.64",
    },
];

fn is_early_3_0(version: &GodotVersion) -> bool {
    version.major() == 3 && version.minor() == 0 && version.patch() <= 2
}

fn is_3_2_beta2(version: &GodotVersion) -> bool {
    version.is_eq("3.2-beta2")
}

fn is_3_2_beta3_to_3_3_4(version: &GodotVersion) -> bool {
    version.is_ge(&RELEASE_WITHOUT_MONO) && version.is_le("3.3.4")
}

/// Return the mono-specific macOS token for `version`, if one applies.
#[must_use]
pub fn macos_mono_spelling(version: &GodotVersion) -> Option<&'static str> {
    MACOS_MONO_SPELLINGS
        .iter()
        .find(|rule| (rule.applies)(version))
        .map(|rule| rule.token)
}
