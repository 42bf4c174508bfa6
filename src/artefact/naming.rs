//! File names and download URLs for published release artefacts.
//!
//! Engine archives are named
//! `Godot_v<release>[_mono]_<token>[.exe].zip` and export templates
//! `Godot_v<release>_export_templates.tpz`, both published under
//! `<repository>/<tag>/`.

use super::releases::DASHED_RELEASE_NAMES;
use super::token::ArtefactToken;
use crate::version::GodotVersion;
use crate::version::tag::UNOFFICIAL_SUFFIX;
use std::fmt;

/// Base URL of the release download area.
pub const REPOSITORY_DOWNLOAD_BASE: &str =
    "https://github.com/godotengine/godot-builds/releases/download";

const FILE_PREFIX: &str = "Godot_v";
const MONO_MARKER: &str = "_mono";
const EXECUTABLE_SUFFIX: &str = ".exe";
const ENGINE_EXTENSION: &str = ".zip";
const TEMPLATES_SUFFIX: &str = "_export_templates.tpz";

/// Return the version fragment used inside file names.
///
/// From 2.1 onwards this is the release tag without the `-unofficial`
/// marker; earlier releases joined the number and channel with `_`.
///
/// # Examples
///
/// ```
/// use godot_release::artefact::naming::release_name;
/// use godot_release::version::GodotVersion;
///
/// assert_eq!(release_name(&GodotVersion::parse("2.0.3")), "2.0.3_stable");
/// assert_eq!(release_name(&GodotVersion::parse("3.2-alpha0-unofficial")), "3.2-alpha0");
/// ```
#[must_use]
pub fn release_name(version: &GodotVersion) -> String {
    let tag = version.to_tag();
    if *version >= DASHED_RELEASE_NAMES {
        tag.replacen(UNOFFICIAL_SUFFIX, "", 1)
    } else {
        tag.replacen('-', "_", 1)
    }
}

/// What an artefact contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtefactKind {
    /// An editor/engine archive for one platform and architecture.
    Engine {
        /// Platform/architecture fragment of the file name.
        token: ArtefactToken,
        /// Whether the archived binary carries an `.exe` suffix in the name.
        executable: bool,
    },
    /// The platform-independent export templates bundle.
    ExportTemplates,
}

/// A fully-qualified artefact file name together with its release tag.
///
/// # Examples
///
/// ```
/// use godot_release::artefact::naming::ArtefactName;
/// use godot_release::artefact::token::ArtefactToken;
/// use godot_release::version::GodotVersion;
///
/// let version = GodotVersion::parse("3.2.1");
/// let name = ArtefactName::engine(&version, ArtefactToken::new("x11.64"), false, false);
/// assert_eq!(name.filename(), "Godot_v3.2.1-stable_x11.64.zip");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtefactName {
    tag: String,
    release: String,
    mono: bool,
    kind: ArtefactKind,
}

impl ArtefactName {
    /// Name an engine archive.
    #[must_use]
    pub fn engine(
        version: &GodotVersion,
        token: ArtefactToken,
        mono: bool,
        executable: bool,
    ) -> Self {
        Self::new(version, mono, ArtefactKind::Engine { token, executable })
    }

    /// Name an export templates bundle. One bundle serves standard and mono
    /// projects alike.
    #[must_use]
    pub fn export_templates(version: &GodotVersion) -> Self {
        Self::new(version, false, ArtefactKind::ExportTemplates)
    }

    fn new(version: &GodotVersion, mono: bool, kind: ArtefactKind) -> Self {
        Self {
            tag: version.to_tag(),
            release: release_name(version),
            mono,
            kind,
        }
    }

    /// Return the release tag the artefact is published under.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Return the artefact kind.
    #[must_use]
    pub const fn kind(&self) -> &ArtefactKind {
        &self.kind
    }

    /// Whether this is a mono artefact.
    #[must_use]
    pub const fn is_mono(&self) -> bool {
        self.mono
    }

    /// Return the file name.
    #[must_use]
    pub fn filename(&self) -> String {
        self.to_string()
    }

    /// Return the full download URL.
    #[must_use]
    pub fn download_url(&self) -> String {
        format!("{REPOSITORY_DOWNLOAD_BASE}/{}/{self}", self.tag)
    }
}

impl fmt::Display for ArtefactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mono = if self.mono { MONO_MARKER } else { "" };
        write!(f, "{FILE_PREFIX}{}{mono}", self.release)?;
        match &self.kind {
            ArtefactKind::Engine { token, executable } => {
                let exe = if *executable { EXECUTABLE_SUFFIX } else { "" };
                write!(f, "_{token}{exe}{ENGINE_EXTENSION}")
            }
            ArtefactKind::ExportTemplates => f.write_str(TEMPLATES_SUFFIX),
        }
    }
}
