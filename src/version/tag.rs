//! Release tags as used by the artefact repository.
//!
//! The general form is `major.minor[.patch]-<prerelease|stable>`, with the
//! patch omitted when it is zero. A couple of published releases predate or
//! sidestep that convention; they are listed in [`TAG_EXCEPTIONS`] and
//! checked first.

use super::GodotVersion;

/// A release whose published tag does not follow the general rule.
#[derive(Debug, Clone, Copy)]
pub struct TagException {
    /// Selects the versions this exception applies to.
    pub applies: fn(&GodotVersion) -> bool,
    /// The tag published for those versions.
    pub tag: &'static str,
}

/// Historical tag exceptions, evaluated top-down; the first match wins.
pub const TAG_EXCEPTIONS: &[TagException] = &[
    TagException {
        applies: is_2_0_4_hotfix,
        tag: "2.0.4.1-stable",
    },
    TagException {
        applies: is_unofficial_3_2_alpha0,
        tag: "3.2-alpha0-unofficial",
    },
];

/// Suffix carried only by the unofficial 3.2 alpha tag.
pub const UNOFFICIAL_SUFFIX: &str = "-unofficial";

fn is_2_0_4_hotfix(version: &GodotVersion) -> bool {
    (version.major, version.minor, version.patch) == (2, 0, 4) && version.is_stable()
}

fn is_unofficial_3_2_alpha0(version: &GodotVersion) -> bool {
    (version.major, version.minor, version.patch) == (3, 2, 0) && version.prerelease() == "alpha0"
}

impl GodotVersion {
    /// Render the release tag used in repository URLs.
    ///
    /// # Examples
    ///
    /// ```
    /// use godot_release::version::GodotVersion;
    ///
    /// assert_eq!(GodotVersion::parse("3.2.1").to_tag(), "3.2.1-stable");
    /// assert_eq!(GodotVersion::parse("4.0-alpha13").to_tag(), "4.0-alpha13");
    /// assert_eq!(GodotVersion::parse("2.0.4").to_tag(), "2.0.4.1-stable");
    /// ```
    #[must_use]
    pub fn to_tag(&self) -> String {
        if let Some(exception) = TAG_EXCEPTIONS.iter().find(|rule| (rule.applies)(self)) {
            return exception.tag.to_owned();
        }

        let mut tag = format!("{}.{}", self.major, self.minor);
        if self.patch != 0 {
            tag.push_str(&format!(".{}", self.patch));
        }
        tag.push('-');
        tag.push_str(if self.is_stable() {
            "stable"
        } else {
            self.prerelease()
        });
        tag
    }
}
