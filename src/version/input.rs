//! Arguments that may be either a parsed version or a raw string.

use super::GodotVersion;
use std::borrow::Cow;

/// A version argument accepted by comparison and resolver entry points.
///
/// Strings are parsed with the usual silent-degradation policy when the
/// argument is normalised, so an unparseable string behaves exactly like
/// [`GodotVersion::INVALID`].
///
/// # Examples
///
/// ```
/// use godot_release::version::{GodotVersion, VersionInput};
///
/// let parsed = GodotVersion::parse("4.2");
/// let from_text = VersionInput::from("4.2").into_version();
/// let from_version = VersionInput::from(&parsed).into_version();
/// assert_eq!(from_text, from_version);
/// ```
#[derive(Debug, Clone)]
pub enum VersionInput<'a> {
    /// An already-structured version.
    Version(Cow<'a, GodotVersion>),
    /// A raw release identifier that still needs parsing.
    Text(&'a str),
}

impl<'a> VersionInput<'a> {
    /// Normalise the argument into a version.
    #[must_use]
    pub fn into_version(self) -> Cow<'a, GodotVersion> {
        match self {
            Self::Version(version) => version,
            Self::Text(text) => Cow::Owned(GodotVersion::parse(text)),
        }
    }
}

impl<'a> From<&'a GodotVersion> for VersionInput<'a> {
    fn from(version: &'a GodotVersion) -> Self {
        Self::Version(Cow::Borrowed(version))
    }
}

impl From<GodotVersion> for VersionInput<'_> {
    fn from(version: GodotVersion) -> Self {
        Self::Version(Cow::Owned(version))
    }
}

impl<'a> From<&'a str> for VersionInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for VersionInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}
