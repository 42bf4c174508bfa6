//! Engine release identifiers.
//!
//! A [`GodotVersion`] is the structured form of strings such as `4.2`,
//! `3.2.1-beta2+build123` or `v4.0-alpha13`. Parsing never fails: input that
//! does not follow the release grammar yields the all-zero, invalid version
//! and callers check [`GodotVersion::is_valid`] where it matters.
//!
//! # Sub-modules
//!
//! - [`input`] - The `VersionInput` sum type accepted by comparison helpers.
//! - [`ordering`] - Three-way comparison and the derived predicates.
//! - [`prerelease`] - Prerelease label and number extraction.
//! - [`tag`] - Release tag rendering and its historical exceptions.

pub mod input;
pub mod ordering;
pub mod prerelease;
pub mod tag;

use log::trace;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub use input::VersionInput;

/// Release grammar: `[v]major[.minor][.patch][(.|-)prerelease][(.|+|-)build]`.
const VERSION_PATTERN: &str = concat!(
    r"^[vV]?(0|[1-9][0-9]*)",
    r"(?:\.(0|[1-9][0-9]*))?",
    r"(?:\.(0|[1-9][0-9]*))?",
    r"(?:[.-]((?:dev|alpha|beta|rc)[0-9]*))?",
    r"(?:[.+-]([A-Za-z0-9_.+-]+))?$",
);

#[expect(
    clippy::expect_used,
    reason = "the pattern is a compile-time constant covered by unit tests"
)]
static VERSION_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN).expect("version grammar must compile"));

/// A structured engine release version.
///
/// Ordering follows the engine's release history rather than strict semver:
/// see [`ordering`] for the rules. Build metadata is carried and rendered but
/// never compared.
///
/// # Examples
///
/// ```
/// use godot_release::version::GodotVersion;
///
/// let version = GodotVersion::parse("3.2.1-beta2+build123");
/// assert_eq!(version.major(), 3);
/// assert_eq!(version.prerelease(), "beta2");
/// assert_eq!(version.build(), "build123");
/// assert_eq!(version.to_string(), "3.2.1-beta2+build123");
/// ```
#[derive(Debug, Clone)]
pub struct GodotVersion {
    major: u32,
    minor: u32,
    patch: u32,
    prerelease: Cow<'static, str>,
    build: Cow<'static, str>,
}

impl GodotVersion {
    /// The all-zero version produced for unparseable input.
    pub const INVALID: Self = Self::release(0, 0, 0, "");

    /// Build a version from static parts; used for the release threshold
    /// table.
    #[must_use]
    pub const fn release(major: u32, minor: u32, patch: u32, prerelease: &'static str) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: Cow::Borrowed(prerelease),
            build: Cow::Borrowed(""),
        }
    }

    /// Copy a version from its individual fields without validating them.
    ///
    /// This is the structured-record path: a prerelease that does not follow
    /// the `dev|alpha|beta|rc` convention is stored as given and simply sorts
    /// as a malformed tag.
    #[must_use]
    pub fn from_parts(
        major: u32,
        minor: u32,
        patch: u32,
        prerelease: impl Into<String>,
        build: impl Into<String>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: Cow::Owned(prerelease.into()),
            build: Cow::Owned(build.into()),
        }
    }

    /// Parse a release identifier, degrading to [`Self::INVALID`] when the
    /// input does not match the release grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use godot_release::version::GodotVersion;
    ///
    /// assert_eq!(GodotVersion::parse("v4.0-alpha13").to_string(), "4.0.0-alpha13");
    /// assert!(!GodotVersion::parse("invalid").is_valid());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::try_parse(input).unwrap_or_else(|| {
            trace!("unparseable version string {input:?}; using the invalid version");
            Self::INVALID
        })
    }

    fn try_parse(input: &str) -> Option<Self> {
        let captures = VERSION_GRAMMAR.captures(input)?;
        let number = |index: usize| -> Option<u32> {
            captures
                .get(index)
                .map_or(Some(0), |component| component.as_str().parse().ok())
        };
        let text = |index: usize| -> String {
            captures
                .get(index)
                .map_or_else(String::new, |component| component.as_str().to_owned())
        };

        Some(Self::from_parts(
            number(1)?,
            number(2)?,
            number(3)?,
            text(4),
            text(5),
        ))
    }

    /// Return the major component.
    #[must_use]
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// Return the minor component.
    #[must_use]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    /// Return the patch component.
    #[must_use]
    pub const fn patch(&self) -> u32 {
        self.patch
    }

    /// Return the prerelease tag; empty for stable releases.
    #[must_use]
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// Return the build metadata; empty when absent.
    #[must_use]
    pub fn build(&self) -> &str {
        &self.build
    }

    /// Replace the prerelease tag in place.
    pub fn set_prerelease(&mut self, prerelease: impl Into<String>) {
        self.prerelease = Cow::Owned(prerelease.into());
    }

    /// Whether this is a stable (non-prerelease) version.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.prerelease.is_empty()
    }

    /// A version is valid when its major component is non-zero.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.major > 0
    }

    /// Step to the next smallest version.
    ///
    /// Stable versions bump the patch component; prerelease versions bump
    /// the prerelease number (`beta` becomes `beta1`, `rc2` becomes `rc3`).
    ///
    /// # Examples
    ///
    /// ```
    /// use godot_release::version::GodotVersion;
    ///
    /// let mut version = GodotVersion::parse("4.0-rc2");
    /// version.increment_smallest();
    /// assert_eq!(version.prerelease(), "rc3");
    /// ```
    pub fn increment_smallest(&mut self) -> &mut Self {
        if self.is_stable() {
            self.patch = self.patch.saturating_add(1);
        } else {
            let next = format!(
                "{}{}",
                prerelease::label(&self.prerelease),
                prerelease::number(&self.prerelease).saturating_add(1)
            );
            self.prerelease = Cow::Owned(next);
        }
        self
    }
}

impl Default for GodotVersion {
    fn default() -> Self {
        Self::INVALID
    }
}

impl FromStr for GodotVersion {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(input))
    }
}

impl From<&str> for GodotVersion {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl fmt::Display for GodotVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl Serialize for GodotVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
