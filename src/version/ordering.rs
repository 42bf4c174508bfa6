//! Total ordering over engine versions.
//!
//! The rules, applied in order:
//!
//! 1. Invalid versions sort below every valid version and equal each other.
//! 2. `major`, `minor` and `patch` compare numerically.
//! 3. A stable release sorts above any prerelease of the same number.
//! 4. A conforming prerelease (`dev|alpha|beta|rc` plus digits) sorts below a
//!    malformed one.
//! 5. `dev` sorts below every other label; other labels compare as strings,
//!    which happens to give `alpha < beta < rc`.
//! 6. Equal labels compare by their first digit run (missing means 0).
//!
//! Build metadata never takes part.

use super::{GodotVersion, VersionInput, prerelease};
use std::cmp::Ordering;

/// Compare two versions with the release ordering rules.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use godot_release::version::GodotVersion;
/// use godot_release::version::ordering::compare;
///
/// let a = GodotVersion::parse("4.0-beta9");
/// let b = GodotVersion::parse("4.0-beta10");
/// assert_eq!(compare(&a, &b), Ordering::Less);
/// ```
#[must_use]
pub fn compare(a: &GodotVersion, b: &GodotVersion) -> Ordering {
    match (a.is_valid(), b.is_valid()) {
        (true, false) => return Ordering::Greater,
        (false, false) => return Ordering::Equal,
        (false, true) => return Ordering::Less,
        (true, true) => {}
    }

    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| compare_prerelease(a.prerelease(), b.prerelease()))
}

fn compare_prerelease(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    match (prerelease::is_conforming(a), prerelease::is_conforming(b)) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    let (a_label, b_label) = (prerelease::label(a), prerelease::label(b));
    let a_dev = a_label == prerelease::DEV_LABEL;
    let b_dev = b_label == prerelease::DEV_LABEL;
    match (a_dev, b_dev) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ if a_label != b_label => a_label.cmp(b_label),
        _ => prerelease::number(a).cmp(&prerelease::number(b)),
    }
}

impl GodotVersion {
    /// Three-way comparison against a version or a raw string.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use godot_release::version::GodotVersion;
    ///
    /// let version = GodotVersion::parse("3.2.1");
    /// assert_eq!(version.compare("3.2.2"), Ordering::Less);
    /// assert_eq!(version.compare("3.2.1"), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn compare<'a>(&self, other: impl Into<VersionInput<'a>>) -> Ordering {
        compare(self, &other.into().into_version())
    }

    /// Whether the two versions compare equal.
    #[must_use]
    pub fn is_eq<'a>(&self, other: impl Into<VersionInput<'a>>) -> bool {
        self.compare(other).is_eq()
    }

    /// Whether the two versions compare unequal.
    #[must_use]
    pub fn is_ne<'a>(&self, other: impl Into<VersionInput<'a>>) -> bool {
        self.compare(other).is_ne()
    }

    /// Whether `self` is newer than `other`.
    #[must_use]
    pub fn is_gt<'a>(&self, other: impl Into<VersionInput<'a>>) -> bool {
        self.compare(other).is_gt()
    }

    /// Whether `self` is older than `other`.
    #[must_use]
    pub fn is_lt<'a>(&self, other: impl Into<VersionInput<'a>>) -> bool {
        self.compare(other).is_lt()
    }

    /// Whether `self` is at or after `other`.
    #[must_use]
    pub fn is_ge<'a>(&self, other: impl Into<VersionInput<'a>>) -> bool {
        self.compare(other).is_ge()
    }

    /// Whether `self` is at or before `other`.
    #[must_use]
    pub fn is_le<'a>(&self, other: impl Into<VersionInput<'a>>) -> bool {
        self.compare(other).is_le()
    }
}

impl PartialEq for GodotVersion {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other).is_eq()
    }
}

impl Eq for GodotVersion {}

impl PartialOrd for GodotVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GodotVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}
