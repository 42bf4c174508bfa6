//! Prerelease tag helpers.
//!
//! Conforming tags are one of the [`LABELS`] followed by optional ASCII
//! digits (`dev`, `alpha13`, `rc1`). Anything else is a malformed tag that is
//! still stored and rendered verbatim.

/// Labels the engine has used for prerelease builds.
pub const LABELS: &[&str] = &["dev", "alpha", "beta", "rc"];

/// The label that sorts below every other label.
pub const DEV_LABEL: &str = "dev";

/// Whether `prerelease` is a known label followed only by digits.
///
/// # Examples
///
/// ```
/// use godot_release::version::prerelease::is_conforming;
///
/// assert!(is_conforming("beta10"));
/// assert!(is_conforming("rc"));
/// assert!(!is_conforming("stable"));
/// assert!(!is_conforming("alpha0-unofficial"));
/// ```
#[must_use]
pub fn is_conforming(prerelease: &str) -> bool {
    LABELS.iter().any(|label| {
        prerelease
            .strip_prefix(label)
            .is_some_and(|rest| rest.bytes().all(|byte| byte.is_ascii_digit()))
    })
}

/// Return everything before the first digit.
#[must_use]
pub fn label(prerelease: &str) -> &str {
    prerelease
        .find(|c: char| c.is_ascii_digit())
        .and_then(|end| prerelease.get(..end))
        .unwrap_or(prerelease)
}

/// Return the first run of digits anywhere in the tag, or 0 when there is
/// none.
///
/// Runs too long for a `u64` saturate rather than wrap.
#[must_use]
pub fn number(prerelease: &str) -> u64 {
    let digits: String = prerelease
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}
