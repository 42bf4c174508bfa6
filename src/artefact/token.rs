//! The platform/architecture fragment of an artefact file name.
//!
//! Examples: `x11.64`, `linux_x86_64`, `macos.universal`, `win64`,
//! `windows_arm64`, `osx32`.

use super::platform::WordSize;
use std::fmt;

/// A resolved platform/architecture token.
///
/// # Examples
///
/// ```
/// use godot_release::artefact::token::ArtefactToken;
/// use godot_release::artefact::platform::WordSize;
///
/// let token = ArtefactToken::new("x11.64");
/// assert_eq!(token.word_size(), Some(WordSize::Bits64));
/// assert_eq!(token.with_mono_separator().as_str(), "x11_64");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtefactToken(String);

impl ArtefactToken {
    /// Wrap a token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Join a platform token and an architecture token.
    #[must_use]
    pub fn joined(platform: &str, separator: char, arch: &str) -> Self {
        Self(format!("{platform}{separator}{arch}"))
    }

    /// Return the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The pointer width the token names, if it ends in one.
    ///
    /// Universal and fat macOS tokens name no width.
    #[must_use]
    pub fn word_size(&self) -> Option<WordSize> {
        [WordSize::Bits32, WordSize::Bits64]
            .into_iter()
            .find(|size| self.0.ends_with(size.as_str()))
    }

    /// Whether the token names an ARM build.
    #[must_use]
    pub fn is_arm(&self) -> bool {
        self.0.contains("arm")
    }

    /// Return the token with its first `.` replaced by `_`, the spelling
    /// mono builds use outside macOS.
    #[must_use]
    pub fn with_mono_separator(&self) -> Self {
        Self(self.0.replacen('.', "_", 1))
    }
}

impl AsRef<str> for ArtefactToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtefactToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
