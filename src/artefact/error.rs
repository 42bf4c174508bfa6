//! Error types for host platform and architecture names.
//!
//! Resolution itself never fails; these errors only arise when a host name
//! supplied by a caller cannot be mapped onto a canonical token.

use thiserror::Error;

/// Errors arising from unrecognised host identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtefactError {
    /// The platform name has no canonical equivalent.
    #[error("unsupported platform \"{value}\"; expected one of: {expected}")]
    UnsupportedPlatform {
        /// The rejected platform name.
        value: String,
        /// Comma-separated list of accepted names.
        expected: String,
    },

    /// The architecture name has no canonical equivalent.
    #[error("unsupported architecture \"{value}\"; expected one of: {expected}")]
    UnsupportedArch {
        /// The rejected architecture name.
        value: String,
        /// Comma-separated list of accepted names.
        expected: String,
    },
}

/// Result type alias using [`ArtefactError`].
pub type Result<T> = std::result::Result<T, ArtefactError>;
