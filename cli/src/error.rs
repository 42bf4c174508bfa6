//! Error types for the `godot-release` CLI.
//!
//! The library degrades silently on bad input; this layer turns those
//! outcomes into errors so the binary can exit non-zero with a message.

use camino::Utf8PathBuf;
use godot_release::artefact::ArtefactError;
use thiserror::Error;

/// Errors that can occur while running a subcommand.
#[derive(Debug, Error)]
pub enum CliError {
    /// No version was given on the command line or in the defaults file.
    #[error("no version given; pass VERSION or set `version` in the config file")]
    MissingVersion,

    /// The version string does not follow the release grammar.
    #[error("\"{input}\" is not a valid engine version")]
    InvalidVersion {
        /// The rejected input.
        input: String,
    },

    /// No engine download exists for the requested target.
    #[error("no engine download for {version} on {target}")]
    NoDownload {
        /// Display form of the requested version.
        version: String,
        /// Description of the requested target.
        target: String,
    },

    /// Mono export templates were requested for a release without them.
    #[error("no mono export templates for {version}")]
    NoTemplates {
        /// Display form of the requested version.
        version: String,
    },

    /// The running machine is not a supported platform or architecture.
    #[error("cannot determine a supported host; pass --platform and --arch")]
    UnknownHost,

    /// A platform or architecture name was not recognised.
    #[error(transparent)]
    Artefact(#[from] ArtefactError),

    /// The defaults file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// Path of the defaults file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The defaults file is not valid TOML for this tool.
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        /// Path of the defaults file.
        path: Utf8PathBuf,
        /// The underlying parse error.
        #[source]
        source: Box<toml::de::Error>,
    },

    /// Writing the report failed.
    #[error("failed to write output: {source}")]
    WriteFailed {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// Result type alias using [`CliError`].
pub type Result<T> = std::result::Result<T, CliError>;
