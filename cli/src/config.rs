//! Defaults for the resolve command, read from a TOML file.
//!
//! A CI job can pin its engine release in a checked-in file instead of
//! repeating flags:
//!
//! ```toml
//! version = "4.2.1"
//! mono = true
//! platform = "linux"
//! arch = "x86_64"
//! ```
//!
//! Every key is optional and unknown keys are rejected.

use crate::error::{CliError, Result};
use camino::Utf8Path;
use log::debug;
use serde::Deserialize;

/// Values that fill in resolve flags the caller left out.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ResolveConfig {
    /// Release to resolve.
    pub version: Option<String>,
    /// Whether to resolve the mono build.
    pub mono: bool,
    /// Platform name, using the same spellings as `--platform`.
    pub platform: Option<String>,
    /// Architecture name, using the same spellings as `--arch`.
    pub arch: Option<String>,
}

impl ResolveConfig {
    /// Read and parse the defaults file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ConfigRead`] when the file cannot be read and
    /// [`CliError::ConfigParse`] when it is not valid for this tool.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::parse(&source, path)?;
        debug!("loaded resolve defaults from {path}");
        Ok(config)
    }

    /// Parse defaults from TOML text; `path` is only used in errors.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ConfigParse`] when `source` is not valid TOML or
    /// contains unknown keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use godot_release_cli::config::ResolveConfig;
    ///
    /// let config = ResolveConfig::parse("version = \"4.2\"\n", Utf8Path::new("godot.toml"))
    ///     .expect("valid config");
    /// assert_eq!(config.version.as_deref(), Some("4.2"));
    /// assert!(!config.mono);
    /// ```
    pub fn parse(source: &str, path: &Utf8Path) -> Result<Self> {
        toml::from_str(source).map_err(|source| CliError::ConfigParse {
            path: path.to_owned(),
            source: Box::new(source),
        })
    }
}
