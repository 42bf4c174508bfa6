//! Download artefacts published for each engine release.
//!
//! Given a [`GodotVersion`](crate::version::GodotVersion) and an
//! [`EngineTarget`], the resolver reproduces the file naming scheme that was
//! in force for that release and decides whether a suitable download exists.
//!
//! # Modules
//!
//! - [`error`] - Errors for unrecognised host names
//! - [`naming`] - Release names, artefact file names and URLs
//! - [`platform`] - Canonical platform and architecture values
//! - [`releases`] - Releases at which the naming scheme changed
//! - [`resolver`] - Availability checks and URL resolution
//! - [`rules`] - Ordered rule tables for irregular macOS history
//! - [`token`] - The platform/architecture fragment of a file name

pub mod error;
pub mod naming;
pub mod platform;
pub mod releases;
pub mod resolver;
pub mod rules;
pub mod token;

pub use error::ArtefactError;
pub use naming::ArtefactName;
pub use platform::{Arch, Platform, WordSize};
pub use resolver::{
    EngineTarget, engine_download_url, has_download_available, templates_download_url,
};
pub use token::ArtefactToken;
