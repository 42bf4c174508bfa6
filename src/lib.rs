//! Release identifiers and download artefacts for the Godot engine.
//!
//! The [`version`] module parses and orders release identifiers such as
//! `3.2.1-stable` or `4.0-alpha13`; the [`artefact`] module turns a version
//! and a target machine into the download URL that release published.
//!
//! ```
//! use godot_release::artefact::{Arch, EngineTarget, Platform, engine_download_url};
//!
//! let target = EngineTarget::new(Platform::Linux, Arch::X86_64, true);
//! assert_eq!(
//!     engine_download_url("3.2.1", target).as_deref(),
//!     Some("https://github.com/godotengine/godot-builds/releases/download/3.2.1-stable/Godot_v3.2.1-stable_mono_x11_64.zip"),
//! );
//! ```

pub mod artefact;
pub mod version;

pub use version::{GodotVersion, VersionInput};
