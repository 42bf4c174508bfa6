//! Command-line front end for the `godot-release` library.
//!
//! This crate provides argument parsing, the optional TOML defaults file,
//! and output formatting for the `godot-release` binary. It performs no
//! network access: it only reports the tag and URLs a release published.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`config`] - Defaults loaded from a TOML file
//! - [`error`] - Semantic error types reported before a non-zero exit
//! - [`output`] - Human-readable and JSON rendering of a resolution
//! - [`resolve`] - Subcommand implementations

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod resolve;
