//! Shared fixtures for the integration suites.
//!
//! Exposes the `releases` corpus so sweeps over historical releases and
//! ordering properties run against the same set of published tags.
pub mod releases;
