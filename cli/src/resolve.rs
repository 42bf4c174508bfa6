//! Subcommand implementations.
//!
//! Each command writes its report to the supplied handle and returns an
//! error instead of printing one, leaving exit codes to the entrypoint.

use crate::cli::{CompareArgs, ResolveArgs, TagArgs};
use crate::config::ResolveConfig;
use crate::error::{CliError, Result};
use crate::output::{Resolution, describe_target, format_human, format_json, format_quiet};
use godot_release::GodotVersion;
use godot_release::artefact::{
    Arch, EngineTarget, Platform, engine_download_url, templates_download_url,
};
use std::cmp::Ordering;
use std::io::Write;

/// A resolve request after flags and file defaults have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    /// The parsed, valid version.
    pub version: GodotVersion,
    /// Target to resolve for.
    pub target: EngineTarget,
    /// Whether to resolve export templates as well.
    pub templates: bool,
}

impl ResolveRequest {
    /// Merge command-line flags over file defaults, falling back to the host
    /// for platform and architecture.
    ///
    /// # Errors
    ///
    /// Returns an error when no version is given, the version is invalid, a
    /// platform or architecture name is unknown, or the host is unsupported.
    pub fn merge(args: &ResolveArgs, config: &ResolveConfig) -> Result<Self> {
        let input = args
            .version
            .as_deref()
            .or(config.version.as_deref())
            .ok_or(CliError::MissingVersion)?;
        let version = parse_valid(input)?;

        let platform = match args.platform.as_deref().or(config.platform.as_deref()) {
            Some(name) => Platform::try_from(name)?,
            None => Platform::host().ok_or(CliError::UnknownHost)?,
        };
        let arch = match args.arch.as_deref().or(config.arch.as_deref()) {
            Some(name) => Arch::try_from(name)?,
            None => Arch::host().ok_or(CliError::UnknownHost)?,
        };

        Ok(Self {
            version,
            target: EngineTarget::new(platform, arch, args.mono || config.mono),
            templates: args.templates,
        })
    }
}

fn parse_valid(input: &str) -> Result<GodotVersion> {
    let version = GodotVersion::parse(input);
    if version.is_valid() {
        Ok(version)
    } else {
        Err(CliError::InvalidVersion {
            input: input.to_owned(),
        })
    }
}

/// Resolve the engine and, when requested, export templates URLs.
///
/// Templates are checked first so a mono request for a release without mono
/// builds reports the missing templates rather than the engine.
///
/// # Errors
///
/// Returns [`CliError::NoTemplates`] when requested templates do not exist
/// and [`CliError::NoDownload`] when no engine archive suits the target.
pub fn resolve(request: &ResolveRequest) -> Result<Resolution> {
    let ResolveRequest {
        version,
        target,
        templates,
    } = request;

    let templates_url = if *templates {
        let url = templates_download_url(version, target.mono).ok_or_else(|| {
            CliError::NoTemplates {
                version: version.to_string(),
            }
        })?;
        Some(url)
    } else {
        None
    };
    let engine_url =
        engine_download_url(version, *target).ok_or_else(|| CliError::NoDownload {
            version: version.to_string(),
            target: describe_target(*target),
        })?;

    Ok(Resolution {
        version: version.clone(),
        tag: version.to_tag(),
        platform: target.platform,
        arch: target.arch,
        mono: target.mono,
        engine_url,
        templates_url,
    })
}

/// Run the resolve command.
///
/// # Errors
///
/// Returns an error when the defaults file cannot be loaded, the request is
/// incomplete or unresolvable, or the report cannot be written.
pub fn run_resolve(args: &ResolveArgs, stdout: &mut dyn Write) -> Result<()> {
    let config = match &args.config {
        Some(path) => ResolveConfig::load(path)?,
        None => ResolveConfig::default(),
    };
    let request = ResolveRequest::merge(args, &config)?;
    let resolution = resolve(&request)?;

    let report = if args.json {
        format!("{}\n", format_json(&resolution))
    } else if args.quiet {
        format_quiet(&resolution)
    } else {
        format_human(&resolution)
    };
    stdout.write_all(report.as_bytes())?;
    Ok(())
}

/// Run the compare command, printing `-1`, `0` or `1`.
///
/// Invalid versions take part in the comparison and sort below every valid
/// one.
///
/// # Errors
///
/// Returns [`CliError::WriteFailed`] when the result cannot be written.
pub fn run_compare(args: &CompareArgs, stdout: &mut dyn Write) -> Result<()> {
    let ordering = GodotVersion::parse(&args.first).compare(args.second.as_str());
    let value = match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    };
    writeln!(stdout, "{value}")?;
    Ok(())
}

/// Run the tag command.
///
/// # Errors
///
/// Returns [`CliError::InvalidVersion`] for input outside the release
/// grammar and [`CliError::WriteFailed`] when the tag cannot be written.
pub fn run_tag(args: &TagArgs, stdout: &mut dyn Write) -> Result<()> {
    let version = parse_valid(&args.version)?;
    writeln!(stdout, "{}", version.to_tag())?;
    Ok(())
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
