//! Output formatting for resolved releases.
//!
//! A [`Resolution`] is rendered as aligned human-readable lines, as bare
//! URLs for scripts, or as JSON.

use godot_release::GodotVersion;
use godot_release::artefact::{Arch, EngineTarget, Platform};
use serde::Serialize;

/// Everything the resolve command reports about one release and target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Canonical display form of the version.
    pub version: GodotVersion,
    /// Tag the release is published under.
    pub tag: String,
    /// Target platform.
    pub platform: Platform,
    /// Target architecture.
    pub arch: Arch,
    /// Whether the mono build was requested.
    pub mono: bool,
    /// Engine archive URL.
    pub engine_url: String,
    /// Export templates URL, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_url: Option<String>,
}

impl Resolution {
    /// Return the target this resolution was made for.
    #[must_use]
    pub const fn target(&self) -> EngineTarget {
        EngineTarget::new(self.platform, self.arch, self.mono)
    }
}

/// Describe a target as `platform/arch`, with a mono marker when requested.
///
/// # Examples
///
/// ```
/// use godot_release::artefact::{Arch, EngineTarget, Platform};
/// use godot_release_cli::output::describe_target;
///
/// let target = EngineTarget::new(Platform::Linux, Arch::Arm64, true);
/// assert_eq!(describe_target(target), "linux/arm64 (mono)");
/// ```
#[must_use]
pub fn describe_target(target: EngineTarget) -> String {
    let mono = if target.mono { " (mono)" } else { "" };
    format!("{}/{}{mono}", target.platform, target.arch)
}

/// Format a resolution for human-readable output.
#[must_use]
pub fn format_human(resolution: &Resolution) -> String {
    let mut output = format!(
        "Version:   {}\nTag:       {}\nTarget:    {}\nEngine:    {}\n",
        resolution.version,
        resolution.tag,
        describe_target(resolution.target()),
        resolution.engine_url,
    );
    if let Some(templates) = &resolution.templates_url {
        output.push_str(&format!("Templates: {templates}\n"));
    }
    output
}

/// Format a resolution as bare URLs, one per line.
#[must_use]
pub fn format_quiet(resolution: &Resolution) -> String {
    let mut output = format!("{}\n", resolution.engine_url);
    if let Some(templates) = &resolution.templates_url {
        output.push_str(&format!("{templates}\n"));
    }
    output
}

/// Format a resolution as JSON.
#[must_use]
pub fn format_json(resolution: &Resolution) -> String {
    // Use pretty printing for readability
    serde_json::to_string_pretty(resolution).unwrap_or_else(|_| "{}".to_owned())
}
