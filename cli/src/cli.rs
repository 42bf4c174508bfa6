//! CLI argument definitions for `godot-release`.
//!
//! Kept apart from the entrypoint so the binary stays focused on dispatch.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Resolve Godot engine release tags and download URLs.
#[derive(Parser, Debug)]
#[command(name = "godot-release")]
#[command(version, about)]
#[command(long_about = concat!(
    "Resolve Godot engine release tags and download URLs.\n\n",
    "Given a release such as 3.2.1 or 4.0-alpha13, reports the tag it was ",
    "published under and the URL of the engine archive for a platform, ",
    "architecture and runtime. Platform and architecture default to the ",
    "running machine. Nothing is downloaded.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Resolve the engine archive for this machine:\n",
    "    $ godot-release resolve 4.2.1\n\n",
    "  Resolve the mono build and export templates for Linux:\n",
    "    $ godot-release resolve 3.6 --mono --platform linux --arch x86_64 --templates\n\n",
    "  Print only the URLs, for scripts:\n",
    "    $ godot-release resolve 4.3 -q\n\n",
    "  Compare two releases:\n",
    "    $ godot-release compare 4.0-beta2 4.0\n",
))]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve the release tag and download URLs for a target.
    Resolve(ResolveArgs),

    /// Compare two versions, printing -1, 0 or 1.
    Compare(CompareArgs),

    /// Print the release tag for a version.
    Tag(TagArgs),
}

/// Arguments for the resolve command.
#[derive(Parser, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Release to resolve, for example `4.2.1` or `4.0-alpha13`.
    #[arg(value_name = "VERSION")]
    pub version: Option<String>,

    /// Resolve the mono (C#) build.
    #[arg(long)]
    pub mono: bool,

    /// Target platform [default: this machine].
    #[arg(long, value_name = "NAME")]
    pub platform: Option<String>,

    /// Target architecture [default: this machine].
    #[arg(long, value_name = "NAME")]
    pub arch: Option<String>,

    /// Also resolve the export templates bundle.
    #[arg(long)]
    pub templates: bool,

    /// Output in JSON format for scripting.
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Read defaults from a TOML file; flags take precedence.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Print only the resolved URLs.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the compare command.
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// Left-hand version.
    #[arg(value_name = "A")]
    pub first: String,

    /// Right-hand version.
    #[arg(value_name = "B")]
    pub second: String,
}

/// Arguments for the tag command.
#[derive(Parser, Debug, Clone)]
pub struct TagArgs {
    /// Version to render as a release tag.
    #[arg(value_name = "VERSION")]
    pub version: String,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
