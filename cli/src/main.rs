//! `godot-release` CLI entrypoint.
//!
//! Parses arguments, dispatches to the selected subcommand and turns any
//! error into a message on stderr and exit status 1.

use clap::Parser;
use godot_release_cli::cli::{Cli, Command};
use godot_release_cli::error::Result;
use godot_release_cli::resolve::{run_compare, run_resolve, run_tag};
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Resolve(args) => run_resolve(args, stdout),
        Command::Compare(args) => run_compare(args, stdout),
        Command::Tag(args) => run_tag(args, stdout),
    }
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, format!("error: {err}"));
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort logging; ignore write failures.
    }
}
