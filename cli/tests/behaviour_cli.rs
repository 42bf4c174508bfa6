//! End-to-end CLI behaviour tests for `godot-release`.
//!
//! These scenarios invoke the built binary and check its output and exit
//! status. Tests use the rstest-bdd v0.5.0 mutable world pattern.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

#[derive(Default)]
struct CliWorld {
    args: Vec<String>,
    config: Option<NamedTempFile>,
    output: Option<Output>,
}

impl CliWorld {
    fn output(&self) -> &Output {
        self.output.as_ref().expect("CLI has run")
    }
}

#[fixture]
fn cli_world() -> CliWorld {
    CliWorld::default()
}

#[given("the arguments \"{args}\"")]
fn given_arguments(cli_world: &mut CliWorld, args: String) {
    cli_world.args = args.split_whitespace().map(str::to_owned).collect();
}

#[given("a config file pinning \"{version}\" for \"{platform}\" on \"{arch}\"")]
fn given_config_file(cli_world: &mut CliWorld, version: String, platform: String, arch: String) {
    let mut file = NamedTempFile::new().expect("temp config");
    write!(
        file,
        "version = \"{version}\"\nplatform = \"{platform}\"\narch = \"{arch}\"\n"
    )
    .expect("write config");
    cli_world.config = Some(file);
}

#[when("the CLI is run")]
fn when_cli_run(cli_world: &mut CliWorld) {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_godot-release"));
    cmd.args(&cli_world.args);
    if let Some(config) = &cli_world.config {
        cmd.arg("--config").arg(config.path());
    }
    cli_world.output = Some(cmd.output().expect("failed to run godot-release"));
}

#[then("the CLI exits successfully")]
fn then_success(cli_world: &mut CliWorld) {
    let output = cli_world.output();
    assert!(
        output.status.success(),
        "expected success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[then("the CLI exits with an error")]
fn then_failure(cli_world: &mut CliWorld) {
    let output = cli_world.output();
    assert_eq!(
        output.status.code(),
        Some(1),
        "expected failure, stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
}

#[then("stdout contains \"{text}\"")]
fn then_stdout_contains(cli_world: &mut CliWorld, text: String) {
    let stdout = String::from_utf8_lossy(&cli_world.output().stdout).into_owned();
    assert!(stdout.contains(&text), "stdout: {stdout}");
}

#[then("stderr contains \"{text}\"")]
fn then_stderr_contains(cli_world: &mut CliWorld, text: String) {
    let stderr = String::from_utf8_lossy(&cli_world.output().stderr).into_owned();
    assert!(stderr.contains(&text), "stderr: {stderr}");
}

#[scenario(
    path = "tests/features/cli.feature",
    name = "Resolve an engine archive for an explicit target"
)]
fn scenario_resolve_explicit_target(cli_world: CliWorld) {
    let _ = cli_world;
}

#[scenario(path = "tests/features/cli.feature", name = "Resolve using a defaults file")]
fn scenario_resolve_from_config(cli_world: CliWorld) {
    let _ = cli_world;
}

#[scenario(
    path = "tests/features/cli.feature",
    name = "Reject a target without a download"
)]
fn scenario_reject_unavailable(cli_world: CliWorld) {
    let _ = cli_world;
}

#[scenario(path = "tests/features/cli.feature", name = "Reject an invalid version")]
fn scenario_reject_invalid(cli_world: CliWorld) {
    let _ = cli_world;
}

#[scenario(path = "tests/features/cli.feature", name = "Compare two versions")]
fn scenario_compare(cli_world: CliWorld) {
    let _ = cli_world;
}
