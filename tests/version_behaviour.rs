//! Behaviour-driven tests for parsing, ordering and tagging release versions.
//!
//! Tests use the rstest-bdd v0.5.0 mutable world pattern.

use godot_release::GodotVersion;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cmp::Ordering;

#[derive(Default)]
struct VersionWorld {
    input: Option<String>,
    pair: Option<(String, String)>,
    version: Option<GodotVersion>,
    ordering: Option<Ordering>,
}

impl VersionWorld {
    fn parsed(&self) -> &GodotVersion {
        self.version.as_ref().expect("version parsed")
    }
}

#[fixture]
fn world() -> VersionWorld {
    VersionWorld::default()
}

#[given("the version string \"{input}\"")]
fn given_version_string(world: &mut VersionWorld, input: String) {
    world.input = Some(input);
}

#[given("the versions \"{first}\" and \"{second}\"")]
fn given_version_pair(world: &mut VersionWorld, first: String, second: String) {
    world.pair = Some((first, second));
}

#[when("the version is parsed")]
fn when_parsed(world: &mut VersionWorld) {
    let input = world.input.as_deref().expect("input set");
    world.version = Some(GodotVersion::parse(input));
}

#[when("the smallest component is incremented")]
fn when_incremented(world: &mut VersionWorld) {
    let input = world.input.as_deref().expect("input set");
    let mut version = GodotVersion::parse(input);
    version.increment_smallest();
    world.version = Some(version);
}

#[when("the versions are compared")]
fn when_compared(world: &mut VersionWorld) {
    let (first, second) = world.pair.as_ref().expect("pair set");
    world.ordering = Some(GodotVersion::parse(first).compare(second.as_str()));
}

#[then("the version renders as \"{expected}\"")]
fn then_renders_as(world: &mut VersionWorld, expected: String) {
    assert_eq!(world.parsed().to_string(), expected);
}

#[then("the release tag is \"{expected}\"")]
fn then_tag_is(world: &mut VersionWorld, expected: String) {
    assert_eq!(world.parsed().to_tag(), expected);
}

#[then("the version is invalid")]
fn then_invalid(world: &mut VersionWorld) {
    assert!(!world.parsed().is_valid());
}

#[then("the first version is lower")]
fn then_first_lower(world: &mut VersionWorld) {
    assert_eq!(world.ordering, Some(Ordering::Less));
}

#[then("the versions are equal")]
fn then_equal(world: &mut VersionWorld) {
    assert_eq!(world.ordering, Some(Ordering::Equal));
}

#[scenario(
    path = "tests/features/version_model.feature",
    name = "Parse a version with prerelease and build metadata"
)]
fn scenario_parse_full_version(world: VersionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/version_model.feature",
    name = "Unparseable input degrades to the invalid version"
)]
fn scenario_unparseable_input(world: VersionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/version_model.feature",
    name = "A prerelease sorts below its final release"
)]
fn scenario_prerelease_below_final(world: VersionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/version_model.feature",
    name = "Development snapshots sort below alphas"
)]
fn scenario_dev_below_alpha(world: VersionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/version_model.feature",
    name = "Build metadata does not affect ordering"
)]
fn scenario_build_ignored(world: VersionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/version_model.feature",
    name = "Incrementing a prerelease bumps its number"
)]
fn scenario_increment_prerelease(world: VersionWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/version_model.feature",
    name = "The 2.0.4 hotfix is published under its own tag"
)]
fn scenario_hotfix_tag(world: VersionWorld) {
    let _ = world;
}
