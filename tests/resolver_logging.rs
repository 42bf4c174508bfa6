//! Log records emitted while resolving versions and artefacts.
//!
//! `logtest` installs a process-wide logger, so this binary holds a single
//! test.

use godot_release::GodotVersion;
use godot_release::artefact::{
    Arch, EngineTarget, Platform, engine_download_url, templates_download_url,
};
use logtest::Logger;

#[test]
fn resolution_explains_fallbacks_and_refusals() {
    let mut logger = Logger::start();

    let invalid = GodotVersion::parse("nightly");
    let arm_linux = EngineTarget::new(Platform::Linux, Arch::Arm64, false);
    let url = engine_download_url("4.1", arm_linux);
    let templates = templates_download_url("1.1", false);

    assert!(!invalid.is_valid());
    assert_eq!(url, None);
    assert_eq!(templates, None);

    let mut messages = Vec::new();
    while let Some(record) = logger.pop() {
        messages.push((record.level(), record.args().to_string()));
    }

    let logged = |level: log::Level, needle: &str| {
        messages
            .iter()
            .any(|(recorded, message)| *recorded == level && message.contains(needle))
    };
    assert!(
        logged(log::Level::Trace, "unparseable version string \"nightly\""),
        "{messages:?}"
    );
    assert!(
        logged(log::Level::Debug, "has no Linux arm64 build; resolving x86_64 instead"),
        "{messages:?}"
    );
    assert!(logged(log::Level::Debug, "NoArmBuild"), "{messages:?}");
    assert!(
        logged(log::Level::Debug, "no standard export templates for 1.1"),
        "{messages:?}"
    );
}
