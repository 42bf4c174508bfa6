//! Sweep every published release across all targets.
//!
//! Availability and the engine URL must agree, and every URL that is offered
//! must name the requested platform family, carry the mono marker exactly when
//! mono was asked for, and name an ARM build for Linux ARM requests.

mod support;

use godot_release::GodotVersion;
use godot_release::artefact::{
    Arch, EngineTarget, Platform, engine_download_url, has_download_available,
    templates_download_url,
};
use rstest::rstest;
use support::releases::PUBLISHED_TAGS;

fn platform_families(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Linux => &["linux", "x11"],
        Platform::MacOs => &["macos", "osx"],
        Platform::Windows => &["win"],
    }
}

#[rstest]
fn engine_urls_match_availability(
    #[values(Platform::Linux, Platform::MacOs, Platform::Windows)] platform: Platform,
    #[values(false, true)] mono: bool,
) {
    for tag in PUBLISHED_TAGS {
        for arch in Arch::ALL {
            let target = EngineTarget::new(platform, arch, mono);
            let label = format!("{tag} {platform}/{arch} mono={mono}");
            let available = has_download_available(*tag, target);
            let url = engine_download_url(*tag, target);

            assert_eq!(available, url.is_some(), "{label}");
            let Some(url) = url else { continue };

            assert!(
                platform_families(platform)
                    .iter()
                    .any(|family| url.contains(family)),
                "{label}: {url}"
            );
            assert_eq!(url.contains("mono"), mono, "{label}: {url}");
            if platform == Platform::Linux && arch.is_arm() {
                assert!(url.contains("arm"), "{label}: {url}");
            }
            assert!(url.contains(&format!("/download/{tag}/")), "{label}: {url}");
        }
    }
}

#[test]
fn every_release_has_a_standard_x86_64_download() {
    for tag in PUBLISHED_TAGS {
        for platform in [Platform::Linux, Platform::Windows] {
            let target = EngineTarget::new(platform, Arch::X86_64, false);
            assert!(has_download_available(*tag, target), "{tag} {platform}");
        }
    }
}

#[test]
fn templates_are_offered_for_every_release() {
    for tag in PUBLISHED_TAGS {
        let url = templates_download_url(*tag, false).unwrap_or_default();
        assert!(url.ends_with("_export_templates.tpz"), "{tag}: {url}");

        let version = GodotVersion::parse(tag);
        let mono_supported = godot_release::artefact::resolver::supports_mono(
            &version,
            Platform::Linux,
            Arch::X86_64,
        );
        let mono_url = templates_download_url(&version, true);
        assert_eq!(mono_url.is_some(), mono_supported, "{tag}");
        if let Some(mono_url) = mono_url {
            assert_eq!(mono_url, url, "{tag}");
        }
    }
}
