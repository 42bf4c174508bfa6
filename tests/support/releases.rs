//! Published release tags in repository listing order.
//!
//! Covers every tag in the engine's build repository up to the 4.4
//! development snapshots, including the irregular `2.0.4.1-stable` and
//! `3.2-alpha0-unofficial` tags.

/// Release tags as they appear in download URLs.
pub const PUBLISHED_TAGS: &[&str] = &[
    "2.0-stable", "2.0.1-stable", "2.0.2-stable", "2.0.3-stable", "2.0.4.1-stable", "2.1-stable",
    "2.1.1-stable", "2.1.2-stable", "2.1.3-stable", "2.1.4-stable", "2.1.5-stable", "2.1.6-rc1",
    "2.1.6-stable", "3.0-stable", "3.0.1-stable", "3.0.2-stable", "3.0.3-rc1", "3.0.3-rc2",
    "3.0.3-rc3", "3.0.3-stable", "3.0.4-stable", "3.0.5-stable", "3.0.6-stable", "3.1-alpha1",
    "3.1-alpha2", "3.1-alpha3", "3.1-alpha4", "3.1-alpha5", "3.1-beta1", "3.1-beta10",
    "3.1-beta11", "3.1-beta2", "3.1-beta3", "3.1-beta4", "3.1-beta5", "3.1-beta6", "3.1-beta7",
    "3.1-beta8", "3.1-beta9", "3.1-rc1", "3.1-rc2", "3.1-rc3", "3.1-stable", "3.1.1-rc1",
    "3.1.1-stable", "3.1.2-rc1", "3.1.2-stable", "3.2-alpha0-unofficial", "3.2-alpha1",
    "3.2-alpha2", "3.2-alpha3", "3.2-beta1", "3.2-beta2", "3.2-beta3", "3.2-beta4", "3.2-beta5",
    "3.2-beta6", "3.2-rc1", "3.2-rc2", "3.2-rc3", "3.2-rc4", "3.2-stable", "3.2.1-rc1",
    "3.2.1-rc2", "3.2.1-stable", "3.2.2-beta1", "3.2.2-beta2", "3.2.2-beta3", "3.2.2-beta4",
    "3.2.2-rc1", "3.2.2-rc2", "3.2.2-rc3", "3.2.2-rc4", "3.2.2-stable", "3.2.3-beta1",
    "3.2.3-rc1", "3.2.3-rc2", "3.2.3-rc3", "3.2.3-rc4", "3.2.3-rc5", "3.2.3-rc6", "3.2.3-stable",
    "3.2.4-beta1", "3.2.4-beta2", "3.2.4-beta3", "3.2.4-beta4", "3.2.4-beta5", "3.2.4-beta6",
    "3.2.4-rc1", "3.2.4-rc2", "3.2.4-rc3", "3.2.4-rc4", "3.2.4-rc5", "3.3-rc6", "3.3-rc7",
    "3.3-rc8", "3.3-rc9", "3.3-stable", "3.3.1-rc1", "3.3.1-rc2", "3.3.1-stable", "3.3.2-stable",
    "3.3.3-rc1", "3.3.3-rc2", "3.3.3-stable", "3.3.4-rc1", "3.3.4-stable", "3.4-beta1",
    "3.4-beta2", "3.4-beta3", "3.4-beta4", "3.4-beta5", "3.4-beta6", "3.4-rc1", "3.4-rc2",
    "3.4-rc3", "3.4-stable", "3.4.1-rc1", "3.4.1-rc2", "3.4.1-rc3", "3.4.1-stable",
    "3.4.2-stable", "3.4.3-rc1", "3.4.3-rc2", "3.4.3-stable", "3.4.4-rc1", "3.4.4-rc2",
    "3.4.4-stable", "3.4.5-rc1", "3.4.5-stable", "3.5-beta1", "3.5-beta2", "3.5-beta3",
    "3.5-beta4", "3.5-beta5", "3.5-rc1", "3.5-rc2", "3.5-rc3", "3.5-rc4", "3.5-rc5", "3.5-rc6",
    "3.5-rc7", "3.5-rc8", "3.5-stable", "3.5.1-rc1", "3.5.1-rc2", "3.5.1-stable", "3.5.2-rc1",
    "3.5.2-rc2", "3.5.2-stable", "3.5.3-rc1", "3.5.3-stable", "3.6-beta1", "3.6-beta2",
    "3.6-beta3", "3.6-beta4", "3.6-beta5", "3.6-rc1", "3.6-stable", "4.0-alpha1", "4.0-alpha10",
    "4.0-alpha11", "4.0-alpha12", "4.0-alpha13", "4.0-alpha14", "4.0-alpha15", "4.0-alpha16",
    "4.0-alpha17", "4.0-alpha2", "4.0-alpha3", "4.0-alpha4", "4.0-alpha5", "4.0-alpha6",
    "4.0-alpha7", "4.0-alpha8", "4.0-alpha9", "4.0-beta1", "4.0-beta10", "4.0-beta11",
    "4.0-beta12", "4.0-beta13", "4.0-beta14", "4.0-beta15", "4.0-beta16", "4.0-beta17",
    "4.0-beta2", "4.0-beta3", "4.0-beta4", "4.0-beta5", "4.0-beta6", "4.0-beta7", "4.0-beta8",
    "4.0-beta9", "4.0-rc1", "4.0-rc2", "4.0-rc3", "4.0-rc4", "4.0-rc5", "4.0-rc6", "4.0-stable",
    "4.0.1-rc1", "4.0.1-rc2", "4.0.1-stable", "4.0.2-rc1", "4.0.2-stable", "4.0.3-rc1",
    "4.0.3-rc2", "4.0.3-stable", "4.0.4-rc1", "4.0.4-stable", "4.1-beta1", "4.1-beta2",
    "4.1-beta3", "4.1-dev1", "4.1-dev2", "4.1-dev3", "4.1-dev4", "4.1-rc1", "4.1-rc2", "4.1-rc3",
    "4.1-stable", "4.1.1-rc1", "4.1.1-stable", "4.1.2-rc1", "4.1.2-stable", "4.1.3-rc1",
    "4.1.3-stable", "4.1.4-rc1", "4.1.4-rc2", "4.1.4-rc3", "4.1.4-stable", "4.2-beta1",
    "4.2-beta2", "4.2-beta3", "4.2-beta4", "4.2-beta5", "4.2-beta6", "4.2-dev1", "4.2-dev2",
    "4.2-dev3", "4.2-dev4", "4.2-dev5", "4.2-dev6", "4.2-rc1", "4.2-rc2", "4.2-stable",
    "4.2.1-rc1", "4.2.1-stable", "4.2.2-rc1", "4.2.2-rc2", "4.2.2-rc3", "4.2.2-stable",
    "4.3-beta1", "4.3-beta2", "4.3-beta3", "4.3-dev1", "4.3-dev2", "4.3-dev3", "4.3-dev4",
    "4.3-dev5", "4.3-dev6", "4.3-rc1", "4.3-rc2", "4.3-rc3", "4.3-stable", "4.4-dev1", "4.4-dev2",
    "4.4-dev3", "4.4-dev4",
];
