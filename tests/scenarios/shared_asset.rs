//! Scenario: Two Nodes Share One Asset
//!
//! Journey: An artist loads the same chair twice, pinned at different
//! versions, then cleans up old versions.
//!
//! Steps:
//! 1. chair v001-v004 are published
//! 2. One node points at v002, another at v003
//! 3. Artist runs clean elders, then clean unused
//!
//! Success Criteria:
//! - Neither pinned version is ever deleted
//! - Versions no node points at are removed

use crate::common::*;

fn shared_chair() -> TestEnv {
    TestEnv::builder()
        .with_versions("model", "chair", &[1, 2, 3, 4])
        .with_reference("/obj/chair_a/file", &job_path("model", "chair", 2))
        .with_reference("/obj/chair_b/file", &job_path("model", "chair", 3))
        .build()
}

/// SCENARIO: Elders of one node are kept when the other node uses them
#[test]
fn scenario_elders_spare_the_other_pin() {
    let env = shared_chair();

    let result = env.run(&["clean", "elders", "--yes"]);

    assert!(
        result.success,
        "Clean should succeed.\nOutput: {}",
        result.combined_output()
    );
    // chair_b nominates v002 as an elder; chair_a still points at it.
    assert_eq!(env.versions_on_disk("model", "chair", &[1, 2, 3, 4]), vec![2, 3, 4]);
}

/// SCENARIO: Unused cleanup keeps both pins and drops everything else
#[test]
fn scenario_unused_keeps_both_pins() {
    let env = shared_chair();

    let result = env.run(&["clean", "unused", "--yes"]);

    assert!(
        result.success,
        "Clean should succeed.\nOutput: {}",
        result.combined_output()
    );
    assert_eq!(env.versions_on_disk("model", "chair", &[1, 2, 3, 4]), vec![2, 3]);
}

/// SCENARIO: Cleaning through one node still honours the other
#[test]
fn scenario_clean_one_node_only() {
    let env = shared_chair();

    let result = env.run(&["clean", "unused", "--id", "/obj/chair_b/file", "--yes"]);

    assert!(
        result.success,
        "Clean should succeed.\nOutput: {}",
        result.combined_output()
    );
    assert_eq!(env.versions_on_disk("model", "chair", &[1, 2, 3, 4]), vec![2, 3]);

    let listed = env.run(&["list"]);
    assert!(!listed.stdout.contains("broken"), "{}", listed.stdout);
}
