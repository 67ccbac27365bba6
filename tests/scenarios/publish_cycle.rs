//! Scenario: Publish, Update, Clean
//!
//! Journey: New versions of the props were published overnight. The artist
//! reviews the scene, moves everything to latest and reclaims disk space.
//!
//! Steps:
//! 1. `list` shows outdated assets
//! 2. `clean elders --dry-run` previews the cleanup
//! 3. `update-all` moves every reference to its latest version
//! 4. `clean elders --yes` deletes the old versions
//! 5. `list` shows everything up to date
//!
//! Success Criteria:
//! - Dry run never deletes
//! - Only the latest version of each asset remains
//! - The scene keeps `$JOB` relative paths

use crate::common::*;

/// SCENARIO: Full update then cleanup cycle
#[test]
fn scenario_update_all_then_clean_elders() {
    let env = TestEnv::builder()
        .with_versions("model", "chair", &[1, 2, 3])
        .with_versions("lookdev", "lamp", &[4, 5])
        .with_reference("/obj/chair/file", &job_path("model", "chair", 1))
        .with_reference("/obj/lamp/file", &job_path("lookdev", "lamp", 4))
        .build();

    // Step 1: review
    let listed = env.run(&["--json", "list"]);
    assert!(listed.success, "List failed: {}", listed.stderr);
    let summary = listed.events().pop().unwrap();
    assert_eq!(summary["outdated"], 2);

    // Step 2: preview
    let preview = env.run(&["clean", "elders", "--dry-run"]);
    assert!(preview.success, "Dry run failed: {}", preview.stderr);
    assert_eq!(preview.stdout.trim(), "No elders versions to delete.");

    // Step 3: move to latest
    let updated = env.run(&["update-all"]);
    assert!(updated.success, "Update failed: {}", updated.stderr);
    let scene = env.read_scene();
    assert!(scene.contains(&job_path("model", "chair", 3)));
    assert!(scene.contains(&job_path("lookdev", "lamp", 5)));

    // Step 4: cleanup
    let cleaned = env.run(&["clean", "elders", "--yes"]);
    assert!(
        cleaned.success,
        "Clean should succeed.\nOutput: {}",
        cleaned.combined_output()
    );
    assert!(cleaned.stdout.contains("Deleted 3 elders files, 0 failed."));
    assert_eq!(env.versions_on_disk("model", "chair", &[1, 2, 3]), vec![3]);
    assert_eq!(env.versions_on_disk("lookdev", "lamp", &[4, 5]), vec![5]);

    // Step 5: everything is current
    let listed = env.run(&["--json", "list"]);
    let summary = listed.events().pop().unwrap();
    assert_eq!(summary["outdated"], 0);
    assert_eq!(summary["broken"], 0);
}
