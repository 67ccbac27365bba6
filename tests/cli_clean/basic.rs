use crate::common::*;
use crate::helpers::*;

#[test]
fn clean_elders_deletes_older_versions_only() {
    let env = fresh_env();

    let result = env.run(&["clean", "elders", "--yes"]);

    assert!(result.success, "clean failed: {}", result.combined_output());
    assert_eq!(chair_versions(&env), vec![2, 3, 4]);
    assert_eq!(table_versions(&env), vec![2]);
    assert!(result.stdout.contains("Deleted 2 elders files, 0 failed."));
}

#[test]
fn clean_unused_keeps_only_current_versions() {
    let env = fresh_env();

    let result = env.run(&["clean", "unused", "--yes"]);

    assert!(result.success, "clean failed: {}", result.combined_output());
    assert_eq!(chair_versions(&env), vec![2]);
    assert_eq!(table_versions(&env), vec![2]);
    assert!(result.stdout.contains("Deleted 4 unused files, 0 failed."));
}

#[test]
fn clean_restricted_to_one_reference() {
    let env = fresh_env();

    let result = env.run(&["clean", "unused", "--id", "/obj/table/file", "--yes"]);

    assert!(result.success, "clean failed: {}", result.combined_output());
    assert_eq!(chair_versions(&env), vec![1, 2, 3, 4]);
    assert_eq!(table_versions(&env), vec![2]);
}

#[test]
fn clean_unknown_id_deletes_nothing() {
    let env = fresh_env();

    let result = env.run(&["clean", "unused", "--id", "/obj/nope", "--yes"]);

    assert!(!result.success);
    assert!(result.stderr.contains("unknown reference"), "stderr: {}", result.stderr);
    assert_eq!(chair_versions(&env), vec![1, 2, 3, 4]);
}

#[test]
fn clean_dry_run_lists_without_deleting() {
    let env = fresh_env();

    let result = env.run(&["clean", "unused", "--dry-run"]);

    assert!(result.success, "clean failed: {}", result.combined_output());
    assert!(result.stdout.starts_with("Would delete 4 unused files:"));
    let chair_v1 = env.version_file("model", "chair", 1);
    assert!(result.stdout.contains(&chair_v1.display().to_string()));
    assert_eq!(chair_versions(&env), vec![1, 2, 3, 4]);
    assert_eq!(table_versions(&env), vec![1, 2]);
}

#[test]
fn clean_without_yes_declines_when_not_interactive() {
    let env = fresh_env();

    let result = env.run(&["clean", "elders"]);

    assert!(result.success, "clean failed: {}", result.combined_output());
    assert_eq!(result.stdout, "Aborted. 2 files kept.\n");
    assert_eq!(chair_versions(&env), vec![1, 2, 3, 4]);
    assert_eq!(table_versions(&env), vec![1, 2]);
}

#[test]
fn clean_with_nothing_to_delete() {
    let env = TestEnv::builder()
        .with_versions("model", "chair", &[1])
        .with_reference("/obj/chair/file", &job_path("model", "chair", 1))
        .build();

    let result = env.run(&["clean", "elders", "--yes"]);

    assert!(result.success, "clean failed: {}", result.combined_output());
    assert_eq!(result.stdout, "No elders versions to delete.\n");
}

#[test]
fn clean_never_touches_the_scene() {
    let env = fresh_env();
    let before = env.read_scene();

    let result = env.run(&["clean", "unused", "--yes"]);

    assert!(result.success, "clean failed: {}", result.combined_output());
    assert_eq!(env.read_scene(), before);
}
