use serde_json::json;

use crate::helpers::*;

#[test]
fn clean_json_reports_each_file_then_summary() {
    let env = fresh_env();

    let result = env.run(&["--json", "clean", "elders", "--yes"]);

    assert!(result.success, "clean failed: {}", result.combined_output());
    let events = result.events();
    assert_eq!(events.len(), 3);
    assert!(events[..2].iter().all(|e| e["type"] == "file_deleted"));
    assert_eq!(
        events[2],
        json!({
            "type": "clean_complete",
            "kind": "elders",
            "deleted": 2,
            "failed": 0,
            "dry_run": false,
            "cancelled": false,
        })
    );
}

#[test]
fn clean_json_dry_run() {
    let env = fresh_env();

    let result = env.run(&["--json", "clean", "unused", "--dry-run"]);

    assert!(result.success, "clean failed: {}", result.combined_output());
    let events = result.events();
    let would_delete = events
        .iter()
        .filter(|e| e["type"] == "file_would_delete")
        .count();
    assert_eq!(would_delete, 4);
    assert_eq!(events.last().unwrap()["dry_run"], true);
    assert_eq!(chair_versions(&env), vec![1, 2, 3, 4]);
}

#[test]
fn clean_json_cancelled() {
    let env = fresh_env();

    let result = env.run(&["--json", "clean", "unused"]);

    assert!(result.success, "clean failed: {}", result.combined_output());
    let events = result.events();
    assert_eq!(events.iter().filter(|e| e["type"] == "file_kept").count(), 4);
    assert_eq!(events.last().unwrap()["cancelled"], true);
}
