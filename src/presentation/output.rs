//! Output Rendering
//!
//! Text rendering for humans and NDJSON events (one JSON object per line)
//! for scripts.

use std::io::{self, Write};
use std::path::Path;

use serde_json::{json, Value};
use unicode_width::UnicodeWidthStr;

use crate::application::{AssetStatus, BreakdownRow, DeletionOutcome};
use crate::domain::entities::AssetReference;
use crate::domain::value_objects::CleanupKind;
use crate::error::BreakdownError;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write every event to stdout
pub fn emit_all(events: &[Value]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for event in events {
        write_event(&mut out, event)?;
    }
    Ok(())
}

/// Collapse an ascending version list into ranges: `[1, 2, 3, 5, 7]` becomes
/// `"1-3, 5, 7"`. An empty list renders as `"-"`.
pub fn compact_versions(versions: &[u32]) -> String {
    let mut ranges: Vec<(u32, u32)> = Vec::new();
    for &v in versions {
        match ranges.last_mut() {
            Some((_, end)) if end.checked_add(1) == Some(v) => *end = v,
            _ => ranges.push((v, v)),
        }
    }

    if ranges.is_empty() {
        return "-".to_string();
    }

    ranges
        .iter()
        .map(|&(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{}-{}", start, end)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Breakdown table, one row per asset
pub fn render_breakdown(rows: &[BreakdownRow]) -> String {
    if rows.is_empty() {
        return "No tracked assets.\n".to_string();
    }

    let header = ["NAME", "VERSION", "AVAILABLE", "STATUS", "ID"];
    let mut cells: Vec<[String; 5]> = vec![header.map(str::to_string)];
    for row in rows {
        cells.push([
            row.name.clone(),
            format!("v{:03}", row.version),
            compact_versions(&row.versions),
            row.status.to_string(),
            row.id.clone(),
        ]);
    }

    let mut widths = [0usize; 5];
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    for line in &cells {
        let last = line.len() - 1;
        for (i, cell) in line.iter().enumerate() {
            out.push_str(cell);
            if i < last {
                out.push_str(&" ".repeat(widths[i] - cell.width() + 2));
            }
        }
        out.push('\n');
    }
    out
}

/// One line per written reference
pub fn render_updated(references: &[AssetReference]) -> String {
    if references.is_empty() {
        return "Nothing to update.\n".to_string();
    }
    references
        .iter()
        .map(|r| format!("Updated {} -> {}\n", r.id(), r.raw_path()))
        .collect()
}

/// Summary of a cleanup
pub fn render_deletion(kind: CleanupKind, outcome: &DeletionOutcome) -> String {
    match outcome {
        DeletionOutcome::NothingToDelete => format!("No {} versions to delete.\n", kind),
        DeletionOutcome::Cancelled { pending } => {
            format!("Aborted. {} files kept.\n", pending.len())
        }
        DeletionOutcome::Completed(report) if report.dry_run => {
            let mut out = format!(
                "Would delete {} {} files:\n",
                report.deleted.len(),
                kind
            );
            for path in &report.deleted {
                out.push_str(&format!("  {}\n", path.display()));
            }
            out
        }
        DeletionOutcome::Completed(report) => {
            let mut out = String::new();
            for path in &report.deleted {
                out.push_str(&format!("  deleted  {}\n", path.display()));
            }
            for error in &report.failed {
                out.push_str(&format!("  failed   {}\n", error));
            }
            out.push_str(&format!(
                "Deleted {} {} files, {} failed.\n",
                report.deleted.len(),
                kind,
                report.failed.len()
            ));
            out
        }
    }
}

/// `asset` events followed by a `breakdown` summary
pub fn breakdown_events(rows: &[BreakdownRow]) -> Vec<Value> {
    let mut events: Vec<Value> = rows
        .iter()
        .map(|row| {
            json!({
                "type": "asset",
                "name": row.name,
                "id": row.id,
                "path": row.path,
                "version": row.version,
                "versions": row.versions,
                "status": row.status,
            })
        })
        .collect();

    let count = |status: AssetStatus| rows.iter().filter(|r| r.status == status).count();
    events.push(json!({
        "type": "breakdown",
        "assets": rows.len(),
        "outdated": count(AssetStatus::Outdated),
        "broken": count(AssetStatus::Broken),
    }));
    events
}

/// One `reference_updated` event per written reference
pub fn update_events(references: &[AssetReference]) -> Vec<Value> {
    references
        .iter()
        .map(|r| {
            json!({
                "type": "reference_updated",
                "id": r.id(),
                "path": r.raw_path(),
                "expanded_path": r.expanded_path(),
            })
        })
        .collect()
}

/// Per-file events followed by a `clean_complete` summary
pub fn deletion_events(kind: CleanupKind, outcome: &DeletionOutcome) -> Vec<Value> {
    let mut events = Vec::new();
    let (deleted, failed, dry_run, cancelled) = match outcome {
        DeletionOutcome::NothingToDelete => (0, 0, false, false),
        DeletionOutcome::Cancelled { pending } => {
            for path in pending {
                events.push(json!({"type": "file_kept", "path": display(path)}));
            }
            (0, 0, false, true)
        }
        DeletionOutcome::Completed(report) => {
            let event_type = if report.dry_run {
                "file_would_delete"
            } else {
                "file_deleted"
            };
            for path in &report.deleted {
                events.push(json!({"type": event_type, "path": display(path)}));
            }
            for error in &report.failed {
                events.push(failure_event(error));
            }
            (
                report.deleted.len(),
                report.failed.len(),
                report.dry_run,
                false,
            )
        }
    };

    events.push(json!({
        "type": "clean_complete",
        "kind": kind.to_string(),
        "deleted": deleted,
        "failed": failed,
        "dry_run": dry_run,
        "cancelled": cancelled,
    }));
    events
}

fn failure_event(error: &BreakdownError) -> Value {
    match error {
        BreakdownError::DeletionDenied { path, message } => json!({
            "type": "file_failed",
            "path": display(path),
            "error": message,
        }),
        other => json!({"type": "file_failed", "error": other.to_string()}),
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
