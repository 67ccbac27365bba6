//! Clean command handler
//!
//! Deletes elder or unused versions of the tracked assets.

use anyhow::{bail, Result};

use breakdown::application::{Command, CommandOutcome, DeleteOptions};
use breakdown::config::Config;
use breakdown::domain::ports::Confirmer;
use breakdown::domain::value_objects::CleanupKind;
use breakdown::infrastructure::{AutoConfirm, TerminalConfirmer};
use breakdown::presentation::factory::create_breakdown_service;
use breakdown::presentation::output::{deletion_events, emit_all, render_deletion};

/// Execute the clean command
pub fn cmd_clean(
    config: &Config,
    kind: CleanupKind,
    ids: Vec<String>,
    yes: bool,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let auto = AutoConfirm;
    let terminal = TerminalConfirmer::new();
    let confirmer: &dyn Confirmer = if yes { &auto } else { &terminal };

    let service = create_breakdown_service(config, confirmer)?;
    let options = DeleteOptions::new().with_dry_run(dry_run);

    let CommandOutcome::Deleted(outcome) = service.dispatch(&Command::delete(kind, ids), &options)?
    else {
        bail!("clean did not produce a deletion outcome");
    };

    if json {
        emit_all(&deletion_events(kind, &outcome))?;
    } else {
        print!("{}", render_deletion(kind, &outcome));
    }

    if let Some(report) = outcome.report() {
        if !report.is_success() {
            bail!("{} of {} files could not be deleted", report.failed.len(), report.total_count());
        }
    }
    Ok(())
}
