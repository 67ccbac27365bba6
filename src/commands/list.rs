//! List command handler

use anyhow::{Context, Result};

use breakdown::config::Config;
use breakdown::infrastructure::TerminalConfirmer;
use breakdown::presentation::factory::create_breakdown_service;
use breakdown::presentation::output::{breakdown_events, emit_all, render_breakdown};

/// Print the breakdown table (or NDJSON events)
pub fn cmd_list(config: &Config, json: bool) -> Result<()> {
    let service = create_breakdown_service(config, TerminalConfirmer::new())?;
    let breakdown = service
        .scan()
        .with_context(|| format!("failed to scan {}", config.scene.path.display()))?;

    let rows = breakdown.rows(service.fs());
    if json {
        emit_all(&breakdown_events(&rows))?;
    } else {
        print!("{}", render_breakdown(&rows));
    }
    Ok(())
}
