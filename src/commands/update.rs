//! Update command handlers

use anyhow::{bail, Result};

use breakdown::application::{Command, CommandOutcome, DeleteOptions};
use breakdown::config::Config;
use breakdown::domain::entities::AssetReference;
use breakdown::infrastructure::TerminalConfirmer;
use breakdown::presentation::factory::create_breakdown_service;
use breakdown::presentation::output::{emit_all, render_updated, update_events};

/// Point one reference at `version`, or at its latest discovered version
pub fn cmd_update(config: &Config, id: &str, version: Option<u32>, json: bool) -> Result<()> {
    let command = match version {
        Some(new_version) => Command::UpdateVersion {
            asset_id: id.to_string(),
            new_version,
        },
        None => Command::UpdateToLatest {
            asset_id: id.to_string(),
        },
    };
    run(config, &command, json)
}

/// Point every reference at its latest discovered version
pub fn cmd_update_all(config: &Config, json: bool) -> Result<()> {
    run(config, &Command::UpdateAll, json)
}

fn run(config: &Config, command: &Command, json: bool) -> Result<()> {
    let service = create_breakdown_service(config, TerminalConfirmer::new())?;
    let CommandOutcome::Updated(references) = service.dispatch(command, &DeleteOptions::new())?
    else {
        bail!("update did not write any reference");
    };
    report(&references, json)
}

fn report(references: &[AssetReference], json: bool) -> Result<()> {
    if json {
        emit_all(&update_events(references))?;
    } else {
        print!("{}", render_updated(references));
    }
    Ok(())
}
