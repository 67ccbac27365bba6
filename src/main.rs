//! Breakdown CLI - track versioned asset files and clean up old versions
//!
//! Usage: breakdown [--json] [-v...] [--config PATH] [--scene PATH] <COMMAND>
//!
//! Commands:
//!   list        Show every tracked asset with its versions and status
//!   update      Point one reference at a version
//!   update-all  Point every reference at its latest version
//!   clean       Delete elder or unused versions

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use breakdown::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = commands::load_config(cli.config.as_deref(), cli.scene.as_deref())?;

    match cli.command {
        Commands::List => commands::list::cmd_list(&config, cli.json),
        Commands::Update { id, version } => {
            commands::update::cmd_update(&config, &id, version, cli.json)
        }
        Commands::UpdateAll => commands::update::cmd_update_all(&config, cli.json),
        Commands::Clean {
            kind,
            ids,
            yes,
            dry_run,
        } => commands::clean::cmd_clean(&config, kind.into(), ids, yes, dry_run, cli.json),
    }
}

/// Log to stderr; `RUST_LOG` wins over the `-v` count
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
