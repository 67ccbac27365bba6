//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --config, --scene) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::value_objects::CleanupKind;

/// Breakdown - track versioned asset files and clean up superseded versions
#[derive(Parser, Debug)]
#[command(name = "breakdown")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output one JSON object per line
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: .breakdown/config.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Scene manifest (overrides config and BREAKDOWN_SCENE)
    #[arg(long, global = true, value_name = "PATH")]
    pub scene: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every tracked asset with its versions and status
    List,

    /// Point one reference at a version (the latest by default)
    Update {
        /// Reference id
        id: String,

        /// Version number instead of the latest discovered one
        #[arg(long, value_name = "N")]
        version: Option<u32>,
    },

    /// Point every reference at its latest discovered version
    UpdateAll,

    /// Delete superseded (elders) or unreferenced (unused) versions
    Clean {
        /// Which versions to delete
        #[arg(value_enum)]
        kind: CleanKind,

        /// Restrict to these reference ids (can be specified multiple times)
        #[arg(long = "id", value_name = "ID")]
        ids: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Show what would be deleted without deleting
        #[arg(long)]
        dry_run: bool,
    },
}

/// Cleanup kind as accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanKind {
    /// Versions older than the current one
    Elders,
    /// Every version other than the current one
    Unused,
}

impl From<CleanKind> for CleanupKind {
    fn from(kind: CleanKind) -> Self {
        match kind {
            CleanKind::Elders => CleanupKind::Elders,
            CleanKind::Unused => CleanupKind::Unused,
        }
    }
}
