//! Terminal Confirmer
//!
//! Lists the files about to be deleted on stderr and asks via `dialoguer`.

use std::path::PathBuf;

use dialoguer::Confirm;
use is_terminal::IsTerminal;
use tracing::warn;

use crate::domain::ports::Confirmer;
use crate::error::{BreakdownError, BreakdownResult};

/// Interactive confirmer using stdin/stderr.
///
/// Declines when stdin is not a terminal, so scripts must pass `--yes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirmer;

impl TerminalConfirmer {
    pub fn new() -> Self {
        Self
    }
}

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, paths: &[PathBuf]) -> BreakdownResult<bool> {
        if !std::io::stdin().is_terminal() {
            warn!("stdin is not a terminal, declining deletion (use --yes to skip the prompt)");
            return Ok(false);
        }

        eprintln!();
        eprintln!("The following files will be deleted:");
        for path in paths {
            eprintln!("  {}", path.display());
        }
        eprintln!();

        Confirm::new()
            .with_prompt(format!("Delete {} files?", paths.len()))
            .default(false)
            .interact()
            .map_err(|e| BreakdownError::Io(std::io::Error::other(e.to_string())))
    }
}
