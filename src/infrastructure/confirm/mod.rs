//! Infrastructure implementations for Confirmer
//!
//! - `TerminalConfirmer` - lists the files and asks on the terminal
//! - `AutoConfirm` - accepts without asking (`--yes`)

mod interactive;

pub use interactive::TerminalConfirmer;

use std::path::PathBuf;

use tracing::debug;

use crate::domain::ports::Confirmer;
use crate::error::BreakdownResult;

/// Confirmer that always accepts
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Confirmer for AutoConfirm {
    fn confirm(&self, paths: &[PathBuf]) -> BreakdownResult<bool> {
        debug!(count = paths.len(), "deletion auto-confirmed");
        Ok(true)
    }
}
