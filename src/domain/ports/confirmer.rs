//! Confirmer port - synchronous user confirmation gate

use std::path::PathBuf;

use crate::error::BreakdownResult;

/// Asks the user to accept a destructive operation
pub trait Confirmer {
    /// Present the paths about to be deleted; `Ok(false)` means declined.
    ///
    /// Blocks until the user answers.
    fn confirm(&self, paths: &[PathBuf]) -> BreakdownResult<bool>;
}

impl<T: Confirmer + ?Sized> Confirmer for &T {
    fn confirm(&self, paths: &[PathBuf]) -> BreakdownResult<bool> {
        (**self).confirm(paths)
    }
}
