//! Deletion Executor
//!
//! Removes the files of a cleanup plan after confirmation.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::ports::{Confirmer, FileSystem, FsError};
use crate::domain::services::CleanupPlan;
use crate::error::{BreakdownError, BreakdownResult};

use super::options::DeleteOptions;
use super::result::{DeletionOutcome, DeletionReport};

/// Deletion executor - filters, confirms, then deletes
pub struct DeletionExecutor<FS, C>
where
    FS: FileSystem,
    C: Confirmer,
{
    fs: FS,
    confirmer: C,
}

impl<FS, C> DeletionExecutor<FS, C>
where
    FS: FileSystem,
    C: Confirmer,
{
    /// Create a new executor
    pub fn new(fs: FS, confirmer: C) -> Self {
        Self { fs, confirmer }
    }

    /// Delete the files in `plan`.
    ///
    /// Paths that are not existing files are dropped first. If none remain
    /// the outcome is `NothingToDelete`. Declining the confirmation returns
    /// `Cancelled` without touching the disk. Once confirmed every file is
    /// attempted; a failure on one does not stop the others.
    pub fn execute(
        &self,
        plan: &CleanupPlan,
        options: &DeleteOptions,
    ) -> BreakdownResult<DeletionOutcome> {
        self.execute_paths(plan.paths().iter().map(PathBuf::as_path), options)
    }

    /// Same as `execute` for an arbitrary list of paths
    pub fn execute_paths<'p>(
        &self,
        paths: impl IntoIterator<Item = &'p Path>,
        options: &DeleteOptions,
    ) -> BreakdownResult<DeletionOutcome> {
        let existing: Vec<PathBuf> = paths
            .into_iter()
            .filter(|p| {
                let exists = self.fs.is_file(p);
                if !exists {
                    debug!(path = %p.display(), "skipping, not a file");
                }
                exists
            })
            .map(Path::to_path_buf)
            .collect();

        if existing.is_empty() {
            info!("nothing to delete");
            return Ok(DeletionOutcome::NothingToDelete);
        }

        if options.dry_run {
            let mut report = DeletionReport::new(true);
            for path in existing {
                report.add_deleted(path);
            }
            return Ok(DeletionOutcome::Completed(report));
        }

        if !self.confirmer.confirm(&existing)? {
            info!(count = existing.len(), "deletion declined");
            return Ok(DeletionOutcome::Cancelled { pending: existing });
        }

        let mut report = DeletionReport::new(false);
        for path in existing {
            match self.fs.remove(&path) {
                Ok(()) => {
                    info!(path = %path.display(), "deleted");
                    report.add_deleted(path);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "failed to delete");
                    report.add_failure(denied(path, err));
                }
            }
        }

        Ok(DeletionOutcome::Completed(report))
    }
}

fn denied(path: PathBuf, err: FsError) -> BreakdownError {
    let message = match err {
        FsError::PermissionDenied(_) => "permission denied. The file may be held open by the \
             host application (restart it), opened in another program (close it), or you may \
             lack write permission on it (ask your administrator)"
            .to_string(),
        FsError::NotFound(_) => "the file disappeared before it could be deleted".to_string(),
        other => format!("{}. Close any program using the file and try again", other),
    };
    BreakdownError::DeletionDenied { path, message }
}
