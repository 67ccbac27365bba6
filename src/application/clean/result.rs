//! Deletion result types

use std::path::PathBuf;

use crate::error::BreakdownError;

/// How a deletion run ended
#[derive(Debug)]
pub enum DeletionOutcome {
    /// None of the planned paths exist as files
    NothingToDelete,
    /// The user declined; nothing was touched
    Cancelled {
        /// Files that would have been deleted
        pending: Vec<PathBuf>,
    },
    /// Deletion ran (or was simulated in a dry run)
    Completed(DeletionReport),
}

impl DeletionOutcome {
    /// Report if deletion ran
    pub fn report(&self) -> Option<&DeletionReport> {
        match self {
            DeletionOutcome::Completed(report) => Some(report),
            _ => None,
        }
    }

    /// Number of files removed (0 unless completed)
    pub fn deleted_count(&self) -> usize {
        self.report().map_or(0, |r| r.deleted.len())
    }
}

/// Result of a deletion run
#[derive(Debug, Default)]
pub struct DeletionReport {
    /// Files that were deleted (or would be deleted in dry run)
    pub deleted: Vec<PathBuf>,
    /// Per-file failures, each a `BreakdownError::DeletionDenied`
    pub failed: Vec<BreakdownError>,
    /// No file was touched
    pub dry_run: bool,
}

impl DeletionReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Add a deleted file
    pub fn add_deleted(&mut self, path: PathBuf) {
        self.deleted.push(path);
    }

    /// Add a failure
    pub fn add_failure(&mut self, error: BreakdownError) {
        self.failed.push(error);
    }

    /// Total count of files attempted
    pub fn total_count(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    /// Check if every file was deleted
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
