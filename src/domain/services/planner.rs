//! Cleanup planning service
//!
//! Pure domain logic that merges per-asset cleanup sets into one global
//! delete set, without performing any I/O.
//!
//! The global set is `union(candidates) - union(keep paths)`. Two assets may
//! point at the same file; a path kept by any asset in the batch is never
//! deleted, even if another asset nominates it.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::domain::value_objects::{CleanupKind, CleanupSet};
use crate::error::{BreakdownError, BreakdownResult};

/// Global deletion plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupPlan {
    kind: Option<CleanupKind>,
    delete: BTreeSet<PathBuf>,
    protected: BTreeSet<PathBuf>,
}

impl CleanupPlan {
    /// Kind of the sets the plan was built from, `None` for an empty batch
    pub fn kind(&self) -> Option<CleanupKind> {
        self.kind
    }

    /// Paths safe to delete
    pub fn paths(&self) -> &BTreeSet<PathBuf> {
        &self.delete
    }

    /// Keep paths of every asset in the batch
    pub fn protected(&self) -> &BTreeSet<PathBuf> {
        &self.protected
    }

    pub fn is_empty(&self) -> bool {
        self.delete.is_empty()
    }

    pub fn len(&self) -> usize {
        self.delete.len()
    }
}

/// Merges cleanup sets into a global plan
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanupPlanner;

impl CleanupPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Build the global plan. All sets must be of the same kind.
    pub fn plan(&self, sets: &[CleanupSet]) -> BreakdownResult<CleanupPlan> {
        let mut kind = None;
        let mut delete = BTreeSet::new();
        let mut protected = BTreeSet::new();

        for set in sets {
            match kind {
                None => kind = Some(set.kind()),
                Some(k) if k != set.kind() => return Err(BreakdownError::MixedCleanupKinds),
                Some(_) => {}
            }
            protected.insert(set.keep().to_path_buf());
            delete.extend(set.candidates().iter().cloned());
        }

        let delete = delete.difference(&protected).cloned().collect();

        Ok(CleanupPlan {
            kind,
            delete,
            protected,
        })
    }
}
