//! Cleanup Set Value Object
//!
//! The per-asset answer to "what may be deleted": the path the asset keeps
//! plus the paths it nominates for deletion.

use std::fmt;
use std::path::{Path, PathBuf};

/// Which versions an asset nominates for deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CleanupKind {
    /// Versions strictly older than the current one
    Elders,
    /// Every version other than the current one
    Unused,
}

impl fmt::Display for CleanupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupKind::Elders => write!(f, "elders"),
            CleanupKind::Unused => write!(f, "unused"),
        }
    }
}

/// Keep path and deletion candidates for one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupSet {
    kind: CleanupKind,
    keep: PathBuf,
    candidates: Vec<PathBuf>,
}

impl CleanupSet {
    pub fn new(kind: CleanupKind, keep: impl Into<PathBuf>, candidates: Vec<PathBuf>) -> Self {
        Self {
            kind,
            keep: keep.into(),
            candidates,
        }
    }

    /// A set that only protects its keep path
    pub fn keep_only(kind: CleanupKind, keep: impl Into<PathBuf>) -> Self {
        Self::new(kind, keep, Vec::new())
    }

    pub fn kind(&self) -> CleanupKind {
        self.kind
    }

    pub fn keep(&self) -> &Path {
        &self.keep
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
