//! Breakdown commands

use crate::domain::value_objects::CleanupKind;

/// A user action against the breakdown
///
/// An empty `asset_ids` list selects every asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Point one reference at a given version
    UpdateVersion { asset_id: String, new_version: u32 },
    /// Point one reference at its latest discovered version
    UpdateToLatest { asset_id: String },
    /// Point every reference with discovered versions at its latest
    UpdateAll,
    /// Delete versions older than the current one
    DeleteElders { asset_ids: Vec<String> },
    /// Delete every version other than the current one
    DeleteUnused { asset_ids: Vec<String> },
}

impl Command {
    /// Delete command for a cleanup kind
    pub fn delete(kind: CleanupKind, asset_ids: Vec<String>) -> Self {
        match kind {
            CleanupKind::Elders => Command::DeleteElders { asset_ids },
            CleanupKind::Unused => Command::DeleteUnused { asset_ids },
        }
    }
}
