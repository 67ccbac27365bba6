//! Breakdown result types

use std::fmt;

use serde::Serialize;

use crate::application::clean::DeletionOutcome;
use crate::domain::entities::{AssetReference, VersionedAsset};
use crate::domain::ports::FileSystem;

/// Every tracked asset from one scan
#[derive(Debug, Clone, Default)]
pub struct Breakdown {
    assets: Vec<VersionedAsset>,
}

impl Breakdown {
    pub fn new(assets: Vec<VersionedAsset>) -> Self {
        Self { assets }
    }

    pub fn assets(&self) -> &[VersionedAsset] {
        &self.assets
    }

    pub fn find(&self, id: &str) -> Option<&VersionedAsset> {
        self.assets.iter().find(|a| a.id() == id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// One display row per asset, in scan order
    pub fn rows<FS: FileSystem + ?Sized>(&self, fs: &FS) -> Vec<BreakdownRow> {
        self.assets.iter().map(|a| BreakdownRow::new(a, fs)).collect()
    }
}

/// Health of one asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    /// Current file exists and is the latest version
    Ok,
    /// A different version is the latest on disk
    Outdated,
    /// No file at the current path
    Broken,
}

impl AssetStatus {
    /// Broken wins over outdated
    pub fn of<FS: FileSystem + ?Sized>(asset: &VersionedAsset, fs: &FS) -> Self {
        if asset.is_broken(fs) {
            AssetStatus::Broken
        } else if asset.is_outdated() {
            AssetStatus::Outdated
        } else {
            AssetStatus::Ok
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetStatus::Ok => write!(f, "ok"),
            AssetStatus::Outdated => write!(f, "outdated"),
            AssetStatus::Broken => write!(f, "broken"),
        }
    }
}

/// Flattened view of one asset for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    pub name: String,
    pub id: String,
    pub path: String,
    pub version: u32,
    pub versions: Vec<u32>,
    pub status: AssetStatus,
}

impl BreakdownRow {
    pub fn new<FS: FileSystem + ?Sized>(asset: &VersionedAsset, fs: &FS) -> Self {
        Self {
            name: asset.display_name(),
            id: asset.id().to_string(),
            path: asset.reference().expanded_path().to_string(),
            version: asset.current_version(),
            versions: asset.discovered_versions().to_vec(),
            status: AssetStatus::of(asset, fs),
        }
    }
}

/// Result of dispatching a command
#[derive(Debug)]
pub enum CommandOutcome {
    /// References written, re-read after the write
    Updated(Vec<AssetReference>),
    /// Result of a delete command
    Deleted(DeletionOutcome),
}
