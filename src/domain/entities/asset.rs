//! Versioned Asset Entity
//!
//! One asset reference resolved against a template, with the versions found
//! on disk at scan time.

use std::path::{Path, PathBuf};

use tracing::info;

use super::reference::AssetReference;
use crate::domain::ports::{FileSystem, ReferenceWriter};
use crate::domain::services::VersionDiscovery;
use crate::domain::value_objects::{CleanupKind, CleanupSet, FieldMap, TemplatePattern};
use crate::error::{BreakdownError, BreakdownResult};

/// An asset reference with its parsed fields and discovered versions
///
/// A snapshot: the discovered versions are fixed at construction. After any
/// change to the filesystem or to the reference, scan again.
#[derive(Debug, Clone)]
pub struct VersionedAsset {
    reference: AssetReference,
    template: TemplatePattern,
    fields: FieldMap,
    version: u32,
    versions: Vec<u32>,
}

impl VersionedAsset {
    /// Parse the reference and scan the filesystem for sibling versions
    pub fn scan<FS: FileSystem + ?Sized>(
        reference: AssetReference,
        template: &TemplatePattern,
        fs: &FS,
    ) -> BreakdownResult<Self> {
        let fields = template.parse(reference.expanded_path())?;
        let versions = VersionDiscovery::new(template, fs).discover(&fields)?;
        Self::from_parts(reference, template, fields, versions)
    }

    /// Build from already discovered versions (sorted and deduplicated here)
    pub fn with_versions(
        reference: AssetReference,
        template: &TemplatePattern,
        versions: impl IntoIterator<Item = u32>,
    ) -> BreakdownResult<Self> {
        let fields = template.parse(reference.expanded_path())?;
        let mut versions: Vec<u32> = versions.into_iter().collect();
        versions.sort_unstable();
        versions.dedup();
        Self::from_parts(reference, template, fields, versions)
    }

    fn from_parts(
        reference: AssetReference,
        template: &TemplatePattern,
        fields: FieldMap,
        versions: Vec<u32>,
    ) -> BreakdownResult<Self> {
        // Templates always declare a version and parse only yields digits for
        // it, so a missing value means the path did not really match.
        let version = fields
            .version()
            .ok_or_else(|| BreakdownError::PatternMismatch {
                path: reference.expanded_path().to_string(),
                template: template.name().to_string(),
            })?;

        Ok(Self {
            reference,
            template: template.clone(),
            fields,
            version,
            versions,
        })
    }

    pub fn reference(&self) -> &AssetReference {
        &self.reference
    }

    pub fn id(&self) -> &str {
        self.reference.id()
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Version recorded in the parsed fields
    pub fn current_version(&self) -> u32 {
        self.version
    }

    /// Ascending, duplicate-free versions found at scan time
    pub fn discovered_versions(&self) -> &[u32] {
        &self.versions
    }

    /// Highest discovered version
    pub fn latest_version(&self) -> Option<u32> {
        self.versions.last().copied()
    }

    /// A newer (or different) version is the highest on disk
    pub fn is_outdated(&self) -> bool {
        self.latest_version()
            .is_some_and(|latest| latest != self.version)
    }

    /// No file at the current path. Checked on every call.
    pub fn is_broken<FS: FileSystem + ?Sized>(&self, fs: &FS) -> bool {
        !fs.is_file(Path::new(self.reference.expanded_path()))
    }

    /// `"step: asset"` when the template has both fields, otherwise the id
    pub fn display_name(&self) -> String {
        match (self.fields.get("step"), self.fields.get("asset")) {
            (Some(step), Some(asset)) => format!("{}: {}", step, asset),
            (None, Some(asset)) => asset.to_string(),
            _ => self.reference.id().to_string(),
        }
    }

    /// Render the path of another version of this asset
    pub fn path_for(&self, version: u32) -> BreakdownResult<String> {
        self.template.format(&self.fields.with_version(version))
    }

    /// Point the reference at `new_version` and return the re-read reference.
    ///
    /// Writes even when `new_version` is the current one. This instance is
    /// not updated; scan again to observe the change.
    pub fn update_version<W: ReferenceWriter + ?Sized>(
        &self,
        new_version: u32,
        writer: &W,
    ) -> BreakdownResult<AssetReference> {
        let path = self.path_for(new_version)?;
        info!(
            id = self.reference.id(),
            from = self.version,
            to = new_version,
            %path,
            "updating reference"
        );
        writer.set_path(self.reference.id(), &path)
    }

    /// Keep the current path; nominate every older discovered version
    pub fn elders(&self) -> BreakdownResult<CleanupSet> {
        self.cleanup(CleanupKind::Elders, |v| v < self.version)
    }

    /// Keep the current path; nominate every other discovered version
    pub fn unused(&self) -> BreakdownResult<CleanupSet> {
        self.cleanup(CleanupKind::Unused, |v| v != self.version)
    }

    /// `elders()` or `unused()` by kind
    pub fn cleanup_set(&self, kind: CleanupKind) -> BreakdownResult<CleanupSet> {
        match kind {
            CleanupKind::Elders => self.elders(),
            CleanupKind::Unused => self.unused(),
        }
    }

    /// Current path as a keep-only set of the given kind
    pub fn keep_set(&self, kind: CleanupKind) -> CleanupSet {
        CleanupSet::keep_only(kind, self.keep_path())
    }

    fn keep_path(&self) -> PathBuf {
        PathBuf::from(self.reference.normalized_path())
    }

    fn cleanup(
        &self,
        kind: CleanupKind,
        nominate: impl Fn(u32) -> bool,
    ) -> BreakdownResult<CleanupSet> {
        let candidates = self
            .versions
            .iter()
            .copied()
            .filter(|&v| nominate(v))
            .map(|v| self.path_for(v).map(PathBuf::from))
            .collect::<BreakdownResult<Vec<_>>>()?;
        Ok(CleanupSet::new(kind, self.keep_path(), candidates))
    }
}
