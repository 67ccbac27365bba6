//! Version discovery service
//!
//! Finds sibling versions of an asset on disk by scanning for paths that
//! differ from the current one only in the version token.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{normalize_separators, FieldMap, TemplatePattern};
use crate::error::{BreakdownError, BreakdownResult};

/// Scans the filesystem for the versions of one asset
///
/// The search pattern replaces the version token with an exact 3-digit
/// wildcard, so versions rendered wider than 3 digits (1000 and up) are not
/// found even though the template renders them.
pub struct VersionDiscovery<'a, FS: FileSystem + ?Sized> {
    template: &'a TemplatePattern,
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> VersionDiscovery<'a, FS> {
    pub fn new(template: &'a TemplatePattern, fs: &'a FS) -> Self {
        Self { template, fs }
    }

    /// Sorted, duplicate-free versions of the asset described by `fields`.
    ///
    /// Entries that do not parse through the template are skipped.
    pub fn discover(&self, fields: &FieldMap) -> BreakdownResult<Vec<u32>> {
        let glob = self.template.search_pattern(fields)?;
        debug!(pattern = %glob, "scanning for versions");

        let matches = self.fs.glob(&glob).map_err(|e| {
            BreakdownError::Io(std::io::Error::other(format!(
                "failed to scan {}: {}",
                glob, e
            )))
        })?;

        let mut versions = BTreeSet::new();
        for path in matches {
            let path = normalize_separators(&path.to_string_lossy());
            match self.template.parse(&path).map(|f| f.version()) {
                Ok(Some(version)) => {
                    versions.insert(version);
                }
                Ok(None) | Err(_) => trace!(%path, "ignoring entry that is not a version"),
            }
        }

        Ok(versions.into_iter().collect())
    }
}
