//! Asset Reference Entity
//!
//! A path-bearing slot in the host document, e.g. a file parameter on a node.

use std::hash::{Hash, Hasher};

use crate::domain::value_objects::normalize_separators;

/// Handle to one path-bearing slot in the host document
///
/// Identity is the `id` alone: two handles with the same id refer to the same
/// slot even if one was read before a write and holds a stale path. Re-read
/// through `ReferenceEnumerator::refresh` after writing.
#[derive(Debug, Clone)]
pub struct AssetReference {
    id: String,
    raw_path: String,
    expanded_path: String,
    animated: bool,
}

impl AssetReference {
    pub fn new(
        id: impl Into<String>,
        raw_path: impl Into<String>,
        expanded_path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            raw_path: raw_path.into(),
            expanded_path: expanded_path.into(),
            animated: false,
        }
    }

    /// Mark as animated or expression driven
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Stable identifier (fully qualified slot name)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Stored value, possibly containing variables such as `$JOB`
    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    /// Fully resolved path usable on the filesystem
    pub fn expanded_path(&self) -> &str {
        &self.expanded_path
    }

    /// Expanded path with `/` separators
    pub fn normalized_path(&self) -> String {
        normalize_separators(&self.expanded_path)
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }
}

impl PartialEq for AssetReference {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AssetReference {}

impl Hash for AssetReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
