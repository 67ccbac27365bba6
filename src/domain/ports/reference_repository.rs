//! Reference ports - abstraction over the host document
//!
//! The host document owns the path-bearing slots. The core reads them through
//! `ReferenceEnumerator` and writes new paths through `ReferenceWriter`.

use crate::domain::entities::AssetReference;
use crate::error::BreakdownResult;

/// Read access to the host document's asset references
pub trait ReferenceEnumerator {
    /// All path-bearing references that point at versioned assets.
    ///
    /// Implementations exclude animated/expression-driven references and
    /// references to non-asset files. Each id appears at most once.
    fn enumerate(&self) -> BreakdownResult<Vec<AssetReference>>;

    /// Re-read one reference by id
    fn refresh(&self, id: &str) -> BreakdownResult<AssetReference>;
}

/// Write access to the host document's asset references
pub trait ReferenceWriter {
    /// Point the reference at a new expanded path and return the re-read
    /// reference.
    ///
    /// Implementations may substitute known root variables back into the
    /// stored value.
    fn set_path(&self, id: &str, expanded_path: &str) -> BreakdownResult<AssetReference>;
}
