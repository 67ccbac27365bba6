//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cleanup;
mod field_map;
mod template;
mod version_glob;

pub use cleanup::{CleanupKind, CleanupSet};
pub use field_map::{render_version, FieldMap, VERSION_FIELD, VERSION_WIDTH};
pub use template::{normalize_separators, TemplatePattern};
pub use version_glob::{GlobPart, GlobSegment, VersionGlob};
