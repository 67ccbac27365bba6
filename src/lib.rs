//! Breakdown - versioned asset tracking and cleanup
//!
//! Breakdown tracks the versioned asset files referenced by a scene, points
//! references at newer versions found on disk, and deletes superseded or
//! unreferenced versions without ever removing a file another reference
//! still uses.
//!
//! The core is the path template engine (`TemplatePattern`) and the version
//! reconciliation in `VersionedAsset` and `CleanupPlanner`. The host document
//! is reached through the ports in `domain::ports`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;


// Re-exports for convenience
pub use application::{BreakdownService, Command, CommandOutcome, DeleteOptions};
pub use config::Config;
pub use domain::entities::{AssetReference, VersionedAsset};
pub use domain::value_objects::{CleanupKind, FieldMap, TemplatePattern};
pub use error::{BreakdownError, BreakdownResult};
