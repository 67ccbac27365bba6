//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `AssetReference` - A path-bearing slot in the host document
//! - `VersionedAsset` - A reference resolved against a template, with versions on disk

mod asset;
mod reference;

pub use asset::VersionedAsset;
pub use reference::AssetReference;
