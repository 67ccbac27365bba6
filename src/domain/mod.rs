//! Domain Layer
//!
//! This is the core of Breakdown - template parsing and version reconciliation.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (AssetReference, VersionedAsset)
//! - `value_objects/` - Immutable value types (TemplatePattern, FieldMap, CleanupSet)
//! - `services/` - Domain services (VersionDiscovery, CleanupPlanner)
//! - `policies/` - Business rules (ReferenceFilter)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - Filesystem and host access go through ports
//! 2. **Snapshots** - Scanned assets never change; scan again after a write
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
