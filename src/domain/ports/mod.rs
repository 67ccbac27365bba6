//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirmer;
pub mod file_system;
pub mod reference_repository;
pub mod root_resolver;

pub use confirmer::Confirmer;
pub use file_system::{FileSystem, FsError, FsResult};
pub use reference_repository::{ReferenceEnumerator, ReferenceWriter};
pub use root_resolver::RootResolver;
