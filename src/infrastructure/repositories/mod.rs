//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod scene;

pub use scene::TomlSceneRepository;
