//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system with version globbing
//! - `repositories/` - TOML scene manifest
//! - `confirm/` - Terminal and automatic confirmers
//! - `roots` - Environment-backed root variables

pub mod confirm;
pub mod fs;
pub mod repositories;
pub mod roots;

// Re-export for convenience
pub use confirm::{AutoConfirm, TerminalConfirmer};
pub use fs::LocalFs;
pub use repositories::TomlSceneRepository;
pub use roots::EnvRootResolver;
