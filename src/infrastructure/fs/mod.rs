//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;

pub use home::{user_config_dir, BREAKDOWN_CONFIG_HOME_VAR};
pub use local::LocalFs;
