//! Configuration module for Breakdown
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BREAKDOWN_*)
//! 3. Project config (.breakdown/config.toml)
//! 4. User config (<config dir>/breakdown/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG, SCENE_ENV, TEMPLATE_ENV};
pub use types::{Config, SceneConfig, TemplateConfig, DEFAULT_PATTERN};
