//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::policies::{ReferenceFilter, DEFAULT_EXCLUDED_SUFFIXES};
use crate::error::BreakdownResult;

use super::loader::{self, ConfigWarning};

/// Default template, rooted at the `$JOB` variable
pub const DEFAULT_PATTERN: &str = "$JOB/{step}/{asset}/v{version}/{asset_basename}";

/// Path template configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default = "default_template_name")]
    pub name: String,

    /// Pattern with `{field}` placeholders; `$NAME` variables are expanded
    /// before the template is built
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            name: default_template_name(),
            pattern: default_pattern(),
        }
    }
}

fn default_template_name() -> String {
    "general".to_string()
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

/// Scene manifest configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_scene_path")]
    pub path: PathBuf,

    /// References whose raw path ends with one of these are not tracked
    #[serde(default = "default_excluded_suffixes")]
    pub excluded_suffixes: Vec<String>,

    /// Variables substituted back into written paths, in priority order
    #[serde(default = "default_portable_vars")]
    pub portable_vars: Vec<String>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path: default_scene_path(),
            excluded_suffixes: default_excluded_suffixes(),
            portable_vars: default_portable_vars(),
        }
    }
}

fn default_scene_path() -> PathBuf {
    PathBuf::from("scene.toml")
}

fn default_excluded_suffixes() -> Vec<String> {
    DEFAULT_EXCLUDED_SUFFIXES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_portable_vars() -> Vec<String> {
    vec!["JOB".to_string(), "HIP".to_string()]
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub template: TemplateConfig,

    #[serde(default)]
    pub scene: SceneConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BreakdownResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BreakdownResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(
        project_root: Option<&Path>,
    ) -> BreakdownResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (BREAKDOWN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Reference filter built from the scene settings
    pub fn reference_filter(&self) -> ReferenceFilter {
        ReferenceFilter::new(self.scene.excluded_suffixes.clone())
    }
}
