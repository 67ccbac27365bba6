//! Command handlers for the CLI binary

pub mod clean;
pub mod list;
pub mod update;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use breakdown::config::Config;

/// Resolve the configuration for this run.
///
/// An explicit `--config` file replaces the project/user lookup. `--scene`
/// overrides whatever the config and environment say.
pub fn load_config(config_path: Option<&Path>, scene: Option<&Path>) -> Result<Config> {
    let (config, warnings) = match config_path {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            (config.with_env_overrides(), warnings)
        }
        None => {
            let cwd = std::env::current_dir().context("cannot read the working directory")?;
            Config::load_or_default(Some(&cwd))?
        }
    };

    for warning in &warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => warn!(
                "unknown config key '{}' in {} (did you mean '{}'?)",
                warning.key, location, suggestion
            ),
            None => warn!("unknown config key '{}' in {}", warning.key, location),
        }
    }

    let mut config = config;
    if let Some(scene) = scene {
        config.scene.path = scene.to_path_buf();
    }
    Ok(config)
}
