//! User config directory resolution with test isolation support.
//!
//! On Windows and macOS, `dirs::config_dir()` uses system APIs rather than
//! environment variables, so setting `HOME` or `XDG_CONFIG_HOME` in tests has
//! no effect there.
//!
//! `user_config_dir()` checks `BREAKDOWN_CONFIG_HOME` first and falls back to
//! `dirs::config_dir()/breakdown`.

use std::path::PathBuf;

/// Environment variable overriding the user config directory.
pub const BREAKDOWN_CONFIG_HOME_VAR: &str = "BREAKDOWN_CONFIG_HOME";

/// Directory holding the user-level `config.toml`.
///
/// # Returns
///
/// - `Some(PathBuf)` - `$BREAKDOWN_CONFIG_HOME` or `<config dir>/breakdown`
/// - `None` - if neither can be resolved
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var(BREAKDOWN_CONFIG_HOME_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("breakdown")))
}
