//! Test fixtures - reusable content constants for tests.

/// Default file extension of published versions
pub const EXT: &str = "bgeo";

/// Project config overriding the template with a flat layout
pub const FLAT_TEMPLATE_CONFIG: &str = r#"[template]
name = "flat"
pattern = "$JOB/{asset}/v{version}/{asset_basename}"
"#;

/// Project config with a misspelled template key
pub const TYPO_CONFIG: &str = r#"[template]
patern = "$JOB/{step}/{asset}/v{version}/{asset_basename}"
"#;

/// Raw (unexpanded) reference path under the default template
pub fn job_path(step: &str, asset: &str, version: u32) -> String {
    format!("$JOB/{step}/{asset}/v{version:03}/{asset}.{EXT}")
}
