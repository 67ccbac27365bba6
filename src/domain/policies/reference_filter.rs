//! Reference Filter Policy
//!
//! Decides which host references are versioned assets worth tracking.

/// Raw values that point at a folder rather than a file
pub const FOLDER_VALUES: &[&str] = &["$HIP"];

/// Suffixes excluded by default (scripts and configs)
pub const DEFAULT_EXCLUDED_SUFFIXES: &[&str] = &[".py", ".json"];

/// Filter for host references.
///
/// Works on the raw, unexpanded value. A reference is skipped if it is
/// animated or expression driven, if its raw value is a bare folder variable
/// (`$HIP`, `${HIP}`, `$HIP/`), or if its raw value ends with an excluded
/// suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceFilter {
    excluded_suffixes: Vec<String>,
}

impl ReferenceFilter {
    pub fn new(excluded_suffixes: Vec<String>) -> Self {
        Self { excluded_suffixes }
    }

    pub fn excluded_suffixes(&self) -> &[String] {
        &self.excluded_suffixes
    }

    /// Should this reference be tracked
    pub fn accepts(&self, raw_path: &str, animated: bool) -> bool {
        if animated {
            return false;
        }
        let raw = raw_path.trim();
        if is_folder_value(raw) {
            return false;
        }
        !self
            .excluded_suffixes
            .iter()
            .any(|suffix| !suffix.is_empty() && raw.ends_with(suffix.as_str()))
    }
}

fn is_folder_value(raw: &str) -> bool {
    let value = raw.trim_end_matches(['/', '\\']);
    let value = match value
        .strip_prefix("${")
        .and_then(|inner| inner.strip_suffix('}'))
    {
        Some(name) => format!("${}", name),
        None => value.to_string(),
    };
    FOLDER_VALUES.contains(&value.as_str())
}

impl Default for ReferenceFilter {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXCLUDED_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}
