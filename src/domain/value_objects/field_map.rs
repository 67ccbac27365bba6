//! Field Map Value Object
//!
//! Ordered mapping from template field name to value. Produced by
//! `TemplatePattern::parse` and consumed by `TemplatePattern::format`.

use std::fmt;

/// Name of the reserved version field
pub const VERSION_FIELD: &str = "version";

/// Width the version field is zero-padded to when rendered into a path
pub const VERSION_WIDTH: usize = 3;

/// Ordered field name -> value mapping
///
/// Insertion order is preserved so a map parsed from a path iterates in the
/// order the placeholders appear in the template. The `version` entry is kept
/// as a plain decimal string (`"5"`, never `"005"`); padding is applied only
/// when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Insert or replace a field, keeping the original position on replace
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Field names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Numeric value of the `version` field, if present and numeric
    pub fn version(&self) -> Option<u32> {
        self.get(VERSION_FIELD).and_then(|v| v.parse().ok())
    }

    /// Replace the `version` field
    pub fn set_version(&mut self, version: u32) {
        self.insert(VERSION_FIELD, version.to_string());
    }

    /// Copy of this map with a different version; `self` is left untouched
    pub fn with_version(&self, version: u32) -> Self {
        let mut copy = self.clone();
        copy.set_version(version);
        copy
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl fmt::Display for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", k, v)?;
        }
        write!(f, "}}")
    }
}

/// Render a version value the way it appears in a path.
///
/// Numeric values are zero-padded to `VERSION_WIDTH` digits; wider values are
/// never truncated. Non-numeric values are left-padded with `0` as text.
pub fn render_version(value: &str) -> String {
    match value.parse::<u64>() {
        Ok(n) => format!("{:0width$}", n, width = VERSION_WIDTH),
        Err(_) => format!("{:0>width$}", value, width = VERSION_WIDTH),
    }
}
