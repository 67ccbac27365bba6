//! Environment Root Resolver
//!
//! Resolves `$JOB`, `$HIP` and friends from the process environment.

use std::collections::HashMap;

use crate::domain::ports::RootResolver;

/// Root resolver backed by the process environment
///
/// Explicit overrides take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct EnvRootResolver {
    overrides: HashMap<String, String>,
}

impl EnvRootResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a variable regardless of the environment
    pub fn with_override(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(name.into(), value.into());
        self
    }
}

impl RootResolver for EnvRootResolver {
    fn resolve(&self, name: &str) -> Option<String> {
        self.overrides
            .get(name)
            .cloned()
            .or_else(|| std::env::var(name).ok())
            .filter(|v| !v.is_empty())
    }
}
