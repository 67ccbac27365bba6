//! RootResolver port - variable expansion for project roots
//!
//! Raw reference values and configured templates may contain `$NAME` or
//! `${NAME}` variables (`$JOB`, `$HIP`). Resolution of a single name is left
//! to the implementation; expansion and contraction are shared.

use crate::domain::value_objects::normalize_separators;
use crate::error::{BreakdownError, BreakdownResult};

/// Resolves root variables to their values
pub trait RootResolver {
    /// Value of a variable, `None` if unset
    fn resolve(&self, name: &str) -> Option<String>;

    /// Substitute every `$NAME` / `${NAME}` in `raw`.
    ///
    /// Fails on the first unresolved variable. A `$` not followed by a name is
    /// kept as is.
    fn expand(&self, raw: &str) -> BreakdownResult<String> {
        let mut out = String::with_capacity(raw.len());
        let mut rest = raw;

        while let Some(pos) = rest.find('$') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];

            let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
                match braced.find('}') {
                    Some(end) if is_var_name(&braced[..end]) => (&braced[..end], end + 2),
                    _ => ("", 0),
                }
            } else {
                let end = after
                    .char_indices()
                    .find(|&(i, c)| !(c == '_' || c.is_ascii_alphabetic() || (i > 0 && c.is_ascii_digit())))
                    .map(|(i, _)| i)
                    .unwrap_or(after.len());
                (&after[..end], end)
            };

            if name.is_empty() {
                out.push('$');
                rest = after;
                continue;
            }

            let value = self
                .resolve(name)
                .ok_or_else(|| BreakdownError::UnresolvedRoot {
                    name: name.to_string(),
                })?;
            out.push_str(&value);
            rest = &after[consumed..];
        }

        out.push_str(rest);
        Ok(out)
    }

    /// Replace a leading root value in `path` with its `$NAME` variable.
    ///
    /// Variables are tried in order; the first whose value prefixes `path` at
    /// a separator boundary wins. Unset or empty variables are skipped.
    fn contract(&self, path: &str, vars: &[String]) -> String {
        let normalized = normalize_separators(path);
        for var in vars {
            let Some(value) = self.resolve(var) else {
                continue;
            };
            let value = normalize_separators(&value);
            let value = value.trim_end_matches('/');
            if value.is_empty() {
                continue;
            }
            if let Some(tail) = normalized.strip_prefix(value) {
                if tail.is_empty() || tail.starts_with('/') {
                    return format!("${}{}", var, tail);
                }
            }
        }
        normalized
    }
}

fn is_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
