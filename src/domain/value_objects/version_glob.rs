//! Version Glob Value Object
//!
//! A filesystem search pattern where the version token is replaced by an
//! exact-width digit wildcard. Built by `TemplatePattern::search_pattern`.
//!
//! The wildcard only matches exactly `width` ASCII digits. A version rendered
//! wider than that is never matched.

use std::fmt;

/// One piece of a version glob
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobPart {
    /// Literal text (may contain `/` separators)
    Literal(String),
    /// Exactly this many decimal digits
    Digits(usize),
}

/// One `/`-separated component of a version glob
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobSegment {
    /// Component without wildcards
    Literal(String),
    /// Component containing at least one digit wildcard, matched as a whole
    Pattern(Vec<GlobPart>),
}

impl GlobSegment {
    /// Check a single directory entry name against this component
    pub fn matches(&self, name: &str) -> bool {
        match self {
            GlobSegment::Literal(s) => s == name,
            GlobSegment::Pattern(parts) => match_parts(parts, name),
        }
    }
}

/// Exact-width numeric wildcard search pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionGlob {
    parts: Vec<GlobPart>,
}

impl VersionGlob {
    /// Build a glob from parts. Separators are normalized to `/`.
    pub fn new(parts: Vec<GlobPart>) -> Self {
        let parts = parts
            .into_iter()
            .map(|part| match part {
                GlobPart::Literal(s) => GlobPart::Literal(s.replace('\\', "/")),
                digits => digits,
            })
            .collect();
        Self { parts }
    }

    pub fn parts(&self) -> &[GlobPart] {
        &self.parts
    }

    /// Whether the pattern is rooted at `/`
    pub fn is_absolute(&self) -> bool {
        matches!(self.parts.first(), Some(GlobPart::Literal(s)) if s.starts_with('/'))
    }

    /// Match a whole path against the glob
    pub fn matches(&self, path: &str) -> bool {
        match_parts(&self.parts, &path.replace('\\', "/"))
    }

    /// Split into `/`-separated components.
    ///
    /// Empty components (leading `/`, doubled separators) are dropped; use
    /// `is_absolute` to recover the root.
    pub fn segments(&self) -> Vec<GlobSegment> {
        let mut components: Vec<Vec<GlobPart>> = vec![Vec::new()];
        for part in &self.parts {
            match part {
                GlobPart::Literal(text) => {
                    let mut pieces = text.split('/');
                    if let Some(first) = pieces.next() {
                        push_literal(components.last_mut(), first);
                    }
                    for piece in pieces {
                        components.push(Vec::new());
                        push_literal(components.last_mut(), piece);
                    }
                }
                GlobPart::Digits(width) => {
                    if let Some(current) = components.last_mut() {
                        current.push(GlobPart::Digits(*width));
                    }
                }
            }
        }

        components
            .into_iter()
            .filter(|c| !c.is_empty())
            .map(|component| {
                if component.iter().any(|p| matches!(p, GlobPart::Digits(_))) {
                    GlobSegment::Pattern(component)
                } else {
                    GlobSegment::Literal(
                        component
                            .iter()
                            .map(|p| match p {
                                GlobPart::Literal(s) => s.as_str(),
                                GlobPart::Digits(_) => "",
                            })
                            .collect(),
                    )
                }
            })
            .collect()
    }
}

fn push_literal(component: Option<&mut Vec<GlobPart>>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(component) = component {
        component.push(GlobPart::Literal(text.to_string()));
    }
}

// Each wildcard consumes exactly `width` ASCII digits; no backtracking.
fn match_parts(parts: &[GlobPart], text: &str) -> bool {
    let mut rest = text;
    for part in parts {
        match part {
            GlobPart::Literal(s) => match rest.strip_prefix(s.as_str()) {
                Some(tail) => rest = tail,
                None => return false,
            },
            GlobPart::Digits(width) => {
                let digits = rest
                    .bytes()
                    .take(*width)
                    .take_while(u8::is_ascii_digit)
                    .count();
                if digits != *width {
                    return false;
                }
                rest = &rest[digits..];
            }
        }
    }
    rest.is_empty()
}

impl fmt::Display for VersionGlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                GlobPart::Literal(s) => write!(f, "{}", s)?,
                GlobPart::Digits(width) => {
                    for _ in 0..*width {
                        write!(f, "[0-9]")?;
                    }
                }
            }
        }
        Ok(())
    }
}
