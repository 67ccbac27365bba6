//! Template Pattern Value Object
//!
//! Bidirectional mapping between a `FieldMap` and a path string.
//!
//! A pattern is a path containing `{field}` placeholders:
//!
//! ```text
//! /jobs/show/{step}/{asset}/v{version}/{asset_basename}
//! ```
//!
//! - Field names are `[A-Za-z0-9_]+`
//! - `version` is reserved: it must be present, only matches digits when
//!   parsing, and renders zero-padded to three digits when formatting
//! - `\` separators are normalized to `/` and repeated separators collapse,
//!   in both patterns and paths
//! - A field used more than once must hold the same value everywhere

use std::fmt;

use regex::Regex;

use super::field_map::{render_version, FieldMap, VERSION_FIELD, VERSION_WIDTH};
use super::version_glob::{GlobPart, VersionGlob};
use crate::error::{BreakdownError, BreakdownResult};

/// Characters a non-version field may capture. Never includes a separator.
const FIELD_CLASS: &str = r"[A-Za-z0-9_.\-]+";
/// Characters the version field may capture
const VERSION_CLASS: &str = r"[0-9]+";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Field(String),
}

/// Normalize path separators to `/` and collapse runs of separators.
///
/// A leading `//` is kept so UNC roots survive.
pub fn normalize_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut previous_separator = false;
    for (index, c) in path.chars().enumerate() {
        let c = if c == '\\' { '/' } else { c };
        if c == '/' {
            if previous_separator && index > 1 {
                continue;
            }
            previous_separator = true;
        } else {
            previous_separator = false;
        }
        out.push(c);
    }
    out
}

/// Immutable path template
#[derive(Debug, Clone)]
pub struct TemplatePattern {
    name: String,
    pattern: String,
    tokens: Vec<Token>,
    keys: Vec<String>,
    regex: Regex,
}

impl TemplatePattern {
    /// Build a template, failing if it has no `version` field or malformed
    /// placeholders.
    pub fn new(name: impl Into<String>, pattern: impl AsRef<str>) -> BreakdownResult<Self> {
        let name = name.into();
        let pattern = normalize_separators(pattern.as_ref());
        let tokens = tokenize(&name, &pattern)?;

        let mut keys: Vec<String> = Vec::new();
        for token in &tokens {
            if let Token::Field(field) = token {
                if !keys.contains(field) {
                    keys.push(field.clone());
                }
            }
        }

        if !keys.iter().any(|k| k == VERSION_FIELD) {
            return Err(BreakdownError::InvalidTemplate {
                name,
                reason: format!("template must contain '{{{}}}' field", VERSION_FIELD),
            });
        }

        let regex = build_regex(&name, &tokens)?;

        Ok(Self {
            name,
            pattern,
            tokens,
            keys,
            regex,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized pattern string
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Declared field names in order of first appearance
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Extract fields from a path.
    ///
    /// The whole path must match. The `version` field is stored without
    /// leading zeros.
    pub fn parse(&self, path: &str) -> BreakdownResult<FieldMap> {
        let normalized = normalize_separators(path);
        let captures = self
            .regex
            .captures(&normalized)
            .ok_or_else(|| self.mismatch(path))?;

        let mut fields = FieldMap::new();
        let mut group = 0usize;
        for token in &self.tokens {
            let Token::Field(field) = token else {
                continue;
            };
            let value = captures
                .name(&group_name(group))
                .map(|m| m.as_str())
                .ok_or_else(|| self.mismatch(path))?;
            group += 1;

            let value = if field == VERSION_FIELD {
                value
                    .parse::<u32>()
                    .map_err(|_| self.mismatch(path))?
                    .to_string()
            } else {
                value.to_string()
            };

            match fields.get(field).map(|existing| existing == value) {
                Some(true) => {}
                Some(false) => return Err(self.mismatch(path)),
                None => fields.insert(field.clone(), value),
            }
        }

        Ok(fields)
    }

    /// Render fields into a path.
    ///
    /// Every declared field must be present and no undeclared field may be
    /// supplied.
    pub fn format(&self, fields: &FieldMap) -> BreakdownResult<String> {
        self.validate(fields)?;

        let mut out = String::with_capacity(self.pattern.len());
        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Field(field) => out.push_str(&self.render_field(fields, field)?),
            }
        }
        Ok(out)
    }

    /// Render fields into a search pattern with every `version` placeholder
    /// replaced by an exact 3-digit wildcard.
    ///
    /// The `version` field itself may be absent from `fields`.
    pub fn search_pattern(&self, fields: &FieldMap) -> BreakdownResult<VersionGlob> {
        self.check_unknown(fields)?;

        let mut parts = Vec::with_capacity(self.tokens.len());
        for token in &self.tokens {
            match token {
                Token::Literal(text) => parts.push(GlobPart::Literal(text.clone())),
                Token::Field(field) if field == VERSION_FIELD => {
                    parts.push(GlobPart::Digits(VERSION_WIDTH))
                }
                Token::Field(field) => {
                    parts.push(GlobPart::Literal(self.render_field(fields, field)?))
                }
            }
        }
        Ok(VersionGlob::new(parts))
    }

    fn render_field(&self, fields: &FieldMap, field: &str) -> BreakdownResult<String> {
        let value = fields
            .get(field)
            .ok_or_else(|| BreakdownError::MissingField {
                field: field.to_string(),
                template: self.name.clone(),
            })?;
        if field == VERSION_FIELD {
            Ok(render_version(value))
        } else {
            Ok(value.to_string())
        }
    }

    fn validate(&self, fields: &FieldMap) -> BreakdownResult<()> {
        self.check_unknown(fields)?;
        if let Some(missing) = self.keys.iter().find(|k| !fields.contains_key(k)) {
            return Err(BreakdownError::MissingField {
                field: missing.clone(),
                template: self.name.clone(),
            });
        }
        Ok(())
    }

    fn check_unknown(&self, fields: &FieldMap) -> BreakdownResult<()> {
        if let Some(unknown) = fields.keys().find(|k| !self.keys.iter().any(|d| d == k)) {
            return Err(BreakdownError::UnknownField {
                field: unknown.to_string(),
                template: self.name.clone(),
            });
        }
        Ok(())
    }

    fn mismatch(&self, path: &str) -> BreakdownError {
        BreakdownError::PatternMismatch {
            path: path.to_string(),
            template: self.name.clone(),
        }
    }
}

impl PartialEq for TemplatePattern {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.pattern == other.pattern
    }
}

impl Eq for TemplatePattern {}

impl fmt::Display for TemplatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.pattern)
    }
}

fn group_name(index: usize) -> String {
    format!("f{}", index)
}

fn invalid(name: &str, reason: impl Into<String>) -> BreakdownError {
    BreakdownError::InvalidTemplate {
        name: name.to_string(),
        reason: reason.into(),
    }
}

fn tokenize(name: &str, pattern: &str) -> BreakdownResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                let mut field = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    match c {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => return Err(invalid(name, "nested '{' in placeholder")),
                        c => field.push(c),
                    }
                }
                if !closed {
                    return Err(invalid(name, format!("unclosed placeholder '{{{}'", field)));
                }
                if field.is_empty() || !field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
                {
                    return Err(invalid(name, format!("invalid field name '{}'", field)));
                }
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Field(field));
            }
            '}' => return Err(invalid(name, "unmatched '}'")),
            c => literal.push(c),
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

fn build_regex(name: &str, tokens: &[Token]) -> BreakdownResult<Regex> {
    let mut source = String::from("^");
    let mut group = 0usize;
    for token in tokens {
        match token {
            Token::Literal(text) => source.push_str(&regex::escape(text)),
            Token::Field(field) => {
                let class = if field == VERSION_FIELD {
                    VERSION_CLASS
                } else {
                    FIELD_CLASS
                };
                source.push_str(&format!("(?P<{}>{})", group_name(group), class));
                group += 1;
            }
        }
    }
    source.push('$');
    Regex::new(&source).map_err(|e| invalid(name, e.to_string()))
}
