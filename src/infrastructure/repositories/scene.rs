//! TOML Scene Repository
//!
//! Implements the reference ports over a TOML scene manifest standing in for
//! the host document.
//!
//! An entry either carries a `path` or a `link` naming the id of the entry it
//! takes its path from. Links are followed to the owning entry, which is what
//! gets tracked and rewritten:
//!
//! ```toml
//! [[reference]]
//! id = "/obj/chair/file"
//! path = "$JOB/model/chair/v002/chair.bgeo"
//!
//! [[reference]]
//! id = "/obj/chair_copy/file"
//! link = "/obj/chair/file"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::entities::AssetReference;
use crate::domain::policies::ReferenceFilter;
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::{ReferenceEnumerator, ReferenceWriter, RootResolver};
use crate::error::{BreakdownError, BreakdownResult};
use crate::infrastructure::fs::LocalFs;

/// TOML representation of one reference
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlReference {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    animated: bool,
}

/// Helper for serde skip_serializing_if
fn is_false(b: &bool) -> bool {
    !*b
}

/// TOML representation of the manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TomlScene {
    #[serde(default, rename = "reference")]
    references: Vec<TomlReference>,
}

/// TOML-based scene repository
///
/// The manifest is re-read on every call, never cached across a write.
pub struct TomlSceneRepository<R: RootResolver> {
    path: PathBuf,
    fs: LocalFs,
    resolver: R,
    filter: ReferenceFilter,
    portable_vars: Vec<String>,
}

impl<R: RootResolver> TomlSceneRepository<R> {
    /// Create a repository with the default filter and `JOB`, `HIP` as
    /// portable variables
    pub fn new(path: impl Into<PathBuf>, resolver: R) -> Self {
        Self {
            path: path.into(),
            fs: LocalFs::new(),
            resolver,
            filter: ReferenceFilter::default(),
            portable_vars: vec!["JOB".to_string(), "HIP".to_string()],
        }
    }

    pub fn with_filter(mut self, filter: ReferenceFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Variables substituted back into stored paths, in priority order
    pub fn with_portable_vars(mut self, vars: Vec<String>) -> Self {
        self.portable_vars = vars;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BreakdownResult<TomlScene> {
        let content = self.fs.read(&self.path).map_err(|e| self.invalid(e))?;
        toml::from_str(&content).map_err(|e| self.invalid(e))
    }

    fn save(&self, scene: &TomlScene) -> BreakdownResult<()> {
        let content = toml::to_string_pretty(scene).map_err(|e| self.invalid(e))?;
        self.fs
            .write(&self.path, &content)
            .map_err(|e| self.invalid(e))
    }

    fn invalid(&self, err: impl std::fmt::Display) -> BreakdownError {
        BreakdownError::InvalidScene {
            file: self.path.clone(),
            message: err.to_string(),
        }
    }

    /// Index of the entry owning the path for `id`, following links.
    ///
    /// The first entry with a given id wins.
    fn source_index(&self, scene: &TomlScene, id: &str) -> BreakdownResult<usize> {
        let position = |id: &str| scene.references.iter().position(|r| r.id == id);

        let mut index =
            position(id).ok_or_else(|| BreakdownError::UnknownReference { id: id.to_string() })?;
        let mut visited = vec![index];

        while let Some(target) = &scene.references[index].link {
            let next = position(target).ok_or_else(|| {
                self.invalid(format!(
                    "reference '{}' links to unknown reference '{}'",
                    scene.references[index].id, target
                ))
            })?;
            if visited.contains(&next) {
                return Err(self.invalid(format!("link cycle through reference '{}'", target)));
            }
            visited.push(next);
            index = next;
        }

        Ok(index)
    }

    fn raw_path<'a>(&self, entry: &'a TomlReference) -> BreakdownResult<&'a str> {
        entry
            .path
            .as_deref()
            .ok_or_else(|| self.invalid(format!("reference '{}' has no path or link", entry.id)))
    }

    fn to_reference(&self, entry: &TomlReference) -> BreakdownResult<AssetReference> {
        let raw = self.raw_path(entry)?;
        let expanded = self.resolver.expand(raw)?;
        Ok(AssetReference::new(&entry.id, raw, expanded).with_animated(entry.animated))
    }
}

impl<R: RootResolver> ReferenceEnumerator for TomlSceneRepository<R> {
    fn enumerate(&self) -> BreakdownResult<Vec<AssetReference>> {
        let scene = self.load()?;
        let mut references: Vec<AssetReference> = Vec::new();

        for entry in &scene.references {
            let source = &scene.references[self.source_index(&scene, &entry.id)?];
            if source.id != entry.id {
                debug!(id = %entry.id, source = %source.id, "following linked reference");
            }

            let raw = self.raw_path(source)?;
            if !self.filter.accepts(raw, source.animated) {
                debug!(id = %source.id, path = %raw, "skipping filtered reference");
                continue;
            }
            if references.iter().any(|r| r.id() == source.id) {
                debug!(id = %source.id, "skipping duplicate reference id");
                continue;
            }
            references.push(self.to_reference(source)?);
        }

        Ok(references)
    }

    fn refresh(&self, id: &str) -> BreakdownResult<AssetReference> {
        let scene = self.load()?;
        let index = self.source_index(&scene, id)?;
        self.to_reference(&scene.references[index])
    }
}

impl<R: RootResolver> ReferenceWriter for TomlSceneRepository<R> {
    fn set_path(&self, id: &str, expanded_path: &str) -> BreakdownResult<AssetReference> {
        let mut scene = self.load()?;
        let raw = self.resolver.contract(expanded_path, &self.portable_vars);

        let index = self.source_index(&scene, id)?;
        let entry = &mut scene.references[index];
        entry.path = Some(raw);
        let source_id = entry.id.clone();

        self.save(&scene)?;
        info!(
            id = %source_id,
            path = expanded_path,
            manifest = %self.path.display(),
            "reference written"
        );

        self.refresh(&source_id)
    }
}
