//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::trace;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::{GlobSegment, VersionGlob};

/// Local file system implementation
///
/// Provides atomic writes, version globbing, and standard file operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::from(e).at(path))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::from(e).at(parent))?;

        // Write to a sibling temp file, then rename over the target
        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FsError::from(e).at(parent))?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path)
            .map_err(|e| FsError::from(e.error).at(path))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::from(e).at(path))
    }

    fn glob(&self, pattern: &VersionGlob) -> FsResult<Vec<PathBuf>> {
        let mut segments = pattern.segments().into_iter().peekable();
        let mut frontier = vec![if pattern.is_absolute() {
            PathBuf::from("/")
        } else {
            PathBuf::new()
        }];

        // Windows drive prefix, e.g. `C:`
        if let Some(GlobSegment::Literal(drive)) = segments.peek() {
            if drive.len() == 2 && drive.ends_with(':') {
                frontier = vec![PathBuf::from(format!("{}/", drive))];
                segments.next();
            }
        }

        let mut walked = false;
        for segment in segments {
            walked = true;
            let mut next = Vec::new();
            for dir in &frontier {
                match &segment {
                    GlobSegment::Literal(name) => {
                        let candidate = dir.join(name);
                        if candidate.exists() {
                            next.push(candidate);
                        }
                    }
                    GlobSegment::Pattern(_) => expand_dir(dir, &segment, &mut next),
                }
            }
            if next.is_empty() {
                return Ok(next);
            }
            frontier = next;
        }

        Ok(if walked { frontier } else { Vec::new() })
    }
}

fn expand_dir(dir: &Path, segment: &GlobSegment, out: &mut Vec<PathBuf>) {
    let listing = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    let entries = match std::fs::read_dir(listing) {
        Ok(entries) => entries,
        Err(err) => {
            trace!(dir = %listing.display(), error = %err, "skipping unreadable directory");
            return;
        }
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        if let Some(name) = name.to_str() {
            if segment.matches(name) {
                out.push(dir.join(name));
            }
        }
    }
}
