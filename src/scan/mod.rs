//! Directory scanning
//!
//! Walks a directory tree and turns every allow-listed image file into an
//! [`ImageRecord`]. Entries that cannot be read are logged and skipped so a
//! single unreadable subtree does not abort the whole walk.

use crate::library::LibraryError;
use crate::model::{ImagePath, ImageRecord};
use std::fs::{self, Metadata};
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// File extensions treated as images (compared case-insensitively)
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Recursive image scanner
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    /// Whether to descend into symlinked directories while walking.
    /// Symlinks to files are always picked up.
    pub follow_links: bool,
}

impl Scanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Check whether a path carries one of the image extensions
    #[must_use]
    pub fn is_image(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                IMAGE_EXTENSIONS
                    .iter()
                    .any(|allowed| ext.eq_ignore_ascii_case(allowed))
            })
    }

    /// Resolve the scan root to an absolute path without `.` or `..`
    /// segments, defaulting to the current working directory
    ///
    /// `..` is resolved lexically, so `shots/../shots` and `shots` give the
    /// same root and therefore the same image keys.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::DirectoryNotFound` if the path does not exist, or
    /// `LibraryError::Io` if the working directory cannot be determined.
    pub fn resolve_root(root: Option<&Path>) -> Result<PathBuf, LibraryError> {
        let root = match root {
            Some(path) => path.to_path_buf(),
            None => std::env::current_dir()?,
        };

        if !root.exists() {
            return Err(LibraryError::DirectoryNotFound(root.display().to_string()));
        }

        Ok(normalize(&std::path::absolute(&root)?))
    }

    /// Walk `root` and build one record per image file
    ///
    /// A root that exists but is not a directory yields no records. The walk
    /// never visits a path twice, so records are not deduplicated here; the
    /// image store keyed by path does that on insert.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::DirectoryNotFound` if the root does not exist.
    pub fn scan(&self, root: Option<&Path>) -> Result<Vec<ImageRecord>, LibraryError> {
        let root = Self::resolve_root(root)?;
        if !root.is_dir() {
            info!(root = %root.display(), "scan root is not a directory, nothing to do");
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for entry in WalkDir::new(&root).follow_links(self.follow_links) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    skipped += 1;
                    continue;
                }
            };

            if entry.file_type().is_dir() || !Self::is_image(entry.path()) {
                continue;
            }

            let metadata = match self.target_metadata(&entry) {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!(path = %entry.path().display(), error = %e, "skipping image without metadata");
                    skipped += 1;
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }

            match ImagePath::new(entry.path()) {
                Ok(key) => {
                    debug!(path = %key, "found image");
                    records.push(ImageRecord::from_metadata(key, &metadata));
                }
                Err(e) => {
                    warn!(path = %entry.path().display(), error = %e, "skipping image");
                    skipped += 1;
                }
            }
        }

        info!(
            root = %root.display(),
            images = records.len(),
            skipped,
            "scan finished"
        );
        Ok(records)
    }

    /// Metadata of the file an entry points at
    ///
    /// Without `follow_links` walkdir reports a symlink's own metadata, so
    /// symlinks are resolved here to see the target file.
    fn target_metadata(&self, entry: &DirEntry) -> io::Result<Metadata> {
        if entry.path_is_symlink() && !self.follow_links {
            fs::metadata(entry.path())
        } else {
            entry.metadata().map_err(io::Error::from)
        }
    }
}

/// Drop `.` segments and resolve `..` against the preceding segment
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
