//! Testing utilities for shots-studio
//!
//! Provides [`ShotTree`], a temporary directory pre-populated with files, and
//! [`FixedTags`], a deterministic tag picker.
//!
//! Only available when compiled with `cfg(test)`.

use crate::process::TagPicker;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temporary directory tree that is removed on drop
pub struct ShotTree {
    dir: TempDir,
}

impl ShotTree {
    /// Create an empty tree
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Create a tree containing the given relative paths
    ///
    /// Intermediate directories are created as needed.
    ///
    /// # Panics
    /// Panics if any file cannot be written.
    #[must_use]
    pub fn with_files(files: &[&str]) -> Self {
        let tree = Self::new();
        for file in files {
            tree.add_file(file, b"test content");
        }
        tree
    }

    /// # Panics
    /// Panics if the file or its parent directories cannot be written.
    pub fn add_file(&self, relative: &str, content: &[u8]) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for ShotTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Tag picker that always returns the same tags
pub struct FixedTags(pub Vec<&'static str>);

impl TagPicker for FixedTags {
    fn pick<'a>(&mut self, vocabulary: &[&'a str]) -> Vec<&'a str> {
        vocabulary
            .iter()
            .copied()
            .filter(|tag| self.0.iter().any(|fixed| fixed == tag))
            .collect()
    }
}
