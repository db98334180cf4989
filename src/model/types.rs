//! Identity key for image records
//!
//! An image is identified solely by its absolute path. [`ImagePath`] wraps
//! that path as a validated UTF-8 string so it can be hashed, compared,
//! serialized to JSON and handed to the file-serving route without repeated
//! conversions at each use site.
//!
//! # Examples
//!
//! ```
//! use shots_studio::model::ImagePath;
//!
//! let key = ImagePath::new("/tmp/shots/a.png").unwrap();
//! assert_eq!(&*key, "/tmp/shots/a.png");
//! assert_eq!(key.file_name(), "a.png");
//! ```

use crate::library::LibraryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Absolute, UTF-8 path of an image file
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImagePath(String);

impl ImagePath {
    /// # Errors
    ///
    /// Returns `LibraryError::InvalidPath` if the path is relative or contains
    /// invalid UTF-8.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, LibraryError> {
        let path = path.as_ref();
        if !path.is_absolute() {
            return Err(LibraryError::InvalidPath(format!(
                "{} is not absolute",
                path.display()
            )));
        }
        path.to_str()
            .ok_or_else(|| LibraryError::InvalidPath("Invalid UTF-8 in path".into()))
            .map(|s| Self(s.to_string()))
    }

    /// Base name of the file (empty for a root path)
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.as_path()
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<PathBuf> for ImagePath {
    type Error = LibraryError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        Self::new(path)
    }
}

impl TryFrom<&Path> for ImagePath {
    type Error = LibraryError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        Self::new(path)
    }
}

impl AsRef<Path> for ImagePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<str> for ImagePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for ImagePath {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for ImagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
