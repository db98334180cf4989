//! Image record entity
//!
//! An [`ImageRecord`] is the in-memory representation of one discovered image
//! file. Its identity is its absolute path; everything else is metadata that
//! can change while the record lives in the library.

use super::types::ImagePath;
use crate::library::LibraryError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, Metadata};
use std::path::Path;
use std::time::SystemTime;

/// One discovered image file and its tags
#[derive(Debug, Clone)]
pub struct ImageRecord {
    filename: String,
    path: ImagePath,
    size: u64,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
    tags: Vec<String>,
    processed: bool,
}

/// Serializable snapshot of an image record, used by the index view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub filename: String,
    pub path: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub processed: bool,
}

fn timestamp_or_now(time: std::io::Result<SystemTime>) -> DateTime<Utc> {
    time.map(DateTime::<Utc>::from).unwrap_or_else(|_| Utc::now())
}

impl ImageRecord {
    /// Build a record from a path and metadata that was already read
    #[must_use]
    pub fn from_metadata(path: ImagePath, metadata: &Metadata) -> Self {
        Self {
            filename: path.file_name().to_string(),
            size: metadata.len(),
            created_at: timestamp_or_now(metadata.created()),
            modified_at: timestamp_or_now(metadata.modified()),
            path,
            tags: Vec::new(),
            processed: false,
        }
    }

    /// Build a record by reading the file's metadata from disk
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::InvalidPath` if the path is not an absolute UTF-8
    /// path, or `LibraryError::Io` if the metadata cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LibraryError> {
        let key = ImagePath::new(path.as_ref())?;
        let metadata = fs::metadata(path.as_ref())?;
        Ok(Self::from_metadata(key, &metadata))
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub const fn path(&self) -> &ImagePath {
        &self.path
    }

    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// Tags in the order they were assigned
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    #[must_use]
    pub const fn is_processed(&self) -> bool {
        self.processed
    }

    pub fn mark_processed(&mut self) {
        self.processed = true;
    }

    /// Append a tag and refresh the file metadata
    ///
    /// When the file can no longer be read the previous size is kept; the
    /// modification timestamp is bumped either way.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
        if let Err(e) = self.refresh_metadata() {
            tracing::warn!(path = %self.path, error = %e, "could not refresh image metadata");
        }
    }

    /// Re-read the file size and stamp `modified_at` with the current time
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file metadata cannot be read.
    pub fn refresh_metadata(&mut self) -> std::io::Result<()> {
        self.modified_at = Utc::now();
        self.size = fs::metadata(self.path.as_path())?.len();
        Ok(())
    }

    #[must_use]
    pub fn info(&self) -> ImageInfo {
        ImageInfo {
            filename: self.filename.clone(),
            path: self.path.to_string(),
            size: self.size,
            created_at: self.created_at,
            modified_at: self.modified_at,
            tags: self.tags.clone(),
            processed: self.processed,
        }
    }
}

impl PartialEq for ImageRecord {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for ImageRecord {}
