//! Library error types
//!
//! This module defines every failure the scan, process and collection
//! operations can surface to a caller. All of them are recoverable: the
//! request layer turns them into a structured failure payload with a
//! human-readable message.
//!
//! # Error Types
//!
//! - **`DirectoryNotFound`**: the scan target does not exist
//! - **`MissingName`** / **`DuplicateName`** / **`ReservedName`**: collection
//!   creation validation
//! - **`NotFound`**: lookup miss for an image or a collection
//! - **`InvalidPath`**: a path that cannot be used as an image key or that
//!   tries to escape the user files root
//! - **`Io`**: unexpected filesystem failure

use thiserror::Error;

/// Errors raised by library operations
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Scan target does not exist
    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(String),

    /// Collection creation without a name
    #[error("Name is required")]
    MissingName,

    /// A collection with this name already exists
    #[error("Collection already exists: {0}")]
    DuplicateName(String),

    /// Name collides with a fixed route segment
    #[error("Collection name is reserved: {0}")]
    ReservedName(String),

    /// No image or collection matched the lookup
    #[error("{0} not found")]
    NotFound(String),

    /// Path is not usable (traversal sequence, invalid UTF-8, not absolute)
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LibraryError {
    /// Lookup miss for an image, keyed by filename
    #[must_use]
    pub fn image_not_found(filename: &str) -> Self {
        Self::NotFound(format!("Image '{filename}'"))
    }

    /// Lookup miss for a collection, keyed by name
    #[must_use]
    pub fn collection_not_found(name: &str) -> Self {
        Self::NotFound(format!("Collection '{name}'"))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
