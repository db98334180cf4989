//! shots-studio - scan, tag and group screenshots
//!
//! This library scans a directory tree for image files, assigns random
//! demonstration tags to them, groups them into tag-named collections and
//! serves the result over a small JSON API.
//!
//! - [`library::Library`]: the in-memory image and collection stores
//! - [`scan::Scanner`]: recursive directory walk with an extension allow-list
//! - [`process`]: demo tag assignment and tag collections
//! - [`server`]: axum router exposing every operation

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod library;
pub mod model;
pub mod output;
pub mod process;
pub mod scan;
pub mod server;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum StudioError {
    /// Library operation error
    #[error("{0}")]
    Library(#[from] library::LibraryError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
