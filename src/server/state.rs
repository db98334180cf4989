//! Shared state for HTTP handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::StudioConfig;
use crate::library::Library;

/// Shared state for request handlers.
///
/// Every mutating request takes the write lock, so scans, processing runs and
/// collection edits are serialized.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The image and collection stores.
    pub library: Arc<RwLock<Library>>,
    /// Server-side configuration.
    pub config: Arc<StudioConfig>,
}

impl AppState {
    /// Creates state around an empty library.
    #[must_use]
    pub fn new(config: StudioConfig) -> Self {
        Self::with_library(Library::new(), config)
    }

    /// Creates state around an existing library.
    #[must_use]
    pub fn with_library(library: Library, config: StudioConfig) -> Self {
        Self {
            library: Arc::new(RwLock::new(library)),
            config: Arc::new(config),
        }
    }
}
