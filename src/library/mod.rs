//! Application state for shots-studio
//!
//! [`Library`] owns the two process-wide stores (images and collections) and
//! exposes every operation that reads or mutates them. It is an ordinary value:
//! the HTTP layer wraps it in a lock, the CLI and tests own one directly.
//!
//! # Examples
//!
//! ```no_run
//! use shots_studio::library::Library;
//! use shots_studio::process::RandomTags;
//! use shots_studio::scan::Scanner;
//! use std::path::Path;
//!
//! let mut library = Library::new();
//! let count = library.scan(&Scanner::new(), Some(Path::new("/home/me/Pictures"))).unwrap();
//! library.process(&mut RandomTags::from_entropy(), false);
//! for summary in library.collection_summaries() {
//!     println!("{} ({})", summary.name, summary.count);
//! }
//! # let _ = count;
//! ```

pub mod error;
pub mod store;
pub mod views;

pub use error::LibraryError;
pub use store::{CollectionStore, ImageStore};
pub use views::{CollectionSummary, CollectionView, ImageDetails};

use crate::model::{Collection, ImageInfo, ImageRecord};
use crate::scan::Scanner;
use std::path::Path;

/// In-memory image and collection stores
#[derive(Debug, Default)]
pub struct Library {
    pub(crate) images: ImageStore,
    pub(crate) collections: CollectionStore,
}

fn base_name(filename: &str) -> &str {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
}

impl Library {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `root` (or the working directory) and replace the image store
    ///
    /// Collections are left untouched. Returns the new image count.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::DirectoryNotFound` if the root does not exist.
    pub fn scan(&mut self, scanner: &Scanner, root: Option<&Path>) -> Result<usize, LibraryError> {
        let records = scanner.scan(root)?;
        Ok(self.replace_images(records))
    }

    /// Clear the image store and fill it with `records`, dropping duplicate paths
    pub fn replace_images(&mut self, records: impl IntoIterator<Item = ImageRecord>) -> usize {
        self.images.replace(records)
    }

    #[must_use]
    pub const fn images(&self) -> &ImageStore {
        &self.images
    }

    #[must_use]
    pub const fn collections(&self) -> &CollectionStore {
        &self.collections
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Snapshot of every image, in store order
    #[must_use]
    pub fn image_infos(&self) -> Vec<ImageInfo> {
        self.images.iter().map(ImageRecord::info).collect()
    }

    #[must_use]
    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.get(name)
    }

    /// Name, size and preview of every collection, in creation order
    #[must_use]
    pub fn collection_summaries(&self) -> Vec<CollectionSummary> {
        self.collections
            .iter()
            .map(|c| CollectionSummary {
                name: c.name().to_string(),
                count: c.image_count(),
                preview: c.preview().map(ToString::to_string),
            })
            .collect()
    }

    /// Create an empty, explicitly named collection
    ///
    /// Surrounding whitespace is stripped from the name.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::MissingName` when no usable name is given and
    /// `LibraryError::DuplicateName` when the name is taken.
    pub fn create_collection(
        &mut self,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<&Collection, LibraryError> {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(LibraryError::MissingName)?;

        let mut collection = Collection::new(name);
        collection.set_description(description);
        let created = self.collections.insert(collection)?;
        tracing::info!(collection = name, "created collection");
        Ok(created)
    }

    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if no collection has this name.
    pub fn remove_collection(&mut self, name: &str) -> Result<Collection, LibraryError> {
        self.collections
            .remove(name)
            .ok_or_else(|| LibraryError::collection_not_found(name))
    }

    /// Add the image with this filename to the named collection
    ///
    /// Returns `false` if it was already a member.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if the collection or the image is missing.
    pub fn add_to_collection(&mut self, name: &str, filename: &str) -> Result<bool, LibraryError> {
        let path = self.find_image(filename)?.path().clone();
        let collection = self
            .collections
            .get_mut(name)
            .ok_or_else(|| LibraryError::collection_not_found(name))?;
        Ok(collection.add_image(path))
    }

    /// Remove the image with this filename from the named collection
    ///
    /// Returns `false` if it was not a member.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if the collection or the image is missing.
    pub fn remove_from_collection(&mut self, name: &str, filename: &str) -> Result<bool, LibraryError> {
        let path = self.find_image(filename)?.path().clone();
        let collection = self
            .collections
            .get_mut(name)
            .ok_or_else(|| LibraryError::collection_not_found(name))?;
        Ok(collection.remove_image(&path))
    }

    /// Look an image up by base name; a path argument is reduced to its base name
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if no image has this filename.
    pub fn find_image(&self, filename: &str) -> Result<&ImageRecord, LibraryError> {
        let name = base_name(filename);
        self.images
            .find_by_filename(name)
            .ok_or_else(|| LibraryError::image_not_found(name))
    }

    /// Tags of an image plus the names of every collection containing it
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if no image has this filename.
    pub fn image_details(&self, filename: &str) -> Result<ImageDetails, LibraryError> {
        let image = self.find_image(filename)?;
        Ok(ImageDetails {
            filename: image.filename().to_string(),
            path: image.path().to_string(),
            tags: image.tags().to_vec(),
            collections: self.collections.names_containing(image.path()),
        })
    }

    /// Collection metadata with its member images resolved against the store
    ///
    /// Members that are no longer in the image store (e.g. after a rescan of a
    /// different directory) are left out.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if no collection has this name.
    pub fn collection_view(&self, name: &str) -> Result<CollectionView, LibraryError> {
        let collection = self
            .collections
            .get(name)
            .ok_or_else(|| LibraryError::collection_not_found(name))?;

        Ok(CollectionView {
            name: collection.name().to_string(),
            description: collection.description().map(ToString::to_string),
            created_at: collection.created_at(),
            images: collection
                .images()
                .iter()
                .filter_map(|path| self.images.get(path))
                .map(ImageRecord::info)
                .collect(),
        })
    }
}
