//! Keyed in-memory stores
//!
//! Both stores keep insertion order in a `Vec` and a `HashMap` index from the
//! identity key to the position, giving ordered iteration and constant-time
//! identity lookups:
//! - [`ImageStore`]: `ImagePath` -> `ImageRecord`
//! - [`CollectionStore`]: collection name -> `Collection`

use super::error::LibraryError;
use crate::model::{Collection, ImagePath, ImageRecord};
use std::collections::HashMap;

/// Ordered image records, unique by path
#[derive(Debug, Default)]
pub struct ImageStore {
    records: Vec<ImageRecord>,
    index: HashMap<ImagePath, usize>,
}

impl ImageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless one with the same path exists
    ///
    /// Returns `true` if the record was added.
    pub fn insert(&mut self, record: ImageRecord) -> bool {
        if self.index.contains_key(record.path()) {
            return false;
        }
        self.index.insert(record.path().clone(), self.records.len());
        self.records.push(record);
        true
    }

    /// Replace the whole store, dropping duplicate paths
    ///
    /// Returns the resulting record count.
    pub fn replace(&mut self, records: impl IntoIterator<Item = ImageRecord>) -> usize {
        self.clear();
        for record in records {
            self.insert(record);
        }
        self.len()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
    }

    #[must_use]
    pub fn get(&self, path: &ImagePath) -> Option<&ImageRecord> {
        self.index.get(path).map(|&i| &self.records[i])
    }

    #[must_use]
    pub fn contains(&self, path: &ImagePath) -> bool {
        self.index.contains_key(path)
    }

    /// First record, in store order, whose base name matches
    #[must_use]
    pub fn find_by_filename(&self, filename: &str) -> Option<&ImageRecord> {
        self.records.iter().find(|r| r.filename() == filename)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.records.iter()
    }

    /// Mutable iteration; a record's path cannot change so the index stays valid
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ImageRecord> {
        self.records.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Ordered collections, unique by name
#[derive(Debug, Default)]
pub struct CollectionStore {
    collections: Vec<Collection>,
    index: HashMap<String, usize>,
}

impl CollectionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `LibraryError::DuplicateName` if the name is already taken.
    pub fn insert(&mut self, collection: Collection) -> Result<&mut Collection, LibraryError> {
        if self.index.contains_key(collection.name()) {
            return Err(LibraryError::DuplicateName(collection.name().to_string()));
        }
        let position = self.collections.len();
        self.index.insert(collection.name().to_string(), position);
        self.collections.push(collection);
        Ok(&mut self.collections[position])
    }

    /// Get the named collection, creating it when absent
    ///
    /// The flag is `true` when the collection was created by this call.
    pub fn ensure(&mut self, name: &str) -> (&mut Collection, bool) {
        if let Some(&i) = self.index.get(name) {
            return (&mut self.collections[i], false);
        }
        let position = self.collections.len();
        self.index.insert(name.to_string(), position);
        self.collections.push(Collection::new(name));
        (&mut self.collections[position], true)
    }

    pub fn remove(&mut self, name: &str) -> Option<Collection> {
        let position = self.index.remove(name)?;
        let removed = self.collections.remove(position);
        for i in self.index.values_mut() {
            if *i > position {
                *i -= 1;
            }
        }
        Some(removed)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.index.get(name).map(|&i| &self.collections[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Collection> {
        self.index.get(name).map(|&i| &mut self.collections[i])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Names of every collection that has `path` as a member
    #[must_use]
    pub fn names_containing(&self, path: &ImagePath) -> Vec<String> {
        self.collections
            .iter()
            .filter(|c| c.contains(path))
            .map(|c| c.name().to_string())
            .collect()
    }

    pub fn clear(&mut self) {
        self.collections.clear();
        self.index.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Collection> {
        self.collections.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
