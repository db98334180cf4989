//! Collection entity

use super::types::ImagePath;
use chrono::{DateTime, Utc};

/// A named, ordered grouping of images without duplicates
///
/// Membership is stored as image identity keys. The first member added is the
/// collection's preview.
#[derive(Debug, Clone)]
pub struct Collection {
    name: String,
    images: Vec<ImagePath>,
    created_at: DateTime<Utc>,
    description: Option<String>,
}

impl Collection {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            images: Vec::new(),
            created_at: Utc::now(),
            description: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn images(&self) -> &[ImagePath] {
        &self.images
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Empty descriptions are stored as `None`
    pub fn set_description(&mut self, description: Option<impl Into<String>>) {
        self.description = description.map(Into::into).filter(|d| !d.is_empty());
    }

    #[must_use]
    pub fn contains(&self, path: &ImagePath) -> bool {
        self.images.contains(path)
    }

    /// Add an image, returning `false` if it was already a member
    pub fn add_image(&mut self, path: ImagePath) -> bool {
        if self.contains(&path) {
            return false;
        }
        self.images.push(path);
        true
    }

    /// Remove an image, returning `false` if it was not a member
    pub fn remove_image(&mut self, path: &ImagePath) -> bool {
        let before = self.images.len();
        self.images.retain(|p| p != path);
        self.images.len() != before
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// First image added, if any
    #[must_use]
    pub fn preview(&self) -> Option<&ImagePath> {
        self.images.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(p: &str) -> ImagePath {
        ImagePath::new(p).unwrap()
    }

    #[test]
    fn test_new_collection_is_empty() {
        let collection = Collection::new("code");
        assert_eq!(collection.name(), "code");
        assert_eq!(collection.image_count(), 0);
        assert!(collection.preview().is_none());
        assert!(collection.description().is_none());
    }

    #[test]
    fn test_add_image_ignores_duplicates() {
        let mut collection = Collection::new("code");
        assert!(collection.add_image(key("/a.png")));
        assert!(!collection.add_image(key("/a.png")));
        assert!(collection.add_image(key("/b.png")));

        assert_eq!(collection.image_count(), 2);
    }

    #[test]
    fn test_preview_is_first_added() {
        let mut collection = Collection::new("code");
        collection.add_image(key("/b.png"));
        collection.add_image(key("/a.png"));

        assert_eq!(collection.preview(), Some(&key("/b.png")));
    }

    #[test]
    fn test_remove_image() {
        let mut collection = Collection::new("code");
        collection.add_image(key("/a.png"));
        collection.add_image(key("/b.png"));

        assert!(collection.remove_image(&key("/a.png")));
        assert!(!collection.remove_image(&key("/a.png")));
        assert_eq!(collection.preview(), Some(&key("/b.png")));
        assert!(!collection.contains(&key("/a.png")));
    }

    #[test]
    fn test_set_description() {
        let mut collection = Collection::new("code");
        collection.set_description(Some("snippets"));
        assert_eq!(collection.description(), Some("snippets"));

        collection.set_description(Some(""));
        assert!(collection.description().is_none());

        collection.set_description(None::<String>);
        assert!(collection.description().is_none());
    }
}
