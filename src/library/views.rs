//! Read-only payloads built from the library state

use crate::model::ImageInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the collection listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub name: String,
    pub count: usize,
    /// Path of the first image added, `null` for an empty collection
    pub preview: Option<String>,
}

/// Tags and collection memberships of a single image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDetails {
    pub filename: String,
    pub path: String,
    pub tags: Vec<String>,
    pub collections: Vec<String>,
}

/// Everything a collection detail page needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionView {
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub images: Vec<ImageInfo>,
}
