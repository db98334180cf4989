//! Data entities held by the library
//!
//! - [`ImageRecord`]: one discovered image file, identified by its path
//! - [`Collection`]: a named grouping of images
//! - [`ImagePath`]: the identity key shared by both

pub mod collection;
pub mod image;
pub mod types;

pub use collection::Collection;
pub use image::{ImageInfo, ImageRecord};
pub use types::ImagePath;
