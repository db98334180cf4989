//! Route handlers grouped by resource.

pub mod collections;
pub mod files;
pub mod images;
