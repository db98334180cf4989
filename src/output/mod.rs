//! Output formatting for CLI display
//!
//! This module provides utilities for formatting scan, process and collection
//! results in the terminal.

use crate::library::CollectionSummary;
use crate::model::ImageRecord;
use crate::process::ProcessReport;
use byte_unit::{Byte, UnitType};
use colored::Colorize;

/// Human readable file size (binary units)
#[must_use]
pub fn format_size(bytes: u64) -> String {
    Byte::from_u64(bytes)
        .get_appropriate_unit(UnitType::Binary)
        .to_string()
}

/// Format an image with its size and tags for display
#[must_use]
pub fn image_line(image: &ImageRecord, quiet: bool) -> String {
    let path = image.path().to_string();

    if quiet {
        path
    } else if image.tags().is_empty() {
        format!("  {} ({})", path, format_size(image.size()))
    } else {
        format!(
            "  {} ({}) [{}]",
            path,
            format_size(image.size()),
            image.tags().join(", ").cyan()
        )
    }
}

/// Format a collection with its image count and preview
#[must_use]
pub fn collection_line(summary: &CollectionSummary, quiet: bool) -> String {
    if quiet {
        return summary.name.clone();
    }

    match &summary.preview {
        Some(preview) => format!(
            "  {} ({} image(s), preview: {})",
            summary.name.bold(),
            summary.count,
            preview
        ),
        None => format!("  {} (empty)", summary.name.bold()),
    }
}

/// One-line summary of a scan
#[must_use]
pub fn scan_summary(count: usize) -> String {
    format!("Found {} image(s)", count.to_string().green())
}

/// One-line summary of a process run
#[must_use]
pub fn process_summary(report: &ProcessReport) -> String {
    format!(
        "Tagged {} image(s) with {} tag(s), {} new collection(s)",
        report.processed.to_string().green(),
        report.tags_assigned,
        report.collections_created
    )
}
