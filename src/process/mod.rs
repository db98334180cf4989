//! Demonstration tagging
//!
//! The Process operation gives every unprocessed image between
//! [`MIN_TAGS`] and [`MAX_TAGS`] distinct tags drawn from [`DEMO_TAGS`] and
//! files the image into one collection per tag, creating collections named
//! after tags on first use. Processed images are never touched again.
//!
//! Tag selection goes through the [`TagPicker`] trait so callers can plug in a
//! seeded generator (tests) or an entropy-seeded one (the server).

use crate::library::Library;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

/// Vocabulary the demo tags are sampled from
pub const DEMO_TAGS: &[&str] = &[
    "screenshot",
    "code",
    "social-media",
    "document",
    "website",
    "dark-mode",
    "light-mode",
    "mobile",
    "desktop",
    "chat",
    "email",
    "terminal",
    "browser",
    "text-editor",
    "music",
];

/// Fewest tags assigned to one image
pub const MIN_TAGS: usize = 2;
/// Most tags assigned to one image
pub const MAX_TAGS: usize = 4;

/// Source of tag selections
pub trait TagPicker {
    /// Choose the tags for one image from `vocabulary`
    fn pick<'a>(&mut self, vocabulary: &[&'a str]) -> Vec<&'a str>;
}

/// Picks a uniform count in `[MIN_TAGS, MAX_TAGS]`, then that many distinct
/// tags without replacement
#[derive(Debug, Clone)]
pub struct RandomTags<R = StdRng> {
    rng: R,
}

impl RandomTags<StdRng> {
    /// Picker seeded from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic picker
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomTags<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TagPicker for RandomTags<R> {
    fn pick<'a>(&mut self, vocabulary: &[&'a str]) -> Vec<&'a str> {
        let upper = MAX_TAGS.min(vocabulary.len());
        let lower = MIN_TAGS.min(upper);
        let count = self.rng.random_range(lower..=upper);
        vocabulary
            .choose_multiple(&mut self.rng, count)
            .copied()
            .collect()
    }
}

/// Summary of one Process run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProcessReport {
    /// Images tagged by this run
    pub processed: usize,
    /// Tags appended across all images
    pub tags_assigned: usize,
    /// Collections created for tags seen for the first time
    pub collections_created: usize,
}

impl Library {
    /// Tag every unprocessed image and file it into its tag collections
    ///
    /// With `reset_collections` the collection store is emptied first,
    /// including explicitly created collections.
    pub fn process<P: TagPicker + ?Sized>(
        &mut self,
        picker: &mut P,
        reset_collections: bool,
    ) -> ProcessReport {
        if reset_collections {
            debug!(dropped = self.collections.len(), "resetting collections");
            self.collections.clear();
        }

        let mut report = ProcessReport::default();
        for record in self.images.iter_mut().filter(|r| !r.is_processed()) {
            for tag in picker.pick(DEMO_TAGS) {
                if record.has_tag(tag) {
                    continue;
                }
                record.add_tag(tag);
                report.tags_assigned += 1;

                let (collection, created) = self.collections.ensure(tag);
                collection.add_image(record.path().clone());
                if created {
                    report.collections_created += 1;
                }
            }
            record.mark_processed();
            report.processed += 1;
        }

        info!(
            processed = report.processed,
            tags = report.tags_assigned,
            new_collections = report.collections_created,
            "processing finished"
        );
        report
    }
}
