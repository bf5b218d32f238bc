use crate::results::{PageExtraction, SiteSnapshot};
use std::collections::HashSet;

/// Deduplicated union of every page extraction in one crawl.
///
/// Owned exclusively by one crawl; concurrent scrape tasks within a batch
/// share it behind a mutex. Merging is idempotent: folding the same
/// extraction in twice leaves the aggregate unchanged.
#[derive(Debug, Default)]
pub struct Aggregate {
    paragraphs: HashSet<String>,
    links: HashSet<String>,
    urls: HashSet<String>,
}

impl Aggregate {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one page's results into the aggregate
    pub fn merge(&mut self, extraction: &PageExtraction) {
        for paragraph in &extraction.paragraphs {
            self.paragraphs.insert(paragraph.clone());
        }
        for link in &extraction.links {
            self.links.insert(link.clone());
        }
        self.urls.insert(extraction.url.clone());
    }

    /// Number of distinct pages merged so far
    pub fn page_count(&self) -> usize {
        self.urls.len()
    }

    /// Materializes the sets into the artifact document.
    ///
    /// Sequences are sorted so the snapshot does not depend on the order in
    /// which concurrent extractions completed.
    pub fn finalize(self) -> SiteSnapshot {
        let mut paragraphs: Vec<String> = self.paragraphs.into_iter().collect();
        let mut links: Vec<String> = self.links.into_iter().collect();
        let mut urls: Vec<String> = self.urls.into_iter().collect();
        paragraphs.sort();
        links.sort();
        urls.sort();

        SiteSnapshot {
            paragraphs,
            links,
            urls,
        }
    }
}
