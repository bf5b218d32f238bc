use serde::{Deserialize, Serialize};

/// Result of scraping a single page
#[derive(Debug, Clone)]
pub struct PageExtraction {
    /// URL the page was scraped from
    pub url: String,

    /// Visible text of every paragraph element on the page
    pub paragraphs: Vec<String>,

    /// Absolute URLs of every anchor on the page
    pub links: Vec<String>,
}

impl PageExtraction {
    /// Create a new page extraction
    pub fn new(url: String, paragraphs: Vec<String>, links: Vec<String>) -> Self {
        Self {
            url,
            paragraphs,
            links,
        }
    }
}

/// The artifact document: the deduplicated union of every page extraction
/// in a crawl, materialized as ordered sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSnapshot {
    /// Unique paragraph strings across all scraped pages
    pub paragraphs: Vec<String>,

    /// Unique outbound link URLs across all scraped pages
    pub links: Vec<String>,

    /// URLs of the pages that were successfully scraped
    pub urls: Vec<String>,
}
