use thiserror::Error;

/// Failure taxonomy for the scraping pipeline.
///
/// Per-URL render and extraction failures are retried and then swallowed at
/// the batch boundary; every other variant propagates to the caller.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Missing or malformed caller input. Surfaced before any side effect.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The page did not finish loading within the navigation timeout.
    #[error("navigation timed out after {timeout_ms} ms: {url}")]
    RenderTimeout { url: String, timeout_ms: u64 },

    /// The renderer failed while loading or reading a page.
    #[error("extraction failed for {url}: {message}")]
    ExtractionFailed { url: String, message: String },

    /// The artifact write failed. No pointer record was attempted.
    #[error("artifact write failed: {0}")]
    StorageWriteFailed(String),

    /// The pointer record write failed after the artifact was already
    /// written, so the artifact at `locator` may now be orphaned.
    #[error("pointer record write failed for artifact {locator}: {message}")]
    RecordWriteFailed { locator: String, message: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScrapeError>;
