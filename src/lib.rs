// Re-export modules
pub mod aggregate;
pub mod batch;
pub mod config;
pub mod error;
pub mod extract;
pub mod frontier;
pub mod pipeline;
pub mod renderer;
pub mod results;
pub mod retry;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::ScrapeConfig;
pub use error::{Result, ScrapeError};
pub use pipeline::{SiteResult, SiteScraper};
pub use renderer::{RenderedPage, Renderer, WebDriverRenderer};
pub use results::{PageExtraction, SiteSnapshot};
pub use storage::{ArtifactStore, PointerRecord, PointerStore};
