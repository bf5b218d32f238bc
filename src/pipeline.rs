use crate::aggregate::Aggregate;
use crate::batch;
use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use crate::extract;
use crate::frontier::Frontier;
use crate::renderer::Renderer;
use crate::results::SiteSnapshot;
use crate::retry;
use crate::storage::{ArtifactStore, PointerRecord, PointerStore};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Outcome of a whole-site crawl
#[derive(Debug, Clone)]
pub struct SiteResult {
    /// Where the artifact can be retrieved from
    pub locator: String,

    /// Pages whose content made it into the artifact
    pub pages_scraped: usize,

    /// Pages dropped after exhausting their retry attempts
    pub pages_failed: usize,
}

/// Composes frontier expansion, batched scraping, aggregation and
/// persistence into the two supported operations.
///
/// One `scrape_site` call owns its visited set and aggregate exclusively;
/// only the injected renderer and stores are shared across crawls.
pub struct SiteScraper {
    renderer: Arc<dyn Renderer>,
    artifacts: Arc<dyn ArtifactStore>,
    pointers: Arc<dyn PointerStore>,
    config: ScrapeConfig,
}

impl SiteScraper {
    /// Create a scraper from injected collaborators, rejecting out-of-range
    /// configuration up front
    pub fn new(
        renderer: Arc<dyn Renderer>,
        artifacts: Arc<dyn ArtifactStore>,
        pointers: Arc<dyn PointerStore>,
        config: ScrapeConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            artifacts,
            pointers,
            config,
        })
    }

    /// Scrape a single page and return its content directly.
    ///
    /// No retry, no batching, and nothing is persisted.
    pub async fn scrape_page(&self, url: &str) -> Result<SiteSnapshot> {
        validate_url(url)?;
        ::log::info!("Scraping the current page: {}", url);
        let start = Instant::now();

        let page = self.renderer.render(url).await?;
        let extraction = extract::extract(&page);

        ::log::info!(
            "Scraped {} in {:.2} seconds",
            url,
            start.elapsed().as_secs_f64()
        );
        Ok(SiteSnapshot {
            paragraphs: extraction.paragraphs,
            links: extraction.links,
            urls: vec![extraction.url],
        })
    }

    /// Crawl every same-origin page one hop from the seed, aggregate the
    /// deduplicated results, write one artifact and one pointer record.
    ///
    /// URLs that keep failing after retries are dropped from the aggregate;
    /// only store-level failures abort the operation. The artifact write
    /// happens strictly before the pointer write, so a pointer record never
    /// references an artifact that was not written.
    pub async fn scrape_site(&self, url: &str, owner: &str) -> Result<SiteResult> {
        validate_url(url)?;
        if owner.trim().is_empty() {
            return Err(ScrapeError::InvalidInput(
                "owner is required for a whole-site scrape".to_string(),
            ));
        }

        ::log::info!("Scraping the entire site from seed: {}", url);
        let start = Instant::now();

        let mut frontier = Frontier::new();
        let links = frontier.expand(url, self.renderer.as_ref()).await?;
        ::log::info!("Discovered {} same-origin links from {}", links.len(), url);

        let aggregate = Arc::new(Mutex::new(Aggregate::new()));
        let renderer = Arc::clone(&self.renderer);
        let max_attempts = self.config.max_retry_attempts;

        let stats = batch::run_batches(&links, self.config.batch_size, |link| {
            let renderer = Arc::clone(&renderer);
            let aggregate = Arc::clone(&aggregate);
            async move {
                let extraction =
                    retry::extract_with_retry(renderer.as_ref(), &link, max_attempts).await?;
                aggregate.lock().await.merge(&extraction);
                Ok(())
            }
        })
        .await;

        let snapshot = std::mem::take(&mut *aggregate.lock().await).finalize();
        let payload = serde_json::to_vec_pretty(&snapshot)
            .map_err(|e| ScrapeError::StorageWriteFailed(format!("serializing snapshot: {e}")))?;

        // Artifact first, pointer second. A failed artifact write aborts the
        // crawl before any pointer record exists; a failed pointer write is
        // surfaced distinctly since the artifact is already durable.
        let key = format!("scraped_data_{}.json", Uuid::new_v4());
        let locator = self.artifacts.put(&key, &payload).await?;
        ::log::info!("Artifact written to {}", locator);

        let record = PointerRecord::new(owner, &locator);
        self.pointers.save(&record).await?;
        ::log::info!(
            "Pointer record {} saved for owner {}",
            record.unique_id,
            owner
        );

        ::log::info!(
            "--- Scraping Summary --- {} pages scraped, {} failed, {:.2} seconds",
            stats.succeeded,
            stats.failed,
            start.elapsed().as_secs_f64()
        );

        Ok(SiteResult {
            locator,
            pages_scraped: stats.succeeded,
            pages_failed: stats.failed,
        })
    }
}

fn validate_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(ScrapeError::InvalidInput(
            "URL is required for scraping".to_string(),
        ));
    }
    Ok(())
}
