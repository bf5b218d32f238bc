use crate::error::Result;
use std::future::Future;
use tokio::task::JoinSet;

/// Per-crawl tallies of settled scrape tasks
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    /// Links whose extraction completed successfully
    pub succeeded: usize,

    /// Links that failed permanently (after retries) or panicked
    pub failed: usize,
}

/// Splits `links` into contiguous batches of at most `batch_size` and drives
/// them one batch at a time.
///
/// Links within a batch run concurrently; batch *i+1* does not start until
/// every task of batch *i* has settled. This bounds peak concurrent renderer
/// sessions to `batch_size`. A failing link is logged and counted; it never
/// aborts its siblings or any later batch.
pub async fn run_batches<F, Fut>(links: &[String], batch_size: usize, per_link: F) -> BatchStats
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<()>> + Send + 'static,
{
    assert!(batch_size >= 1, "batch_size must be at least 1");

    let mut stats = BatchStats::default();
    for (index, batch) in links.chunks(batch_size).enumerate() {
        ::log::debug!("Starting batch {} with {} links", index, batch.len());

        let mut tasks = JoinSet::new();
        for link in batch {
            tasks.spawn(per_link(link.clone()));
        }

        // Wait for the whole batch to settle before moving on
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(())) => stats.succeeded += 1,
                Ok(Err(e)) => {
                    stats.failed += 1;
                    ::log::error!("Scrape failed permanently: {}", e);
                }
                Err(e) => {
                    stats.failed += 1;
                    ::log::error!("Scrape task panicked: {}", e);
                }
            }
        }
    }

    ::log::debug!(
        "All batches settled: {} succeeded, {} failed",
        stats.succeeded,
        stats.failed
    );
    stats
}
