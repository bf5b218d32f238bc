use crate::error::Result;
use crate::extract;
use crate::renderer::Renderer;
use crate::results::PageExtraction;

/// Scrapes one URL, retrying immediately on failure.
///
/// Every attempt opens its own renderer session; sessions are never reused
/// across attempts. After `max_attempts` failures the last error propagates
/// to the caller. Retries are immediate, with no backoff between attempts.
pub async fn extract_with_retry(
    renderer: &dyn Renderer,
    url: &str,
    max_attempts: u32,
) -> Result<PageExtraction> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        match renderer.render(url).await {
            Ok(page) => return Ok(extract::extract(&page)),
            Err(e) if attempt < max_attempts => {
                ::log::warn!(
                    "Attempt {}/{} failed for {}: {}",
                    attempt,
                    max_attempts,
                    url,
                    e
                );
            }
            Err(e) => {
                ::log::error!("Giving up on {} after {} attempts: {}", url, attempt, e);
                return Err(e);
            }
        }
    }
}
