use crate::error::{Result, ScrapeError};
use crate::extract;
use crate::renderer::Renderer;
use std::collections::HashSet;
use url::Url;

/// Tracks the URLs discovered during one crawl and expands the link frontier
/// one hop from a seed page.
///
/// The visited set belongs to a single crawl: it grows monotonically, is
/// never shared across crawls, and is discarded when the crawl ends.
#[derive(Debug, Default)]
pub struct Frontier {
    visited: HashSet<String>,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the seed page and returns its same-origin links that have not
    /// been seen before.
    ///
    /// The seed and every returned link are recorded as visited before any of
    /// them is scraped, so concurrent scraping of one batch can never
    /// schedule the same URL twice. Expansion is single-level: discovered
    /// pages are not recursed into.
    pub async fn expand(&mut self, seed: &str, renderer: &dyn Renderer) -> Result<Vec<String>> {
        let seed_url = Url::parse(seed)
            .map_err(|e| ScrapeError::InvalidInput(format!("invalid seed URL {seed}: {e}")))?;
        let origin = seed_url.origin();

        let page = renderer.render(seed).await?;
        let extraction = extract::extract(&page);

        self.visited.insert(seed.to_string());

        let mut new_links = Vec::new();
        for link in extraction.links {
            let mut parsed = match Url::parse(&link) {
                Ok(url) => url,
                Err(_) => continue,
            };

            if parsed.origin() != origin {
                ::log::debug!("Skipping cross-origin link: {}", link);
                continue;
            }

            // Normalize before deduplication so fragment variants of one
            // page are crawled once
            parsed.set_fragment(None);
            let normalized = parsed.to_string();

            if self.visited.insert(normalized.clone()) {
                new_links.push(normalized);
            }
        }

        ::log::info!(
            "Frontier expanded {}: {} new same-origin links",
            seed,
            new_links.len()
        );
        Ok(new_links)
    }

    /// Whether a URL has already been discovered in this crawl
    pub fn contains(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Number of URLs discovered so far
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Whether no URL has been discovered yet
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RenderedPage;
    use async_trait::async_trait;

    /// Renderer that serves the same HTML for every URL
    struct StaticRenderer {
        html: String,
    }

    impl StaticRenderer {
        fn new(html: &str) -> Self {
            Self {
                html: html.to_string(),
            }
        }
    }

    #[async_trait]
    impl Renderer for StaticRenderer {
        async fn render(&self, url: &str) -> Result<RenderedPage> {
            Ok(RenderedPage {
                url: url.to_string(),
                html: self.html.clone(),
            })
        }
    }

    #[tokio::test]
    async fn test_same_origin_links_only() {
        let renderer = StaticRenderer::new(
            r#"<body>
                <a href="http://example.com/a">same origin</a>
                <a href="http://other.com/b">other origin</a>
            </body>"#,
        );
        let mut frontier = Frontier::new();

        let links = frontier
            .expand("http://example.com", &renderer)
            .await
            .unwrap();

        assert_eq!(links, vec!["http://example.com/a".to_string()]);
    }

    #[tokio::test]
    async fn test_seed_is_recorded_as_visited() {
        let renderer = StaticRenderer::new("<body></body>");
        let mut frontier = Frontier::new();

        frontier
            .expand("http://example.com", &renderer)
            .await
            .unwrap();

        assert!(frontier.contains("http://example.com"));
        assert_eq!(frontier.len(), 1);
    }

    #[tokio::test]
    async fn test_returned_links_are_marked_visited() {
        let renderer = StaticRenderer::new(r#"<body><a href="http://example.com/a">a</a></body>"#);
        let mut frontier = Frontier::new();

        let links = frontier
            .expand("http://example.com", &renderer)
            .await
            .unwrap();

        assert_eq!(links.len(), 1);
        assert!(frontier.contains("http://example.com/a"));
    }

    #[tokio::test]
    async fn test_repeated_expansion_excludes_visited() {
        let renderer = StaticRenderer::new(
            r#"<body>
                <a href="http://example.com/a">a</a>
                <a href="http://example.com/b">b</a>
            </body>"#,
        );
        let mut frontier = Frontier::new();

        let first = frontier
            .expand("http://example.com", &renderer)
            .await
            .unwrap();
        assert_eq!(first.len(), 2);

        // Every link from this page is now known
        let second = frontier
            .expand("http://example.com/a", &renderer)
            .await
            .unwrap();
        assert!(second.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_links_on_page_deduplicated() {
        let renderer = StaticRenderer::new(
            r#"<body>
                <a href="http://example.com/a">once</a>
                <a href="http://example.com/a">twice</a>
                <a href="http://example.com/a#section">fragment variant</a>
            </body>"#,
        );
        let mut frontier = Frontier::new();

        let links = frontier
            .expand("http://example.com", &renderer)
            .await
            .unwrap();

        assert_eq!(links, vec!["http://example.com/a".to_string()]);
    }

    #[tokio::test]
    async fn test_different_port_is_different_origin() {
        let renderer = StaticRenderer::new(
            r#"<body><a href="http://example.com:8080/a">other port</a></body>"#,
        );
        let mut frontier = Frontier::new();

        let links = frontier
            .expand("http://example.com", &renderer)
            .await
            .unwrap();

        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_seed_is_rejected() {
        let renderer = StaticRenderer::new("<body></body>");
        let mut frontier = Frontier::new();

        let result = frontier.expand("not a url", &renderer).await;

        assert!(matches!(result, Err(ScrapeError::InvalidInput(_))));
        assert!(frontier.is_empty());
    }
}
