use crate::error::{Result, ScrapeError};
use async_trait::async_trait;
use fantoccini::{ClientBuilder, Locator};
use std::time::Duration;
use tokio::time::timeout;

/// A page as the renderer saw it once loading finished
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// URL the page was loaded from
    pub url: String,

    /// Rendered DOM source
    pub html: String,
}

/// Narrow contract over the page renderer: open a URL, wait for the document
/// body, hand back the rendered DOM, close the session.
///
/// Implementations must release the underlying session on every exit path,
/// success or failure. Leaked sessions exhaust the rendering resource under
/// load.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Load `url` and return its rendered DOM
    async fn render(&self, url: &str) -> Result<RenderedPage>;
}

/// Renderer backed by a WebDriver server (e.g. ChromeDriver) via fantoccini.
///
/// Every `render` call opens a fresh WebDriver session and closes it before
/// returning, whether the load succeeded, failed, or timed out. Sessions are
/// never reused across calls.
pub struct WebDriverRenderer {
    webdriver_url: String,
    navigation_timeout: Duration,
}

impl WebDriverRenderer {
    /// Create a renderer targeting the given WebDriver server
    pub fn new(webdriver_url: &str, navigation_timeout_ms: u64) -> Self {
        Self {
            webdriver_url: webdriver_url.to_string(),
            navigation_timeout: Duration::from_millis(navigation_timeout_ms),
        }
    }
}

#[async_trait]
impl Renderer for WebDriverRenderer {
    async fn render(&self, url: &str) -> Result<RenderedPage> {
        let client = ClientBuilder::native()
            .connect(&self.webdriver_url)
            .await
            .map_err(|e| ScrapeError::ExtractionFailed {
                url: url.to_string(),
                message: format!(
                    "failed to connect to WebDriver at {}: {}",
                    self.webdriver_url, e
                ),
            })?;

        ::log::debug!("Opened WebDriver session for: {}", url);

        // Navigation, the body wait and the source read all run under one
        // deadline. The session is closed afterwards no matter how the load
        // went.
        let outcome = timeout(self.navigation_timeout, async {
            client.goto(url).await?;
            client.wait().for_element(Locator::Css("body")).await?;
            client.source().await
        })
        .await;

        if let Err(e) = client.close().await {
            ::log::warn!("Failed to close WebDriver session for {}: {}", url, e);
        }

        match outcome {
            Ok(Ok(html)) => Ok(RenderedPage {
                url: url.to_string(),
                html,
            }),
            Ok(Err(e)) => Err(ScrapeError::ExtractionFailed {
                url: url.to_string(),
                message: e.to_string(),
            }),
            Err(_) => Err(ScrapeError::RenderTimeout {
                url: url.to_string(),
                timeout_ms: self.navigation_timeout.as_millis() as u64,
            }),
        }
    }
}
