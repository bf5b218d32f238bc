use crate::error::{Result, ScrapeError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the scraping pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Maximum number of concurrently open renderer sessions; also the size
    /// of each link batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Attempts per URL before it is dropped from the crawl
    #[serde(default = "default_max_retry_attempts")]
    pub max_retry_attempts: u32,

    /// Bound on page navigation, in milliseconds
    #[serde(default = "default_navigation_timeout_ms")]
    pub navigation_timeout_ms: u64,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            max_retry_attempts: default_max_retry_attempts(),
            navigation_timeout_ms: default_navigation_timeout_ms(),
            webdriver_url: default_webdriver_url(),
        }
    }
}

impl ScrapeConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Override the WebDriver URL from the `WEBDRIVER_URL` environment
    /// variable if set and non-empty
    pub fn apply_env_overrides(mut self) -> Self {
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }
        self
    }

    /// Reject out-of-range option values
    pub fn validate(&self) -> Result<()> {
        if self.batch_size < 1 {
            return Err(ScrapeError::InvalidInput(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.max_retry_attempts < 1 {
            return Err(ScrapeError::InvalidInput(
                "max_retry_attempts must be at least 1".to_string(),
            ));
        }
        if self.navigation_timeout_ms == 0 {
            return Err(ScrapeError::InvalidInput(
                "navigation_timeout_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Default value for batch_size
fn default_batch_size() -> usize {
    10
}

/// Default value for max_retry_attempts
fn default_max_retry_attempts() -> u32 {
    3
}

/// Default value for navigation_timeout_ms (two minutes)
fn default_navigation_timeout_ms() -> u64 {
    120_000
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}
