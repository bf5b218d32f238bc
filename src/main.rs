use clap::Parser;
use site_harvest::storage::fs::{FsArtifactStore, JsonlPointerStore};
use site_harvest::{ScrapeConfig, SiteScraper, WebDriverRenderer};
use std::sync::Arc;

mod args;
use args::{Args, Mode};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting scraper for URL: {}", args.url);

    println!("Note: scraping requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    let config = ScrapeConfig {
        batch_size: args.batch_size,
        max_retry_attempts: args.max_retries,
        navigation_timeout_ms: args.navigation_timeout_ms,
        webdriver_url: args.webdriver_url.clone(),
    }
    .apply_env_overrides();

    let renderer = Arc::new(WebDriverRenderer::new(
        &config.webdriver_url,
        config.navigation_timeout_ms,
    ));
    let artifacts = Arc::new(FsArtifactStore::new(&args.output_dir));
    let pointers = Arc::new(JsonlPointerStore::new(args.output_dir.join("pointers.jsonl")));

    let scraper = match SiteScraper::new(renderer, artifacts, pointers, config) {
        Ok(scraper) => scraper,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    match args.mode {
        Mode::Current => match scraper.scrape_page(&args.url).await {
            Ok(snapshot) => {
                println!("Scraping completed successfully.");
                println!(
                    "{}",
                    serde_json::to_string_pretty(&snapshot).unwrap_or_default()
                );
            }
            Err(e) => {
                ::log::error!("Scraping failed: {}", e);
                std::process::exit(1);
            }
        },
        Mode::Site => {
            let owner = match args.owner.as_deref() {
                Some(owner) => owner,
                None => {
                    ::log::error!("--owner is required in site mode");
                    std::process::exit(2);
                }
            };
            match scraper.scrape_site(&args.url, owner).await {
                Ok(result) => {
                    println!("Scraping completed successfully.");
                    println!("Artifact: {}", result.locator);
                    println!(
                        "Pages scraped: {} ({} failed)",
                        result.pages_scraped, result.pages_failed
                    );
                }
                Err(e) => {
                    ::log::error!("Scraping failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
