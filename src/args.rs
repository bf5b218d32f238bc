use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "site-harvest")]
#[command(about = "Scrapes a page or an entire same-origin site and persists the aggregate")]
#[command(version)]
pub struct Args {
    /// Seed URL to scrape
    pub url: String,

    /// Scrape only the given page, or the entire same-origin site
    #[arg(short, long, value_enum, default_value_t = Mode::Current)]
    pub mode: Mode,

    /// Owner recorded on the pointer record (required in site mode)
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Maximum number of concurrently open renderer sessions
    #[arg(short, long, default_value_t = 10)]
    pub batch_size: usize,

    /// Attempts per URL before it is dropped from the crawl
    #[arg(long, default_value_t = 3)]
    pub max_retries: u32,

    /// Navigation timeout in milliseconds
    #[arg(long, default_value_t = 120_000)]
    pub navigation_timeout_ms: u64,

    /// URL for the WebDriver instance
    #[arg(long, default_value = "http://localhost:4444")]
    pub webdriver_url: String,

    /// Directory holding artifacts and the pointer record file
    #[arg(long, default_value = "harvest")]
    pub output_dir: PathBuf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Scrape only the seed page; print its content, persist nothing
    Current,
    /// Crawl one hop from the seed and persist the aggregate
    Site,
}
