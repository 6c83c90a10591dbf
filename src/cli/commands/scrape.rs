//! Scrape command handler

use crate::commands::RAW_FILE_NAME;
use campus_analytics::config::Config;
use campus_analytics::scrape;
use std::path::{Path, PathBuf};

/// Run the scrape stage and save the raw CSV
///
/// `pages` overrides the configured page count; `output` overrides the
/// default path under the configured raw data directory.
pub fn run(pages: Option<u32>, output: Option<&Path>, config: &Config) {
    let mut scraper = config.scraper.clone();
    if let Some(pages) = pages {
        scraper.pages = pages;
    }

    let output = output.map_or_else(
        || PathBuf::from(&config.paths.raw_dir).join(RAW_FILE_NAME),
        Path::to_path_buf,
    );

    println!(
        "Scraping {} page(s) from {} ...",
        scraper.pages.max(1),
        scraper.base_url
    );

    let records = match scrape::scrape_catalog(&scraper) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("✗ Scrape failed: {e}");
            std::process::exit(1);
        }
    };

    if records.is_empty() {
        eprintln!("✗ No records scraped; nothing written");
        std::process::exit(1);
    }

    let count = records.len();
    if let Err(e) = scrape::save_raw_csv(records, &output) {
        eprintln!("✗ Failed to write {}: {e}", output.display());
        std::process::exit(1);
    }

    println!("✓ {count} records saved to {}", output.display());
}
