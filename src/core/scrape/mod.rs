//! Ingestion pipeline for the public book catalog
//!
//! Fetches paginated listing pages plus per-book detail pages, extracts flat
//! records, and persists them as a raw CSV table. A record that fails to
//! extract is logged and skipped; the batch continues.

pub mod html;
pub mod net;

use crate::core::config::ScraperConfig;
use crate::core::csv;
use logger::{info, warn};
use net::Fetcher;
use std::error::Error;
use std::path::Path;

/// Column order of the raw table
pub const RAW_HEADER: [&str; 5] = ["title", "price", "rating", "category", "availability"];

/// One scraped book record, fields as displayed on the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Book title
    pub title: String,
    /// Price as displayed (e.g., "£51.77")
    pub price: String,
    /// Rating label ("One".."Five")
    pub rating: String,
    /// Category from the detail page breadcrumb, "Unknown" when unavailable
    pub category: String,
    /// Availability text (e.g., "In stock")
    pub availability: String,
}

impl RawRecord {
    fn into_row(self) -> Vec<String> {
        vec![
            self.title,
            self.price,
            self.rating,
            self.category,
            self.availability,
        ]
    }
}

/// Scrape the configured number of listing pages into raw records
///
/// Page-level fetch failures are logged and the page is skipped; the same
/// holds for individual records that fail to extract.
///
/// # Errors
/// Returns an error when the HTTP client cannot be constructed.
pub fn scrape_catalog(config: &ScraperConfig) -> Result<Vec<RawRecord>, Box<dyn Error>> {
    let fetcher = Fetcher::new(config.timeout_secs, config.retries)?;
    let base = config.base_url.trim_end_matches('/');
    let mut records = Vec::new();

    for page in 1..=config.pages.max(1) {
        let url = format!("{base}/catalogue/page-{page}.html");
        let body = match fetcher.fetch(&url) {
            Ok(body) => body,
            Err(e) => {
                warn!("Skipping page {page}: {e}");
                continue;
            }
        };

        let blocks = html::class_blocks(&body, "article", "product_pod");
        info!("Page {page}: {} products found", blocks.len());

        for block in blocks {
            match extract_record(block, base, &fetcher) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping record on page {page}: {e}"),
            }
        }
    }

    info!("{} records scraped", records.len());
    Ok(records)
}

/// Extract one record from a product block, following the detail link for
/// the category.
fn extract_record(block: &str, base: &str, fetcher: &Fetcher) -> Result<RawRecord, String> {
    let title = html::attr(block, "title").ok_or("missing title attribute")?;
    let price = html::class_blocks(block, "p", "price_color")
        .into_iter()
        .next()
        .map(html::strip_tags)
        .ok_or("missing price")?;
    let rating = html::rating_label(block).ok_or("missing star rating")?;
    let availability = html::class_blocks(block, "p", "availability")
        .into_iter()
        .next()
        .map(html::strip_tags)
        .ok_or("missing availability")?;

    let category = html::attr(block, "href")
        .and_then(|href| {
            fetcher
                .fetch(&format!("{base}/catalogue/{href}"))
                .ok()
                .and_then(|detail| html::breadcrumb_category(&detail))
        })
        .unwrap_or_else(|| "Unknown".to_string());

    Ok(RawRecord {
        title,
        price,
        rating,
        category,
        availability,
    })
}

/// Persist raw records as a CSV table with the fixed header
///
/// # Errors
/// Returns an error when the file cannot be written.
pub fn save_raw_csv<P: AsRef<Path>>(records: Vec<RawRecord>, path: P) -> Result<(), Box<dyn Error>> {
    let rows: Vec<Vec<String>> = records.into_iter().map(RawRecord::into_row).collect();
    csv::write_csv(path, &RAW_HEADER, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_row_order_matches_header() {
        let record = RawRecord {
            title: "A Light in the Attic".to_string(),
            price: "£51.77".to_string(),
            rating: "Three".to_string(),
            category: "Poetry".to_string(),
            availability: "In stock".to_string(),
        };

        let row = record.into_row();
        assert_eq!(row.len(), RAW_HEADER.len());
        assert_eq!(row[0], "A Light in the Attic");
        assert_eq!(row[4], "In stock");
    }
}
