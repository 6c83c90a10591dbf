//! Cleaning stage
//!
//! Deterministic, non-destructive transform from the raw scraped table to a
//! typed table: price parsing, rating conversion, median imputation,
//! deduplication, and the derived price bucket and in-stock columns. The
//! input file is never modified.

use crate::core::csv;
use logger::info;
use std::error::Error;
use std::path::Path;

/// Column order of the cleaned table
pub const CLEAN_HEADER: [&str; 7] = [
    "title",
    "price",
    "rating",
    "category",
    "availability",
    "price_category",
    "in_stock",
];

/// Sentinel for missing text fields
pub const MISSING_SENTINEL: &str = "Unknown";

/// Price bucket boundaries (lower-inclusive)
const BUDGET_CEILING: f64 = 20.0;
const MIDRANGE_CEILING: f64 = 40.0;

/// One cleaned, fully-typed record
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    /// Book title, "Unknown" when missing
    pub title: String,
    /// Numeric price (currency symbol stripped, median-imputed)
    pub price: f64,
    /// Rating 1-5 (median-imputed)
    pub rating: u8,
    /// Category, "Unknown" when missing
    pub category: String,
    /// Availability text, "Unknown" when missing
    pub availability: String,
    /// Derived price bucket: "Budget", "Mid-range", or "Premium"
    pub price_category: &'static str,
    /// Derived from a case-insensitive "in stock" match on availability
    pub in_stock: bool,
}

impl CleanRecord {
    fn into_row(self) -> Vec<String> {
        vec![
            self.title,
            format_price(self.price),
            self.rating.to_string(),
            self.category,
            self.availability,
            self.price_category.to_string(),
            self.in_stock.to_string(),
        ]
    }

    /// Parse a cleaned CSV row back into a record
    ///
    /// # Errors
    /// Returns an error when the row is too short or a typed column fails to
    /// parse.
    pub fn from_row(row: &[String]) -> Result<Self, String> {
        if row.len() < CLEAN_HEADER.len() {
            return Err(format!(
                "Row has {} columns, expected {}",
                row.len(),
                CLEAN_HEADER.len()
            ));
        }

        let price = row[1]
            .parse::<f64>()
            .map_err(|_| format!("Invalid price: '{}'", row[1]))?;
        let rating = row[2]
            .parse::<u8>()
            .map_err(|_| format!("Invalid rating: '{}'", row[2]))?;
        let in_stock = row[6]
            .parse::<bool>()
            .map_err(|_| format!("Invalid in_stock flag: '{}'", row[6]))?;

        Ok(Self {
            title: row[0].clone(),
            price,
            rating,
            category: row[3].clone(),
            availability: row[4].clone(),
            price_category: price_bucket(price),
            in_stock,
        })
    }
}

/// Summary of a cleaning run, logged before/after style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanSummary {
    /// Raw row count
    pub rows_before: usize,
    /// Cleaned row count (after deduplication)
    pub rows_after: usize,
    /// Prices that failed to parse and were median-imputed
    pub missing_prices: usize,
    /// Rating labels that failed to map and were median-imputed
    pub missing_ratings: usize,
    /// Exact-duplicate rows dropped
    pub duplicates_removed: usize,
}

/// Strip the currency symbol and parse a displayed price
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().trim_start_matches('£').trim().parse::<f64>().ok()
}

/// Map a rating label ("One".."Five") to its numeric value
#[must_use]
pub fn rating_from_label(label: &str) -> Option<u8> {
    match label.trim() {
        "One" => Some(1),
        "Two" => Some(2),
        "Three" => Some(3),
        "Four" => Some(4),
        "Five" => Some(5),
        _ => None,
    }
}

/// Derive the price bucket from fixed, lower-inclusive boundaries
#[must_use]
pub fn price_bucket(price: f64) -> &'static str {
    if price < BUDGET_CEILING {
        "Budget"
    } else if price < MIDRANGE_CEILING {
        "Mid-range"
    } else {
        "Premium"
    }
}

/// Median of an unsorted sample; `None` when empty
fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Apply the full cleaning transform to raw rows
///
/// Order matches the persisted pipeline: type coercion, median imputation,
/// sentinel fill, exact-duplicate removal (keep first), then derived columns.
#[must_use]
pub fn clean_records(raw_rows: &[Vec<String>]) -> (Vec<CleanRecord>, CleanSummary) {
    // Type coercion: unparseable values become missing
    let coerced: Vec<(Option<&str>, Option<f64>, Option<u8>, Option<&str>, Option<&str>)> = raw_rows
        .iter()
        .map(|row| {
            let field = |i: usize| row.get(i).map(String::as_str).filter(|s| !s.is_empty());
            (
                field(0),
                field(1).and_then(parse_price),
                field(2).and_then(rating_from_label),
                field(3),
                field(4),
            )
        })
        .collect();

    // Column medians over the non-missing values
    let prices: Vec<f64> = coerced.iter().filter_map(|r| r.1).collect();
    let ratings: Vec<f64> = coerced.iter().filter_map(|r| r.2.map(f64::from)).collect();
    let price_median = median(&prices).unwrap_or(0.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rating_median = median(&ratings).unwrap_or(0.0).round() as u8;

    let missing_prices = coerced.iter().filter(|r| r.1.is_none()).count();
    let missing_ratings = coerced.iter().filter(|r| r.2.is_none()).count();

    // Imputation + sentinel fill, then exact-duplicate removal keeping first
    let mut seen: Vec<(String, u64, u8, String, String)> = Vec::new();
    let mut records = Vec::new();

    for (title, price, rating, category, availability) in coerced {
        let title = title.unwrap_or(MISSING_SENTINEL).to_string();
        let price = price.unwrap_or(price_median);
        let rating = rating.unwrap_or(rating_median);
        let category = category.unwrap_or(MISSING_SENTINEL).to_string();
        let availability = availability.unwrap_or(MISSING_SENTINEL).to_string();

        let key = (
            title.clone(),
            price.to_bits(),
            rating,
            category.clone(),
            availability.clone(),
        );
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);

        let in_stock = availability.to_lowercase().contains("in stock");
        records.push(CleanRecord {
            title,
            price,
            rating,
            category,
            availability,
            price_category: price_bucket(price),
            in_stock,
        });
    }

    let summary = CleanSummary {
        rows_before: raw_rows.len(),
        rows_after: records.len(),
        missing_prices,
        missing_ratings,
        duplicates_removed: raw_rows.len() - records.len(),
    };

    (records, summary)
}

/// Run the cleaning stage: read a raw CSV, transform, write the cleaned CSV
///
/// # Errors
/// Returns an error when the input is missing/unreadable or the output
/// cannot be written.
pub fn run_clean<P: AsRef<Path>>(input: P, output: P) -> Result<CleanSummary, Box<dyn Error>> {
    let (header, rows) = csv::read_csv(&input)?;
    if header.len() < 5 {
        return Err(format!(
            "{} does not look like a raw catalog table ({} columns)",
            input.as_ref().display(),
            header.len()
        )
        .into());
    }

    info!(
        "Before cleaning: {} rows, {} columns",
        rows.len(),
        header.len()
    );

    let (records, summary) = clean_records(&rows);

    info!(
        "After cleaning: {} rows ({} duplicates removed, {} prices and {} ratings imputed)",
        summary.rows_after,
        summary.duplicates_removed,
        summary.missing_prices,
        summary.missing_ratings
    );

    let out_rows: Vec<Vec<String>> = records.into_iter().map(CleanRecord::into_row).collect();
    csv::write_csv(output, &CLEAN_HEADER, &out_rows)?;
    Ok(summary)
}

/// Load a cleaned CSV into records, skipping malformed rows
///
/// # Errors
/// Returns an error when the file cannot be read.
pub fn load_cleaned<P: AsRef<Path>>(path: P) -> Result<Vec<CleanRecord>, Box<dyn Error>> {
    let (_, rows) = csv::read_csv(path)?;
    Ok(rows
        .iter()
        .filter_map(|row| CleanRecord::from_row(row).ok())
        .collect())
}

/// Format a price the way the cleaned table stores it
fn format_price(price: f64) -> String {
    // Avoid trailing noise for whole and tenth values (12.5 not 12.50)
    let s = format!("{price}");
    if s.contains('.') {
        s
    } else {
        format!("{price:.1}")
    }
}
