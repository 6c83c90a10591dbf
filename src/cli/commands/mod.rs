//! Subcommand handlers

pub mod charts;
pub mod clean;
pub mod config;
pub mod scrape;
pub mod stats;

/// Default file name for the raw scraped table
pub const RAW_FILE_NAME: &str = "books_raw.csv";
