//! Core module for the registry model and pipeline stages

pub mod charts;
pub mod clean;
pub mod config;
pub mod csv;
pub mod models;
pub mod scrape;
pub mod stats;

/// Returns the current version of the `campus-analytics` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
