//! Clean command handler

use crate::commands::RAW_FILE_NAME;
use campus_analytics::clean;
use campus_analytics::config::Config;
use std::path::{Path, PathBuf};

/// Run the cleaning stage on a raw CSV
///
/// Defaults: input is `raw_dir/books_raw.csv`, output is the input file name
/// prefixed with `cleaned_` under the configured cleaned data directory.
pub fn run(input: Option<&Path>, output: Option<&Path>, config: &Config) {
    let input = input.map_or_else(
        || PathBuf::from(&config.paths.raw_dir).join(RAW_FILE_NAME),
        Path::to_path_buf,
    );

    let output = output.map_or_else(
        || {
            let name = input
                .file_name()
                .map_or_else(|| RAW_FILE_NAME.to_string(), |n| n.to_string_lossy().to_string());
            PathBuf::from(&config.paths.cleaned_dir).join(format!("cleaned_{name}"))
        },
        Path::to_path_buf,
    );

    match clean::run_clean(&input, &output) {
        Ok(summary) => {
            println!("✓ Cleaned {} -> {}", input.display(), output.display());
            println!(
                "  {} rows in, {} rows out ({} duplicates removed)",
                summary.rows_before, summary.rows_after, summary.duplicates_removed
            );
            println!(
                "  {} prices and {} ratings imputed with column medians",
                summary.missing_prices, summary.missing_ratings
            );
        }
        Err(e) => {
            eprintln!("✗ Clean failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Default cleaned CSV path derived from the configured directories
#[must_use]
pub fn default_cleaned_path(config: &Config) -> PathBuf {
    PathBuf::from(&config.paths.cleaned_dir).join(format!("cleaned_{RAW_FILE_NAME}"))
}
