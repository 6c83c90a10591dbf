//! Charts command handler

use crate::commands::clean::default_cleaned_path;
use campus_analytics::charts;
use campus_analytics::config::Config;
use std::path::{Path, PathBuf};

/// Generate the SVG charts and HTML dashboard from a cleaned CSV
pub fn run(input: Option<&Path>, out_dir: Option<&Path>, config: &Config) {
    let input = input.map_or_else(|| default_cleaned_path(config), Path::to_path_buf);
    let out_dir = out_dir.map_or_else(
        || PathBuf::from(&config.paths.charts_dir),
        Path::to_path_buf,
    );

    match charts::run_charts(&input, &out_dir) {
        Ok(written) => {
            for path in written {
                println!("✓ {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("✗ Chart generation failed: {e}");
            std::process::exit(1);
        }
    }
}
