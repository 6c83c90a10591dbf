//! Stats command handler

use crate::commands::clean::default_cleaned_path;
use campus_analytics::clean::{self, CleanRecord};
use campus_analytics::config::Config;
use campus_analytics::stats::{self, ALPHA};
use std::path::Path;

/// Which statistics sections to print
pub struct Sections {
    /// Descriptive section (price summary, category means, rating table)
    pub descriptive: bool,
    /// Inferential section (outliers, correlation, group comparison)
    pub inferential: bool,
}

/// Print descriptive and inferential statistics for a cleaned CSV
///
/// `group_a` and `group_b` name the two categories for the mean-price
/// comparison.
pub fn run(input: Option<&Path>, sections: &Sections, group_a: &str, group_b: &str, config: &Config) {
    let input = input.map_or_else(|| default_cleaned_path(config), Path::to_path_buf);

    let records = match clean::load_cleaned(&input) {
        Ok(records) if !records.is_empty() => records,
        Ok(_) => {
            eprintln!("✗ {} contains no records", input.display());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("✗ Failed to load {}: {e}", input.display());
            std::process::exit(1);
        }
    };

    println!("\n=== Catalog statistics ({} books) ===", records.len());
    if sections.descriptive {
        print_descriptive(&records);
        print_categories(&records);
        print_ratings(&records);
    }
    if sections.inferential {
        print_outliers(&records);
        print_correlation(&records);
        print_group_comparison(&records, group_a, group_b);
    }
}

fn print_descriptive(records: &[CleanRecord]) {
    let prices: Vec<f64> = records.iter().map(|r| r.price).collect();
    let Some(summary) = stats::describe(&prices) else {
        println!("\nNot enough data for price statistics");
        return;
    };

    println!("\n--- Price (£) ---");
    println!("  mean    = {:.2}", summary.mean);
    println!("  median  = {:.2}", summary.median);
    println!("  mode    = {:.2}", summary.mode);
    println!("  std dev = {:.2}", summary.std_dev);
    println!(
        "  range   = {:.2} ({:.2} .. {:.2})",
        summary.range, summary.min, summary.max
    );
}

fn print_categories(records: &[CleanRecord]) {
    println!("\n--- Mean price by category (5 most frequent) ---");
    for (category, mean_price) in stats::category_means(records, 5) {
        println!("  {category:<24} £{mean_price:.2}");
    }
}

fn print_ratings(records: &[CleanRecord]) {
    println!("\n--- Rating frequencies ---");
    for (rating, count) in stats::rating_frequencies(records) {
        println!("  {rating} star(s): {count}");
    }
}

fn print_outliers(records: &[CleanRecord]) {
    let prices: Vec<f64> = records.iter().map(|r| r.price).collect();
    if let Some(summary) = stats::iqr_outliers(&prices) {
        println!("\n--- Price outliers (1.5 * IQR) ---");
        println!(
            "  fences  = [{:.2}, {:.2}] (Q1 {:.2}, Q3 {:.2})",
            summary.lower_fence, summary.upper_fence, summary.q1, summary.q3
        );
        println!("  outliers = {}", summary.count);
    }
}

fn print_correlation(records: &[CleanRecord]) {
    let ratings: Vec<f64> = records.iter().map(|r| f64::from(r.rating)).collect();
    let prices: Vec<f64> = records.iter().map(|r| r.price).collect();

    println!("\n--- Price vs rating (Pearson) ---");
    match stats::pearson(&ratings, &prices) {
        Some(result) => {
            println!("  r = {:.4}, p = {:.4} (n = {})", result.r, result.p_value, result.n);
            println!("  {}", verdict(result.p_value));
        }
        None => println!("  Not enough variation to correlate"),
    }
}

fn print_group_comparison(records: &[CleanRecord], group_a: &str, group_b: &str) {
    let prices_a = stats::category_prices(records, group_a);
    let prices_b = stats::category_prices(records, group_b);

    println!("\n--- Welch t-test: mean price of {group_a} vs {group_b} ---");
    match stats::welch_t_test(&prices_a, &prices_b) {
        Some(result) => {
            println!(
                "  mean({group_a}) = £{:.2}, mean({group_b}) = £{:.2}",
                result.mean_a, result.mean_b
            );
            println!(
                "  t = {:.4}, df = {:.1}, p = {:.4}",
                result.t, result.df, result.p_value
            );
            println!("  {}", verdict(result.p_value));
        }
        None => println!("  Skipped: need at least two books in each category"),
    }
}

fn verdict(p_value: f64) -> String {
    if p_value < ALPHA {
        format!("significant at alpha = {ALPHA}")
    } else {
        format!("not significant at alpha = {ALPHA}")
    }
}
