//! Chart generation for the cleaned catalog
//!
//! Four self-contained SVG charts plus an HTML dashboard that embeds them.
//! Charts are plain strings; the stage runner writes them to the configured
//! output directory.

pub mod svg;

use crate::core::clean::{self, CleanRecord};
use crate::core::stats;
use logger::info;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use svg::Scale;

/// Embedded dashboard template
const DASHBOARD_TEMPLATE: &str = include_str!("templates/dashboard.html");

/// Histogram bin count
const HISTOGRAM_BINS: usize = 20;
/// Categories shown in the box plot
const BOX_PLOT_CATEGORIES: usize = 5;
/// Categories shown in the rating bar chart
const BAR_CHART_CATEGORIES: usize = 8;

const BAR_FILL: &str = "#4a6278";
const ACCENT: &str = "#c0392b";
const POINT_FILL: &str = "#2c6e8f";

/// Histogram of prices with a dashed mean reference line
#[must_use]
pub fn price_histogram(records: &[CleanRecord]) -> String {
    let prices: Vec<f64> = records.iter().map(|r| r.price).collect();
    let Some(summary) = stats::describe(&prices) else {
        return svg::document("Price Distribution", &svg::label(
            svg::WIDTH / 2.0,
            svg::HEIGHT / 2.0,
            "middle",
            "Not enough data",
        ));
    };

    #[allow(clippy::cast_precision_loss)]
    let bin_count = HISTOGRAM_BINS as f64;
    let bin_width = (summary.max - summary.min).max(f64::EPSILON) / bin_count;
    let mut counts = [0usize; HISTOGRAM_BINS];
    for &price in &prices {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bin = (((price - summary.min) / bin_width) as usize).min(HISTOGRAM_BINS - 1);
        counts[bin] += 1;
    }
    let max_count = counts.iter().copied().max().unwrap_or(1).max(1);

    let x_scale = Scale::horizontal((summary.min, summary.max));
    #[allow(clippy::cast_precision_loss)]
    let y_scale = Scale::vertical((0.0, max_count as f64));

    let mut body = String::new();
    body.push_str(&svg::axes("Price (£)", "Books"));
    body.push_str(&svg::x_tick_labels(&x_scale, 6, 1));
    body.push_str(&svg::y_tick_labels(&y_scale, 5, 0));

    let baseline = svg::HEIGHT - svg::MARGIN_BOTTOM;
    for (i, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        #[allow(clippy::cast_precision_loss)]
        let left = summary.min + i as f64 * bin_width;
        let x = x_scale.map(left);
        #[allow(clippy::cast_precision_loss)]
        let top = y_scale.map(count as f64);
        let width = x_scale.map(left + bin_width) - x;
        body.push_str(&svg::rect(x, top, width, baseline - top, BAR_FILL));
    }

    let mean_x = x_scale.map(summary.mean);
    body.push_str(&svg::dashed_line(
        mean_x,
        svg::MARGIN_TOP,
        mean_x,
        baseline,
        ACCENT,
    ));
    body.push_str(&svg::label(
        mean_x + 4.0,
        svg::MARGIN_TOP + 12.0,
        "start",
        &format!("Mean: £{:.2}", summary.mean),
    ));

    svg::document("Price Distribution", &body)
}

/// Box plot of price for the most populated categories
#[must_use]
pub fn category_box_plot(records: &[CleanRecord]) -> String {
    let groups = top_categories(records, BOX_PLOT_CATEGORIES);
    let all_prices: Vec<f64> = groups.iter().flat_map(|(_, p)| p.iter().copied()).collect();
    if groups.is_empty() || all_prices.len() < 2 {
        return svg::document("Price by Category", &svg::label(
            svg::WIDTH / 2.0,
            svg::HEIGHT / 2.0,
            "middle",
            "Not enough data",
        ));
    }

    let min = all_prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = all_prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let y_scale = Scale::vertical((min, max));

    #[allow(clippy::cast_precision_loss)]
    let slot = (svg::WIDTH - svg::MARGIN_LEFT - svg::MARGIN_RIGHT) / groups.len() as f64;
    let box_width = slot * 0.5;

    let mut body = String::new();
    body.push_str(&svg::axes("", "Price (£)"));
    body.push_str(&svg::y_tick_labels(&y_scale, 5, 1));

    for (i, (category, prices)) in groups.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let center = svg::MARGIN_LEFT + slot * (i as f64 + 0.5);

        if let (Some((q1, q2, q3)), Some(fences)) =
            (stats::quartiles(prices), stats::iqr_outliers(prices))
        {
            // Whiskers reach the most extreme values inside the fences
            let whisker_low = prices
                .iter()
                .copied()
                .filter(|&p| p >= fences.lower_fence)
                .fold(f64::INFINITY, f64::min);
            let whisker_high = prices
                .iter()
                .copied()
                .filter(|&p| p <= fences.upper_fence)
                .fold(f64::NEG_INFINITY, f64::max);

            let (y_q1, y_q2, y_q3) = (y_scale.map(q1), y_scale.map(q2), y_scale.map(q3));
            let (y_low, y_high) = (y_scale.map(whisker_low), y_scale.map(whisker_high));
            let half = box_width / 2.0;

            body.push_str(&svg::dashed_line(center, y_low, center, y_q1, "black"));
            body.push_str(&svg::dashed_line(center, y_q3, center, y_high, "black"));
            body.push_str(&svg::line(center - half / 2.0, y_low, center + half / 2.0, y_low, "black"));
            body.push_str(&svg::line(center - half / 2.0, y_high, center + half / 2.0, y_high, "black"));
            body.push_str(&svg::rect(center - half, y_q3, box_width, y_q1 - y_q3, "#d6e4ec"));
            body.push_str(&svg::line(center - half, y_q2, center + half, y_q2, ACCENT));

            // Outlier markers
            for &price in prices {
                if price < fences.lower_fence || price > fences.upper_fence {
                    body.push_str(&svg::circle(center, y_scale.map(price), 2.5, ACCENT));
                }
            }
        }

        body.push_str(&svg::label(
            center,
            svg::HEIGHT - svg::MARGIN_BOTTOM + 18.0,
            "middle",
            &truncate(category, 14),
        ));
    }

    svg::document("Price by Category", &body)
}

/// Scatter of price against rating with a least-squares trend line
#[must_use]
pub fn price_rating_scatter(records: &[CleanRecord]) -> String {
    let ratings: Vec<f64> = records.iter().map(|r| f64::from(r.rating)).collect();
    let prices: Vec<f64> = records.iter().map(|r| r.price).collect();
    if prices.len() < 2 {
        return svg::document("Price vs Rating", &svg::label(
            svg::WIDTH / 2.0,
            svg::HEIGHT / 2.0,
            "middle",
            "Not enough data",
        ));
    }

    let min_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max_price = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let x_scale = Scale::horizontal((0.5, 5.5));
    let y_scale = Scale::vertical((min_price, max_price));

    let mut body = String::new();
    body.push_str(&svg::axes("Rating", "Price (£)"));
    body.push_str(&svg::y_tick_labels(&y_scale, 5, 1));
    for rating in 1..=5u8 {
        let x = x_scale.map(f64::from(rating));
        body.push_str(&svg::label(
            x,
            svg::HEIGHT - svg::MARGIN_BOTTOM + 18.0,
            "middle",
            &rating.to_string(),
        ));
    }

    for (rating, price) in ratings.iter().zip(&prices) {
        body.push_str(&svg::circle(
            x_scale.map(*rating),
            y_scale.map(*price),
            3.0,
            POINT_FILL,
        ));
    }

    if let Some(fit) = stats::linear_fit(&ratings, &prices) {
        let y_at = |x: f64| fit.intercept + fit.slope * x;
        body.push_str(&svg::line(
            x_scale.map(1.0),
            y_scale.map(y_at(1.0).clamp(min_price, max_price)),
            x_scale.map(5.0),
            y_scale.map(y_at(5.0).clamp(min_price, max_price)),
            ACCENT,
        ));
    }

    svg::document("Price vs Rating", &body)
}

/// Mean rating per category for the most populated categories
#[must_use]
pub fn category_rating_bars(records: &[CleanRecord]) -> String {
    let groups = mean_rating_by_category(records, BAR_CHART_CATEGORIES);

    if groups.is_empty() {
        return svg::document("Average Rating by Category", &svg::label(
            svg::WIDTH / 2.0,
            svg::HEIGHT / 2.0,
            "middle",
            "Not enough data",
        ));
    }

    let y_scale = Scale::vertical((0.0, 5.0));
    #[allow(clippy::cast_precision_loss)]
    let slot = (svg::WIDTH - svg::MARGIN_LEFT - svg::MARGIN_RIGHT) / groups.len() as f64;
    let bar_width = slot * 0.6;
    let baseline = svg::HEIGHT - svg::MARGIN_BOTTOM;

    let mut body = String::new();
    body.push_str(&svg::axes("", "Mean rating"));
    body.push_str(&svg::y_tick_labels(&y_scale, 6, 0));

    for (i, (category, mean_rating)) in groups.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let center = svg::MARGIN_LEFT + slot * (i as f64 + 0.5);
        let top = y_scale.map(*mean_rating);

        body.push_str(&svg::rect(
            center - bar_width / 2.0,
            top,
            bar_width,
            baseline - top,
            BAR_FILL,
        ));
        body.push_str(&svg::label(
            center,
            top - 4.0,
            "middle",
            &format!("{mean_rating:.2}"),
        ));
        body.push_str(&svg::label(
            center,
            baseline + 18.0,
            "middle",
            &truncate(category, 10),
        ));
    }

    svg::document("Average Rating by Category", &body)
}

/// Render the HTML dashboard with all four charts embedded inline
#[must_use]
pub fn render_dashboard(records: &[CleanRecord]) -> String {
    DASHBOARD_TEMPLATE
        .replace("{{record_count}}", &records.len().to_string())
        .replace(
            "{{generated}}",
            &chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
        )
        .replace("{{price_histogram}}", &price_histogram(records))
        .replace("{{category_box_plot}}", &category_box_plot(records))
        .replace("{{price_rating_scatter}}", &price_rating_scatter(records))
        .replace("{{category_rating_bars}}", &category_rating_bars(records))
}

/// Run the chart stage: load a cleaned CSV and write all chart files
///
/// # Errors
/// Returns an error when the input cannot be read, contains no rows, or the
/// output files cannot be written.
pub fn run_charts<P: AsRef<Path>>(input: P, out_dir: P) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let records = clean::load_cleaned(&input)?;
    if records.is_empty() {
        return Err(format!("{} contains no records", input.as_ref().display()).into());
    }

    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let outputs = [
        ("price_distribution.svg", price_histogram(&records)),
        ("price_by_category.svg", category_box_plot(&records)),
        ("price_vs_rating.svg", price_rating_scatter(&records)),
        ("rating_by_category.svg", category_rating_bars(&records)),
        ("dashboard.html", render_dashboard(&records)),
    ];

    let mut written = Vec::with_capacity(outputs.len());
    for (name, content) in outputs {
        let path = out_dir.join(name);
        fs::write(&path, content)?;
        info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Group prices by category, most populated first, capped at `limit`
fn top_categories(records: &[CleanRecord], limit: usize) -> Vec<(String, Vec<f64>)> {
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(c, _)| c == &record.category) {
            Some((_, prices)) => prices.push(record.price),
            None => groups.push((record.category.clone(), vec![record.price])),
        }
    }

    groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(&b.0)));
    groups.truncate(limit);
    groups
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

/// Mean rating per category, most populated first, capped at `limit`
fn mean_rating_by_category(records: &[CleanRecord], limit: usize) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for record in records {
        let rating = f64::from(record.rating);
        match groups.iter_mut().find(|(c, _)| c == &record.category) {
            Some((_, ratings)) => ratings.push(rating),
            None => groups.push((record.category.clone(), vec![rating])),
        }
    }

    groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(&b.0)));
    groups.truncate(limit);
    groups
        .into_iter()
        .filter_map(|(category, ratings)| stats::mean(&ratings).map(|mean| (category, mean)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: f64, rating: u8, category: &str) -> CleanRecord {
        CleanRecord {
            title: "T".to_string(),
            price,
            rating,
            category: category.to_string(),
            availability: "In stock".to_string(),
            price_category: clean::price_bucket(price),
            in_stock: true,
        }
    }

    fn sample() -> Vec<CleanRecord> {
        (0..30)
            .map(|i| {
                record(
                    10.0 + f64::from(i),
                    (i % 5 + 1).try_into().unwrap(),
                    if i % 2 == 0 { "Poetry" } else { "Travel" },
                )
            })
            .collect()
    }

    #[test]
    fn test_histogram_has_bars_and_mean_line() {
        let chart = price_histogram(&sample());
        assert!(chart.contains("<rect"));
        assert!(chart.contains("stroke-dasharray"));
        assert!(chart.contains("Mean: £"));
    }

    #[test]
    fn test_histogram_empty_input() {
        let chart = price_histogram(&[]);
        assert!(chart.contains("Not enough data"));
    }

    #[test]
    fn test_box_plot_labels_categories() {
        let chart = category_box_plot(&sample());
        assert!(chart.contains("Poetry"));
        assert!(chart.contains("Travel"));
    }

    #[test]
    fn test_scatter_has_points_and_trend() {
        let chart = price_rating_scatter(&sample());
        assert!(chart.contains("<circle"));
        assert!(chart.matches("<line").count() > 2);
    }

    #[test]
    fn test_bar_chart_shows_means() {
        let chart = category_rating_bars(&sample());
        assert!(chart.contains("<rect"));
        assert!(chart.contains("Poetry"));
    }

    #[test]
    fn test_dashboard_embeds_all_charts() {
        let html = render_dashboard(&sample());
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(!html.contains("{{"));
        assert_eq!(html.matches("<svg").count(), 4);
        assert!(html.contains("30 books"));
    }

    #[test]
    fn test_top_categories_ordered_by_count() {
        let mut records = sample();
        records.push(record(10.0, 3, "Poetry"));

        let groups = top_categories(&records, 5);
        assert_eq!(groups[0].0, "Poetry");
        assert_eq!(groups[0].1.len(), 16);
    }
}
