//! Descriptive and inferential statistics over the cleaned catalog
//!
//! Pure functions: the callers load the table and decide how to present the
//! numbers. Sample (n-1) variance throughout.

pub mod distributions;

use crate::core::clean::CleanRecord;
use std::collections::HashMap;

/// Significance threshold used when interpreting p-values
pub const ALPHA: f64 = 0.05;

/// Descriptive summary of one numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptive {
    /// Arithmetic mean
    pub mean: f64,
    /// Median (linear interpolation between ranks)
    pub median: f64,
    /// Most frequent value, smallest on ties
    pub mode: f64,
    /// Sample standard deviation
    pub std_dev: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// max - min
    pub range: f64,
}

/// IQR fences and the number of values outside them
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierSummary {
    /// First quartile
    pub q1: f64,
    /// Third quartile
    pub q3: f64,
    /// Q1 - 1.5 * IQR
    pub lower_fence: f64,
    /// Q3 + 1.5 * IQR
    pub upper_fence: f64,
    /// Values below the lower or above the upper fence
    pub count: usize,
}

/// Pearson correlation with its two-sided significance
#[derive(Debug, Clone, PartialEq)]
pub struct Correlation {
    /// Correlation coefficient in [-1, 1]
    pub r: f64,
    /// Two-sided p-value from the t transform with n-2 degrees of freedom
    pub p_value: f64,
    /// Number of paired observations
    pub n: usize,
}

/// Welch's unequal-variance t-test result
#[derive(Debug, Clone, PartialEq)]
pub struct WelchTest {
    /// t statistic
    pub t: f64,
    /// Welch-Satterthwaite degrees of freedom
    pub df: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Mean of the first group
    pub mean_a: f64,
    /// Mean of the second group
    pub mean_b: f64,
}

/// Least-squares line through paired observations
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit {
    /// Slope of the fitted line
    pub slope: f64,
    /// Intercept of the fitted line
    pub intercept: f64,
}

/// Arithmetic mean; `None` when empty
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    Some(values.iter().sum::<f64>() / n)
}

/// Median with linear interpolation; `None` when empty
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    let sorted = sorted_copy(values)?;
    Some(quantile_sorted(&sorted, 0.5))
}

/// Most frequent value, smallest on ties; `None` when empty
#[must_use]
pub fn mode(values: &[f64]) -> Option<f64> {
    let sorted = sorted_copy(values)?;

    let mut best = (sorted[0], 0usize);
    let mut current = (sorted[0], 0usize);
    for &value in &sorted {
        if (value - current.0).abs() < f64::EPSILON {
            current.1 += 1;
        } else {
            current = (value, 1);
        }
        // Strict comparison keeps the smallest value on a tie
        if current.1 > best.1 {
            best = current;
        }
    }

    Some(best.0)
}

/// Sample standard deviation (n-1); `None` for fewer than two values
#[must_use]
pub fn sample_std(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Sample variance (n-1); `None` for fewer than two values
#[must_use]
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    #[allow(clippy::cast_precision_loss)]
    let degrees = (values.len() - 1) as f64;
    Some(values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / degrees)
}

/// Full descriptive summary; `None` for fewer than two values
#[must_use]
pub fn describe(values: &[f64]) -> Option<Descriptive> {
    let sorted = sorted_copy(values)?;
    if sorted.len() < 2 {
        return None;
    }

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    Some(Descriptive {
        mean: mean(values)?,
        median: quantile_sorted(&sorted, 0.5),
        mode: mode(values)?,
        std_dev: sample_std(values)?,
        min,
        max,
        range: max - min,
    })
}

/// Mean price for the most frequent categories, sorted by mean descending
///
/// The `limit` most populated categories are selected first; their means are
/// then ordered highest first. Ties break alphabetically so the ordering is
/// stable across runs.
#[must_use]
pub fn category_means(records: &[CleanRecord], limit: usize) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, (f64, usize))> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(c, _)| c == &record.category) {
            Some((_, (sum, count))) => {
                *sum += record.price;
                *count += 1;
            }
            None => groups.push((record.category.clone(), (record.price, 1))),
        }
    }

    groups.sort_by(|a, b| b.1 .1.cmp(&a.1 .1).then_with(|| a.0.cmp(&b.0)));
    groups.truncate(limit);

    #[allow(clippy::cast_precision_loss)]
    let mut means: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(category, (sum, count))| (category, sum / count as f64))
        .collect();

    means.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    means
}

/// Rating frequency table, sorted by rating value ascending
#[must_use]
pub fn rating_frequencies(records: &[CleanRecord]) -> Vec<(u8, usize)> {
    let mut counts: HashMap<u8, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.rating).or_insert(0) += 1;
    }

    let mut frequencies: Vec<(u8, usize)> = counts.into_iter().collect();
    frequencies.sort_by_key(|&(rating, _)| rating);
    frequencies
}

/// Prices of every record in `category` (exact match)
#[must_use]
pub fn category_prices(records: &[CleanRecord], category: &str) -> Vec<f64> {
    records
        .iter()
        .filter(|r| r.category == category)
        .map(|r| r.price)
        .collect()
}

/// First, second, and third quartiles; `None` for fewer than two values
#[must_use]
pub fn quartiles(values: &[f64]) -> Option<(f64, f64, f64)> {
    let sorted = sorted_copy(values)?;
    if sorted.len() < 2 {
        return None;
    }
    Some((
        quantile_sorted(&sorted, 0.25),
        quantile_sorted(&sorted, 0.5),
        quantile_sorted(&sorted, 0.75),
    ))
}

/// IQR outlier fences (1.5 * IQR); `None` for fewer than two values
#[must_use]
pub fn iqr_outliers(values: &[f64]) -> Option<OutlierSummary> {
    let sorted = sorted_copy(values)?;
    if sorted.len() < 2 {
        return None;
    }

    let q1 = quantile_sorted(&sorted, 0.25);
    let q3 = quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;
    let count = values
        .iter()
        .filter(|&&v| v < lower_fence || v > upper_fence)
        .count();

    Some(OutlierSummary {
        q1,
        q3,
        lower_fence,
        upper_fence,
        count,
    })
}

/// Pearson correlation with a two-sided p-value
///
/// Requires at least three pairs and non-degenerate variance in both
/// columns; returns `None` otherwise.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<Correlation> {
    let n = xs.len();
    if n != ys.len() || n < 3 {
        return None;
    }

    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        covariance += (x - mean_x) * (y - mean_y);
        var_x += (x - mean_x).powi(2);
        var_y += (y - mean_y).powi(2);
    }
    if var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }

    let r = (covariance / (var_x * var_y).sqrt()).clamp(-1.0, 1.0);
    #[allow(clippy::cast_precision_loss)]
    let df = (n - 2) as f64;
    let p_value = if (r.abs() - 1.0).abs() < f64::EPSILON {
        0.0
    } else {
        let t = r * (df / (1.0 - r * r)).sqrt();
        distributions::two_sided_p(t, df)
    };

    Some(Correlation { r, p_value, n })
}

/// Welch's t-test between two independent samples
///
/// Requires at least two values per group and nonzero pooled variance;
/// returns `None` otherwise.
#[must_use]
pub fn welch_t_test(a: &[f64], b: &[f64]) -> Option<WelchTest> {
    if a.len() < 2 || b.len() < 2 {
        return None;
    }

    let mean_a = mean(a)?;
    let mean_b = mean(b)?;
    #[allow(clippy::cast_precision_loss)]
    let (n_a, n_b) = (a.len() as f64, b.len() as f64);
    let se_a = sample_variance(a)? / n_a;
    let se_b = sample_variance(b)? / n_b;
    let pooled = se_a + se_b;
    if pooled <= 0.0 {
        return None;
    }

    let t = (mean_a - mean_b) / pooled.sqrt();
    // Welch-Satterthwaite approximation
    let df = pooled.powi(2) / (se_a.powi(2) / (n_a - 1.0) + se_b.powi(2) / (n_b - 1.0));
    let p_value = distributions::two_sided_p(t, df);

    Some(WelchTest {
        t,
        df,
        p_value,
        mean_a,
        mean_b,
    })
}

/// Least-squares line through paired observations
///
/// Requires at least two pairs and nonzero variance in x; returns `None`
/// otherwise.
#[must_use]
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<LinearFit> {
    let n = xs.len();
    if n != ys.len() || n < 2 {
        return None;
    }

    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        covariance += (x - mean_x) * (y - mean_y);
        var_x += (x - mean_x).powi(2);
    }
    if var_x <= 0.0 {
        return None;
    }

    let slope = covariance / var_x;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

fn sorted_copy(values: &[f64]) -> Option<Vec<f64>> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Some(sorted)
}

/// Quantile of an already-sorted sample with linear interpolation
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let position = q * (sorted.len() - 1) as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let low = position.floor() as usize;
    let high = (low + 1).min(sorted.len() - 1);
    let fraction = position - position.floor();
    sorted[low] + (sorted[high] - sorted[low]) * fraction
}
