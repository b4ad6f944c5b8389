//! Aggregate computations used as chart input.
//!
//! Everything here is pure: values in, summary out. Missing values are
//! expected to be filtered by the caller (see `Column::categories` and
//! `Column::numbers`).

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};

/// Median of the values. Mean of the two middle values for even counts.
pub fn median(values: &[f64]) -> Option<f64> {
    let sorted = sorted(values);
    quantile_sorted(&sorted, 0.5)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(f64::total_cmp);
    v
}

/// Quantile with linear interpolation between closest ranks.
fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Orders category labels: numerically when every label is a number,
/// lexicographically otherwise.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        _ => a.cmp(b),
    }
}

/// Sorts labels in category order.
pub fn sort_labels(labels: &mut [String]) {
    let numeric = labels.iter().all(|l| l.parse::<f64>().is_ok());
    if numeric {
        labels.sort_by(|a, b| compare_labels(a, b));
    } else {
        labels.sort();
    }
}

/// Distinct labels in category order.
pub fn distinct<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let seen: HashSet<&str> = values.into_iter().collect();
    let mut labels: Vec<String> = seen.into_iter().map(str::to_owned).collect();
    sort_labels(&mut labels);
    labels
}

/// Position of each label, for lookups while counting.
pub fn label_index(labels: &[String]) -> HashMap<&str, usize> {
    labels.iter().enumerate().map(|(i, l)| (l.as_str(), i)).collect()
}

/// Frequency of each label, most frequent first. Ties keep category order.
pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut labels: Vec<String> = counts.keys().map(|s| s.to_string()).collect();
    sort_labels(&mut labels);

    let mut out: Vec<(String, usize)> = labels
        .into_iter()
        .map(|l| {
            let n = counts[l.as_str()];
            (l, n)
        })
        .collect();
    // stable: equal counts stay in category order
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Most frequent label.
pub fn mode<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<String> {
    value_counts(values).into_iter().next().map(|(l, _)| l)
}

/// Co-occurrence counts of two categorical columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Crosstab {
    pub rows: Vec<String>,
    pub cols: Vec<String>,
    /// `counts[row][col]`
    pub counts: Vec<Vec<u64>>,
}

impl Crosstab {
    /// Builds the table from paired observations. Pairs where either side
    /// is missing are dropped.
    pub fn new<'a>(pairs: impl IntoIterator<Item = (Option<&'a str>, Option<&'a str>)>) -> Self {
        let pairs: Vec<(&str, &str)> = pairs
            .into_iter()
            .filter_map(|(r, c)| Some((r?, c?)))
            .collect();

        let rows = distinct(pairs.iter().map(|(r, _)| *r));
        let cols = distinct(pairs.iter().map(|(_, c)| *c));
        let row_index = label_index(&rows);
        let col_index = label_index(&cols);
        let mut counts = vec![vec![0u64; cols.len()]; rows.len()];

        for (r, c) in &pairs {
            if let (Some(&ri), Some(&ci)) = (row_index.get(r), col_index.get(c)) {
                counts[ri][ci] += 1;
            }
        }
        Self { rows, cols, counts }
    }

    pub fn max(&self) -> u64 {
        self.counts
            .iter()
            .flat_map(|r| r.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// One histogram bin; `end` is exclusive except for the last bin.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

/// Equal-width bins over `[min, max]`.
pub fn histogram(values: &[f64], nbins: usize) -> Vec<Bin> {
    if values.is_empty() || nbins == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return vec![Bin {
            start: min,
            end: max,
            count: values.len() as u64,
        }];
    }

    let width = (max - min) / nbins as f64;
    let mut bins: Vec<Bin> = (0..nbins)
        .map(|i| Bin {
            start: min + width * i as f64,
            end: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for &v in values {
        let i = (((v - min) / width).floor() as usize).min(nbins - 1);
        bins[i].count += 1;
    }
    bins
}

/// Five-number summary plus outliers, Tukey style.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value within 1.5 IQR below q1.
    pub lower_whisker: f64,
    /// Largest value within 1.5 IQR above q3.
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
    pub count: usize,
}

impl BoxStats {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = sorted(values);
        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.5)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;
        let iqr = q3 - q1;
        let lo_fence = q1 - 1.5 * iqr;
        let hi_fence = q3 + 1.5 * iqr;

        let inside = sorted.iter().copied().filter(|v| *v >= lo_fence && *v <= hi_fence);
        let lower_whisker = inside.clone().next().unwrap_or(q1);
        let upper_whisker = inside.last().unwrap_or(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < lo_fence || *v > hi_fence)
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
            count: sorted.len(),
        })
    }

    /// Full range including outliers.
    pub fn range(&self) -> (f64, f64) {
        let lo = self
            .outliers
            .iter()
            .copied()
            .fold(self.lower_whisker, f64::min);
        let hi = self
            .outliers
            .iter()
            .copied()
            .fold(self.upper_whisker, f64::max);
        (lo, hi)
    }
}

/// Values keyed by (x category, colour group), for grouped bars.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSeries {
    pub categories: Vec<String>,
    pub groups: Vec<String>,
    /// `values[category][group]`, `None` where the pair never occurs.
    pub values: Vec<Vec<Option<f64>>>,
}

impl GroupedSeries {
    /// Row counts per (x, group). Rows missing either label are dropped.
    pub fn counts<'a>(
        pairs: impl IntoIterator<Item = (Option<&'a str>, Option<&'a str>)>,
    ) -> Self {
        let tab = Crosstab::new(pairs);
        let values = tab
            .counts
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&n| if n > 0 { Some(n as f64) } else { None })
                    .collect()
            })
            .collect();
        Self {
            categories: tab.rows,
            groups: tab.cols,
            values,
        }
    }

    /// Mean of `y` per (x, group). Rows missing any field are dropped.
    pub fn means<'a>(
        rows: impl IntoIterator<Item = (Option<&'a str>, Option<f64>, Option<&'a str>)>,
    ) -> Self {
        let rows: Vec<(&str, f64, &str)> = rows
            .into_iter()
            .filter_map(|(x, y, g)| Some((x?, y?, g?)))
            .collect();

        let categories = distinct(rows.iter().map(|(x, _, _)| *x));
        let groups = distinct(rows.iter().map(|(_, _, g)| *g));
        let x_index = label_index(&categories);
        let g_index = label_index(&groups);
        let mut sums = vec![vec![(0.0f64, 0usize); groups.len()]; categories.len()];

        for (x, y, g) in &rows {
            if let (Some(&xi), Some(&gi)) = (x_index.get(x), g_index.get(g)) {
                sums[xi][gi].0 += y;
                sums[xi][gi].1 += 1;
            }
        }

        let values = sums
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|(s, n)| if n > 0 { Some(s / n as f64) } else { None })
                    .collect()
            })
            .collect();

        Self {
            categories,
            groups,
            values,
        }
    }

    pub fn max(&self) -> f64 {
        self.values
            .iter()
            .flat_map(|r| r.iter().flatten().copied())
            .fold(0.0, f64::max)
    }
}
