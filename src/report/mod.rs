use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::labels::{Category, NutriLabel};
use crate::model::profiles::ProfileSet;

pub mod json;
pub mod text;

/// Per-column tally of produced categories.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub procedure: &'static str,
    pub lambda: f64,
    pub distribution: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VerificationSummary {
    pub labels_checked: usize,
    pub labels_matched: usize,
    pub scores_checked: usize,
    pub scores_matched: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub version: String,
    pub input: String,
    pub n_products: usize,
    pub lambdas: Vec<f64>,
    pub weights: BTreeMap<String, f64>,
    pub profiles: ProfileSet,
    pub nutriscore: BTreeMap<String, usize>,
    pub classifications: Vec<ColumnSummary>,
    pub verification: VerificationSummary,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// Counts ordered best to worst.
pub fn category_counts(values: &[Category]) -> [usize; 5] {
    let mut counts = [0usize; 5];
    for v in values {
        counts[usize::from(4 - v.rank())] += 1;
    }
    counts
}

pub fn label_counts(values: &[NutriLabel]) -> [usize; 5] {
    let mut counts = [0usize; 5];
    for v in values {
        counts[usize::from(4 - v.rank())] += 1;
    }
    counts
}

pub fn category_distribution(values: &[Category]) -> BTreeMap<String, usize> {
    Category::ALL
        .iter()
        .zip(category_counts(values))
        .map(|(c, n)| (c.as_str().to_string(), n))
        .collect()
}

pub fn label_distribution(values: &[NutriLabel]) -> BTreeMap<String, usize> {
    NutriLabel::ALL
        .iter()
        .zip(label_counts(values))
        .map(|(l, n)| (l.as_str().to_string(), n))
        .collect()
}

pub fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
