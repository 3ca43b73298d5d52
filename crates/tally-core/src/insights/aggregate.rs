//! Totals, counts and averages over a record set

use crate::models::{Category, ExpenseRecord};

use super::types::CategoryMap;

/// Aggregate figures for a record set
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub count: usize,
    pub total_amount: f64,
    /// `total_amount / count` rounded to a whole unit; 0 for empty input
    pub average_amount: f64,
    pub category_totals: CategoryMap<f64>,
    pub category_counts: CategoryMap<usize>,
    /// Highest total; ties go to the category seen first
    pub top_category: Option<Category>,
}

/// Sum of all amounts
pub fn total_amount(records: &[ExpenseRecord]) -> f64 {
    records.iter().map(|r| r.amount).sum()
}

/// Unrounded mean amount, 0 for empty input
pub fn mean_amount(records: &[ExpenseRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    total_amount(records) / records.len() as f64
}

/// Per-category summed amounts in first-seen order
pub fn category_totals(records: &[ExpenseRecord]) -> CategoryMap<f64> {
    let mut totals = CategoryMap::new();
    for record in records {
        *totals.entry(record.category) += record.amount;
    }
    totals
}

/// Per-category transaction counts in first-seen order
pub fn category_counts(records: &[ExpenseRecord]) -> CategoryMap<usize> {
    let mut counts = CategoryMap::new();
    for record in records {
        *counts.entry(record.category) += 1;
    }
    counts
}

/// Compute totals, counts, the rounded average and the top category
pub fn aggregate(records: &[ExpenseRecord]) -> Aggregation {
    let total_amount = total_amount(records);
    let count = records.len();
    let category_totals = category_totals(records);
    let category_counts = category_counts(records);
    let top_category = category_totals.max_by_value().map(|(c, _)| c);

    let average_amount = if count == 0 {
        0.0
    } else {
        (total_amount / count as f64).round()
    };

    tracing::debug!(
        count,
        total = total_amount,
        categories = category_totals.len(),
        "Aggregated expenses"
    );

    Aggregation {
        count,
        total_amount,
        average_amount,
        category_totals,
        category_counts,
        top_category,
    }
}
