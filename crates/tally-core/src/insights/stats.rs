//! Per-category statistics

use serde::Serialize;

use crate::models::{Category, ExpenseRecord};

use super::aggregate::{category_counts, category_totals};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category: Category,
    pub total: f64,
    pub count: usize,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    pub total_amount: f64,
    pub total_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseStats {
    /// Highest total first; equal totals keep first-seen order
    pub categories: Vec<CategoryStats>,
    pub overview: StatsOverview,
}

pub fn category_stats(records: &[ExpenseRecord]) -> ExpenseStats {
    let totals = category_totals(records);
    let counts = category_counts(records);

    let mut categories: Vec<CategoryStats> = totals
        .iter()
        .map(|(category, &total)| {
            let count = counts.get(category).copied().unwrap_or(0);
            CategoryStats {
                category,
                total,
                count,
                average: if count > 0 { total / count as f64 } else { 0.0 },
            }
        })
        .collect();

    // sort_by is stable
    categories.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ExpenseStats {
        categories,
        overview: StatsOverview {
            total_amount: records.iter().map(|r| r.amount).sum(),
            total_count: records.len(),
        },
    }
}
