//! Category statistics command

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tally_core::{Category, ExpenseFilter, InsightEngine};

use super::{load_expenses, money, print_json};

/// Build a filter from CLI arguments
pub fn parse_filter(
    category: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<ExpenseFilter> {
    let mut filter = ExpenseFilter::new();

    if let Some(category) = category {
        let category = category
            .parse::<Category>()
            .map_err(anyhow::Error::msg)?;
        filter = filter.category(category);
    }

    if let (Some(from), Some(to)) = (from, to) {
        let from = NaiveDate::parse_from_str(from, "%Y-%m-%d")
            .context("Invalid --from date format (use YYYY-MM-DD)")?;
        let to = NaiveDate::parse_from_str(to, "%Y-%m-%d")
            .context("Invalid --to date format (use YYYY-MM-DD)")?;
        filter = filter.date_range(from, to);
    }

    Ok(filter)
}

pub fn cmd_stats(
    engine: &InsightEngine,
    file: &Path,
    category: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    json: bool,
) -> Result<()> {
    let filter = parse_filter(category, from, to)?;
    let records = load_expenses(file)?;
    let stats = engine.stats(&records, &filter);

    if json {
        return print_json(&stats);
    }

    let symbol = &engine.config().currency_symbol;
    println!();
    println!("📊 Expense Statistics");
    println!(
        "   Total: {} across {} expenses",
        money(symbol, stats.overview.total_amount),
        stats.overview.total_count
    );

    if stats.categories.is_empty() {
        println!("   No expenses match.");
        return Ok(());
    }

    println!();
    println!(
        "   {:15} │ {:>12} │ {:>5} │ {:>10}",
        "Category", "Total", "Count", "Average"
    );
    println!("   ────────────────┼──────────────┼───────┼───────────");
    for cat in &stats.categories {
        println!(
            "   {:15} │ {:>12.2} │ {:>5} │ {:>10.2}",
            cat.category.as_str(),
            cat.total,
            cat.count,
            cat.average
        );
    }
    Ok(())
}
