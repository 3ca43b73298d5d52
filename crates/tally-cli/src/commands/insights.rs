//! Insight report, preview and trend commands

use std::path::Path;

use anyhow::Result;
use tally_core::insights::{InsightOutcome, RecentTrend, Recommendation};
use tally_core::{recent, InsightEngine, RecommendationProfile};

use super::{load_expenses, money, print_json};

fn print_recommendations(recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        return;
    }
    println!();
    println!("💡 Recommendations");
    for rec in recommendations {
        println!("   [{}] {}", rec.recommendation_type.as_str(), rec.message);
    }
}

fn print_trend(trend: &RecentTrend) {
    println!(
        "   {}: {:.1}% {} from previous period",
        trend.period, trend.change, trend.direction
    );
}

pub fn cmd_insights(
    engine: &InsightEngine,
    file: &Path,
    profile: Option<&str>,
    json: bool,
) -> Result<()> {
    let profile = match profile {
        Some(p) => p
            .parse::<RecommendationProfile>()
            .map_err(anyhow::Error::msg)?,
        None => engine.config().profile,
    };

    let records = load_expenses(file)?;
    let records = recent(&records, engine.config().limits.insight_records);
    let outcome = engine.build_report_with_profile(&records, profile);

    if json {
        return print_json(&outcome);
    }

    let report = match outcome {
        InsightOutcome::Report(report) => report,
        InsightOutcome::NoData { message } => {
            println!("{}", message);
            return Ok(());
        }
    };
    let symbol = &engine.config().currency_symbol;

    println!();
    println!("📊 Spending Insights");
    println!("   ─────────────────────────────────────────────");
    println!("   Expenses:      {}", report.summary.count);
    println!("   Total:         {}", money(symbol, report.summary.total_amount));
    println!("   Average:       {}{}", symbol, report.summary.average_amount);
    println!(
        "   Top category:  {}",
        report
            .summary
            .top_category
            .map(|c| c.as_str())
            .unwrap_or("none")
    );

    println!();
    println!("   {:15} │ {:>12}", "Category", "Amount");
    println!("   ────────────────┼─────────────");
    for (category, amount) in report.category_breakdown.iter() {
        println!("   {:15} │ {:>12.2}", category.as_str(), amount);
    }

    if !report.trends.is_empty() {
        println!();
        println!("📈 Weekly Spending");
        for bucket in &report.trends {
            println!(
                "   Week of {}  {}",
                bucket.period_start,
                money(symbol, bucket.amount)
            );
        }
    }

    if !report.patterns.is_empty() {
        println!();
        println!("🔍 Patterns");
        for pattern in &report.patterns {
            println!("   • {}", pattern.message);
        }
    }

    print_recommendations(&report.recommendations);
    Ok(())
}

pub fn cmd_preview(engine: &InsightEngine, file: &Path, json: bool) -> Result<()> {
    let records = load_expenses(file)?;
    let preview = engine.preview(&records);

    if json {
        return print_json(&preview);
    }

    let Some(preview) = preview else {
        println!("Add some expenses to see personalized insights and recommendations");
        return Ok(());
    };
    let symbol = &engine.config().currency_symbol;

    println!();
    println!("🧠 Insights");
    println!(
        "   Top category:  {}",
        preview.top_category.map(|c| c.as_str()).unwrap_or("none")
    );
    println!("   Avg expense:   {}{:.0}", symbol, preview.average_expense.round());
    println!("   Total spent:   {}", money(symbol, preview.total_spent));

    if !preview.trends.is_empty() {
        println!();
        println!("📈 Spending Trends");
        for trend in &preview.trends {
            print_trend(trend);
        }
    }

    print_recommendations(&preview.recommendations);
    Ok(())
}

pub fn cmd_trend(engine: &InsightEngine, file: &Path, json: bool) -> Result<()> {
    let records = load_expenses(file)?;
    let trend = engine.recent_trend(&records);

    if json {
        return print_json(&trend);
    }

    let symbol = &engine.config().currency_symbol;
    println!();
    println!("📈 Spending Trend (as of {})", engine.now().format("%Y-%m-%d %H:%M"));
    println!("   Last 7 days:      {}", money(symbol, trend.current_total));
    println!("   Previous 7 days:  {}", money(symbol, trend.previous_total));
    print_trend(&trend);
    Ok(())
}
