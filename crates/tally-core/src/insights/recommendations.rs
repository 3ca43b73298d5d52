//! Advisory messages derived from category totals
//!
//! Two profiles exist because the product shows two distinct wordings:
//! - Formal: `category_warning` for every category above 40% of spend, plus a
//!   `frequency` advisory for very high transaction counts
//! - Conversational: a `warning` for the top category above 40%, a meal
//!   planning `tip` when food exceeds 30%, and an average-expense `insight`

use crate::models::{Category, ExpenseRecord};

use super::aggregate::total_amount;
use super::types::{CategoryMap, Recommendation, RecommendationProfile, RecommendationType};

/// Percent of total spend above which a category is called out
pub const CATEGORY_SHARE_PERCENT: f64 = 40.0;

/// Share of total spend above which food triggers the meal planning tip
pub const FOOD_SHARE: f64 = 0.3;

/// Record count above which the weekly-frequency check runs (formal)
pub const FREQUENCY_MIN_RECORDS: usize = 20;

/// Transactions per week above which consolidation is suggested (formal)
pub const FREQUENCY_PER_WEEK: f64 = 10.0;

/// Record count above which the average-expense insight is shown (conversational)
pub const INSIGHT_MIN_RECORDS: usize = 10;

/// Format a value to one decimal from its exact binary value
///
/// Only exact hundredths ending in 5 (`x.25`, `x.75`) are ties; those round
/// up rather than to even. Scaling by 4 is exact, so it detects them without
/// picking up values that merely sit near a boundary.
pub(crate) fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && (value * 2.0).fract() != 0.0 {
        return format!("{:.1}", (value * 10.0).ceil() / 10.0);
    }
    format!("{:.1}", value)
}

/// Generate recommendations for the selected profile
pub fn recommend(
    records: &[ExpenseRecord],
    category_totals: &CategoryMap<f64>,
    profile: RecommendationProfile,
    currency_symbol: &str,
) -> Vec<Recommendation> {
    let recommendations = match profile {
        RecommendationProfile::Formal => formal_recommendations(records, category_totals),
        RecommendationProfile::Conversational => {
            conversational_recommendations(records, category_totals, currency_symbol)
        }
    };

    tracing::debug!(
        profile = profile.as_str(),
        count = recommendations.len(),
        "Generated recommendations"
    );
    recommendations
}

/// Formal profile: per-category warnings, then the frequency advisory
pub fn formal_recommendations(
    records: &[ExpenseRecord],
    category_totals: &CategoryMap<f64>,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let total = total_amount(records);

    if total > 0.0 {
        for (category, amount) in category_totals.iter() {
            let percentage = amount / total * 100.0;
            if percentage > CATEGORY_SHARE_PERCENT {
                recommendations.push(
                    Recommendation::new(
                        RecommendationType::CategoryWarning,
                        format!(
                            "{} represents {}% of your spending. Consider setting limits.",
                            category,
                            one_decimal(percentage)
                        ),
                    )
                    .with_category(category),
                );
            }
        }
    }

    if records.len() > FREQUENCY_MIN_RECORDS {
        let avg_per_week = records.len() as f64 / 4.0;
        if avg_per_week > FREQUENCY_PER_WEEK {
            recommendations.push(Recommendation::new(
                RecommendationType::Frequency,
                "You have many small transactions. Consider consolidating purchases.",
            ));
        }
    }

    recommendations
}

/// Conversational profile: top-category warning, food tip, average insight
pub fn conversational_recommendations(
    records: &[ExpenseRecord],
    category_totals: &CategoryMap<f64>,
    currency_symbol: &str,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let total = total_amount(records);

    if total > 0.0 {
        if let Some((category, &amount)) = category_totals.max_by_value() {
            if amount > total * CATEGORY_SHARE_PERCENT / 100.0 {
                recommendations.push(Recommendation::new(
                    RecommendationType::Warning,
                    format!(
                        "You're spending {}% of your budget on {}. Consider setting a limit for this category.",
                        one_decimal(amount / total * 100.0),
                        category
                    ),
                ));
            }
        }

        if let Some(&food) = category_totals.get(Category::Food) {
            if food > total * FOOD_SHARE {
                recommendations.push(Recommendation::new(
                    RecommendationType::Tip,
                    "Try meal planning and cooking at home to reduce food expenses by 20-30%.",
                ));
            }
        }
    }

    if records.len() > INSIGHT_MIN_RECORDS {
        let average = (total / records.len() as f64).round();
        recommendations.push(Recommendation::new(
            RecommendationType::Insight,
            format!(
                "Your average expense is {}{}. Small expenses add up!",
                currency_symbol, average
            ),
        ));
    }

    recommendations
}
