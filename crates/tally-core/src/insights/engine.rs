//! Insight Engine - orchestrates the analytics pipeline
//!
//! Every call is a pure computation over the caller's record snapshot. The
//! only ambient input is the injected clock used by the 7-day trend.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::categorize::categorize;
use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::filter::ExpenseFilter;
use crate::models::{Category, ExpenseRecord};

use super::aggregate::{aggregate, mean_amount};
use super::budget::{advise_budget, budget_status, BudgetAdvice, BudgetStatus};
use super::patterns::detect_patterns;
use super::recommendations::recommend;
use super::stats::{category_stats, ExpenseStats};
use super::trends::{recent_trend, weekly_trends};
use super::types::{
    InsightOutcome, InsightPreview, InsightReport, RecentTrend, RecommendationProfile, Summary,
};

/// The main insight engine
pub struct InsightEngine {
    config: EngineConfig,
    clock: Arc<dyn Clock>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with default configuration and the system clock
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Suggest a category for a new expense description
    pub fn categorize(&self, description: &str) -> Category {
        categorize(description)
    }

    /// Build the insight report using the formal recommendation profile
    pub fn build_report(&self, records: &[ExpenseRecord]) -> InsightOutcome {
        self.build_report_with_profile(records, RecommendationProfile::Formal)
    }

    /// Build the insight report with an explicit recommendation profile
    ///
    /// Empty input yields the no-data sentinel rather than an error.
    pub fn build_report_with_profile(
        &self,
        records: &[ExpenseRecord],
        profile: RecommendationProfile,
    ) -> InsightOutcome {
        if records.is_empty() {
            tracing::debug!("No expenses to analyze");
            return InsightOutcome::no_data();
        }

        let aggregation = aggregate(records);
        let trends = weekly_trends(records);
        let patterns = detect_patterns(records);
        let recommendations = recommend(
            records,
            &aggregation.category_totals,
            profile,
            &self.config.currency_symbol,
        );

        if aggregation.top_category.is_none() {
            tracing::warn!(
                count = aggregation.count,
                "No top category for non-empty input"
            );
        }

        tracing::info!(
            records = aggregation.count,
            weeks = trends.len(),
            patterns = patterns.len(),
            recommendations = recommendations.len(),
            "Insight report built"
        );

        InsightOutcome::Report(InsightReport {
            summary: Summary {
                count: aggregation.count,
                total_amount: aggregation.total_amount,
                average_amount: aggregation.average_amount,
                top_category: aggregation.top_category,
            },
            category_breakdown: aggregation.category_totals,
            trends,
            patterns,
            recommendations,
        })
    }

    /// Client-facing conversational summary; `None` for empty input
    pub fn preview(&self, records: &[ExpenseRecord]) -> Option<InsightPreview> {
        if records.is_empty() {
            return None;
        }

        let aggregation = aggregate(records);
        let trends = if records.len() < 2 {
            vec![]
        } else {
            vec![self.recent_trend(records)]
        };
        let recommendations = recommend(
            records,
            &aggregation.category_totals,
            RecommendationProfile::Conversational,
            &self.config.currency_symbol,
        );

        Some(InsightPreview {
            total_spent: aggregation.total_amount,
            average_expense: mean_amount(records),
            top_category: aggregation.top_category,
            categories: aggregation.category_totals,
            trends,
            recommendations,
        })
    }

    /// Last 7 days vs the 7 days before, relative to the engine clock
    pub fn recent_trend(&self, records: &[ExpenseRecord]) -> RecentTrend {
        recent_trend(records, self.now())
    }

    pub fn advise_budget(&self, records: &[ExpenseRecord]) -> BudgetAdvice {
        advise_budget(records, &self.config.currency_symbol)
    }

    pub fn budget_status(&self, budget: f64, records: &[ExpenseRecord]) -> Option<BudgetStatus> {
        budget_status(budget, records)
    }

    pub fn stats(&self, records: &[ExpenseRecord], filter: &ExpenseFilter) -> ExpenseStats {
        category_stats(&filter.apply(records))
    }
}
