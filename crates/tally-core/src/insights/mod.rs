//! Expense analytics engine
//!
//! A pure pipeline over a caller-supplied record snapshot:
//!
//! - **Aggregate** - totals, counts, rounded average, top category
//! - **Trends** - Sunday-aligned weekly buckets and the 7-day comparison
//! - **Patterns** - frequency and large-expense anomalies
//! - **Recommendations** - formal or conversational advisories
//! - **Budget** - buffered budget advice and progress against a budget
//! - **Stats** - per-category totals, counts and averages
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::insights::InsightEngine;
//!
//! let engine = InsightEngine::new();
//! let outcome = engine.build_report(&records);
//! println!("{}", serde_json::to_string_pretty(&outcome)?);
//! ```
//!
//! Callers are expected to bound the record set first (the CLI keeps the 100
//! most recent records for reports and 30 for budget advice, see
//! [`crate::filter::recent`]).

pub mod aggregate;
pub mod budget;
pub mod engine;
pub mod patterns;
pub mod recommendations;
pub mod stats;
pub mod trends;
pub mod types;

pub use aggregate::{aggregate, Aggregation};
pub use budget::{advise_budget, budget_status, BudgetAdvice, BudgetLevel, BudgetStatus};
pub use engine::InsightEngine;
pub use patterns::detect_patterns;
pub use recommendations::recommend;
pub use stats::{category_stats, CategoryStats, ExpenseStats, StatsOverview};
pub use trends::{recent_trend, weekly_trends};
pub use types::{
    CategoryMap, InsightOutcome, InsightPreview, InsightReport, Pattern, PatternType,
    RecentTrend, Recommendation, RecommendationProfile, RecommendationType, Summary, TrendBucket,
    TrendDirection, NO_DATA_MESSAGE,
};
