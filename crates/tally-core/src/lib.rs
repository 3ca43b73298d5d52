//! Tally Core Library
//!
//! Expense analytics for the Tally personal finance tracker:
//! - Keyword categorization of expense descriptions
//! - Insight reports (aggregates, weekly trends, patterns, recommendations)
//! - Budget advice and budget progress
//! - CSV/JSON expense import
//! - Engine configuration and an injectable clock
//!
//! The engine performs no persistence or network I/O; callers hand it
//! already-retrieved records.

pub mod categorize;
pub mod clock;
pub mod config;
pub mod error;
pub mod filter;
pub mod import;
pub mod insights;
pub mod models;

pub use categorize::categorize;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{EngineConfig, RecordLimits};
pub use error::{Error, Result};
pub use filter::{recent, ExpenseFilter};
pub use insights::{InsightEngine, InsightOutcome, RecommendationProfile};
pub use models::{Category, ExpenseRecord, NewExpense};
