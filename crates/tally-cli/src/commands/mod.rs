//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Engine construction and expense file loading
//! - `categorize` - Category suggestion for a description
//! - `insights` - Insight report, conversational preview, 7-day trend
//! - `budget` - Budget advice and budget status
//! - `stats` - Per-category statistics

pub mod budget;
pub mod categorize;
pub mod core;
pub mod insights;
pub mod stats;

// Re-export command functions for main.rs
pub use budget::*;
pub use categorize::*;
pub use core::*;
pub use insights::*;
pub use stats::*;

/// Format an amount with the currency symbol and two decimals
pub fn money(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
