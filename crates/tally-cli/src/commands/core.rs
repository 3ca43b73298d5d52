//! Core command utilities
//!
//! This module contains:
//! - `build_engine` - Load config and construct the insight engine
//! - `load_expenses` - Read an expense file

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tally_core::import::{load_file, parse_timestamp};
use tally_core::{EngineConfig, ExpenseRecord, FixedClock, InsightEngine};

/// Build the engine from config, with optional `--now` and `--currency` overrides
pub fn build_engine(
    config_path: Option<&Path>,
    now: Option<&str>,
    currency: Option<&str>,
) -> Result<InsightEngine> {
    let mut config = EngineConfig::load(config_path).context("Failed to load config")?;
    if let Some(symbol) = currency {
        config.currency_symbol = symbol.to_string();
    }

    let mut engine = InsightEngine::with_config(config);
    if let Some(now) = now {
        let instant = parse_timestamp(now).context("Invalid --now value")?;
        tracing::debug!(now = %instant, "Using pinned clock");
        engine = engine.with_clock(Arc::new(FixedClock(instant)));
    }

    Ok(engine)
}

/// Load and validate all expenses from a file
pub fn load_expenses(path: &Path) -> Result<Vec<ExpenseRecord>> {
    let records = load_file(path)
        .with_context(|| format!("Failed to read expenses from {}", path.display()))?;
    tracing::debug!(count = records.len(), file = %path.display(), "Loaded expenses");
    Ok(records)
}
