//! Engine configuration
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the per-user override (~/.config/tally/tally.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::insights::RecommendationProfile;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/tally.toml");

/// Caller-side record limits
///
/// These are policies applied before invoking the engine, not engine
/// invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLimits {
    /// Most recent records used for insight reports
    pub insight_records: usize,
    /// Most recent records used for budget advice
    pub budget_records: usize,
}

impl Default for RecordLimits {
    fn default() -> Self {
        Self {
            insight_records: 100,
            budget_records: 30,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Currency symbol inserted into message strings
    pub currency_symbol: String,
    /// Recommendation profile used by report generation
    pub profile: RecommendationProfile,
    pub limits: RecordLimits,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            profile: RecommendationProfile::Formal,
            limits: RecordLimits::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration (explicit path, then user override, then embedded default)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?,
            None => match default_config_path() {
                Some(default_path) if default_path.exists() => {
                    tracing::debug!(path = %default_path.display(), "Using config override");
                    fs::read_to_string(&default_path)
                        .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?
                }
                _ => DEFAULT_CONFIG.to_string(),
            },
        };

        parse_config(&content)
    }

    /// Embedded defaults only
    pub fn embedded() -> Result<Self> {
        parse_config(DEFAULT_CONFIG)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tally").join("tally.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    currency_symbol: Option<String>,
    profile: Option<String>,
    limits: Option<RawLimits>,
}

#[derive(Debug, Deserialize)]
struct RawLimits {
    insight_records: Option<usize>,
    budget_records: Option<usize>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<EngineConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = EngineConfig::default();

    if let Some(symbol) = raw.currency_symbol {
        config.currency_symbol = symbol;
    }

    if let Some(profile) = raw.profile {
        config.profile = profile.parse().map_err(Error::Config)?;
    }

    if let Some(limits) = raw.limits {
        if let Some(n) = limits.insight_records {
            config.limits.insight_records = n;
        }
        if let Some(n) = limits.budget_records {
            config.limits.budget_records = n;
        }
    }

    Ok(config)
}
