//! Output types for the analytics engine
//!
//! Every value here is computed fresh per call and owned by the caller.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::models::Category;

/// Which wording/threshold set the recommendation generator uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationProfile {
    /// `category_warning` / `frequency` advisories (report endpoint wording)
    #[default]
    Formal,
    /// `warning` / `tip` / `insight` advisories addressed to the user
    Conversational,
}

impl RecommendationProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationProfile::Formal => "formal",
            RecommendationProfile::Conversational => "conversational",
        }
    }
}

impl fmt::Display for RecommendationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "formal" => Ok(RecommendationProfile::Formal),
            "conversational" => Ok(RecommendationProfile::Conversational),
            _ => Err(format!("Unknown recommendation profile: {}", s)),
        }
    }
}

/// Per-category values in first-seen order
///
/// Only categories present in the input have entries. Serializes as a JSON
/// object whose keys keep that order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMap<T> {
    entries: Vec<(Category, T)>,
}

impl<T> Default for CategoryMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> CategoryMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> Option<&T> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, v)| v)
    }

    /// Mutable entry for `category`, inserting `T::default()` at the end if absent
    pub fn entry(&mut self, category: Category) -> &mut T
    where
        T: Default,
    {
        let idx = match self.entries.iter().position(|(c, _)| *c == category) {
            Some(idx) => idx,
            None => {
                self.entries.push((category, T::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        self.entries.iter().map(|(c, v)| (*c, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category with the largest value; ties keep the earliest entry
    pub fn max_by_value(&self) -> Option<(Category, &T)>
    where
        T: PartialOrd,
    {
        let mut best: Option<(Category, &T)> = None;
        for (category, value) in self.iter() {
            let replace = match best {
                Some((_, best_value)) => value > best_value,
                None => true,
            };
            if replace {
                best = Some((category, value));
            }
        }
        best
    }
}

impl<T: Serialize> Serialize for CategoryMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, value) in &self.entries {
            map.serialize_entry(category.as_str(), value)?;
        }
        map.end()
    }
}

fn serialize_top_category<S: Serializer>(
    value: &Option<Category>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.map(|c| c.as_str()).unwrap_or("none"))
}

/// Headline numbers of an insight report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub count: usize,
    pub total_amount: f64,
    /// Mean amount rounded to a whole currency unit
    pub average_amount: f64,
    /// Serialized as `"none"` when absent
    #[serde(serialize_with = "serialize_top_category")]
    pub top_category: Option<Category>,
}

/// Spending in one Sunday-aligned calendar week
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendBucket {
    pub period_start: NaiveDate,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increase,
    Decrease,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Increase => "increase",
            TrendDirection::Decrease => "decrease",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Last 7 days compared with the 7 days before
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTrend {
    pub period: String,
    pub current_total: f64,
    pub previous_total: f64,
    /// Percent change; 0 when the previous window is empty
    pub change: f64,
    pub direction: TrendDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    /// One category dominates transaction count
    Frequency,
    /// Expenses more than twice the mean amount
    LargeExpenses,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    #[serde(rename = "type")]
    pub pattern_type: PatternType,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    CategoryWarning,
    Frequency,
    Warning,
    Tip,
    Insight,
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::CategoryWarning => "category_warning",
            RecommendationType::Frequency => "frequency",
            RecommendationType::Warning => "warning",
            RecommendationType::Tip => "tip",
            RecommendationType::Insight => "insight",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub message: String,
}

impl Recommendation {
    pub fn new(recommendation_type: RecommendationType, message: impl Into<String>) -> Self {
        Self {
            recommendation_type,
            category: None,
            message: message.into(),
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

/// Full insight report for a non-empty record set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightReport {
    pub summary: Summary,
    pub category_breakdown: CategoryMap<f64>,
    /// Most recent week first, at most 4
    pub trends: Vec<TrendBucket>,
    pub patterns: Vec<Pattern>,
    pub recommendations: Vec<Recommendation>,
}

pub const NO_DATA_MESSAGE: &str = "No expenses found for analysis";

/// Result of report generation: a report, or the no-data sentinel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InsightOutcome {
    Report(InsightReport),
    NoData { message: String },
}

impl InsightOutcome {
    pub fn no_data() -> Self {
        InsightOutcome::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        }
    }

    pub fn report(&self) -> Option<&InsightReport> {
        match self {
            InsightOutcome::Report(report) => Some(report),
            InsightOutcome::NoData { .. } => None,
        }
    }
}

/// Client-facing conversational summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightPreview {
    pub total_spent: f64,
    /// Unrounded mean
    pub average_expense: f64,
    #[serde(serialize_with = "serialize_top_category")]
    pub top_category: Option<Category>,
    pub categories: CategoryMap<f64>,
    /// Empty when fewer than 2 records exist
    pub trends: Vec<RecentTrend>,
    pub recommendations: Vec<Recommendation>,
}
