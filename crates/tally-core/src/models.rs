//! Domain models for Tally

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed set of expense categories
///
/// Declaration order is the categorizer's precedence order, with `Other`
/// as the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Accommodation,
    Activities,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Accommodation => "accommodation",
            Self::Activities => "activities",
            Self::Other => "other",
        }
    }

    /// Get all categories
    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Accommodation,
            Self::Activities,
            Self::Other,
        ]
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "entertainment" => Ok(Self::Entertainment),
            "accommodation" => Ok(Self::Accommodation),
            "activities" => Ok(Self::Activities),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user-entered expense, as handed to the engine
///
/// Records are read-only inside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub amount: f64,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    /// Secondary ordering key when two records share a `date`
    pub created_at: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Create a record whose `created_at` equals its `date`
    pub fn new(
        amount: f64,
        category: Category,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            amount,
            category,
            description: description.into(),
            date,
            created_at: date,
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// An expense before categorization (category may be unset)
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: f64,
    pub category: Option<Category>,
    pub description: String,
    pub date: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_round_trip_names() {
        for cat in Category::all() {
            assert_eq!(Category::from_str(cat.as_str()).unwrap(), *cat);
        }
        assert_eq!(Category::from_str(" Food ").unwrap(), Category::Food);
        assert!(Category::from_str("groceries").is_err());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let date = DateTime::parse_from_rfc3339("2024-03-10T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let record = ExpenseRecord::new(12.5, Category::Food, "Lunch", date);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["category"], "food");
        assert_eq!(value["amount"], 12.5);
        assert!(value.get("createdAt").is_some());
    }
}
