//! Record selection applied by callers before invoking the engine

use chrono::NaiveDate;

use crate::models::{Category, ExpenseRecord};

/// The `limit` most recent records, newest first
///
/// Ordered by `date` descending, then `created_at` descending.
pub fn recent(records: &[ExpenseRecord], limit: usize) -> Vec<ExpenseRecord> {
    let mut sorted: Vec<ExpenseRecord> = records.to_vec();
    sorted.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    sorted.truncate(limit);
    sorted
}

/// Category and inclusive date range filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub category: Option<Category>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        let day = record.date.date_naive();
        self.category.map_or(true, |c| record.category == c)
            && self.from.map_or(true, |from| day >= from)
            && self.to.map_or(true, |to| day <= to)
    }

    pub fn apply(&self, records: &[ExpenseRecord]) -> Vec<ExpenseRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_recent_orders_by_date_then_created_at() {
        let records = vec![
            ExpenseRecord::new(1.0, Category::Food, "old", at(1, 9)),
            ExpenseRecord::new(2.0, Category::Food, "same-a", at(5, 9)).with_created_at(at(5, 10)),
            ExpenseRecord::new(3.0, Category::Food, "same-b", at(5, 9)).with_created_at(at(5, 11)),
            ExpenseRecord::new(4.0, Category::Food, "new", at(8, 9)),
        ];
        let picked = recent(&records, 3);

        let names: Vec<&str> = picked.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(names, vec!["new", "same-b", "same-a"]);
        // Input untouched
        assert_eq!(records[0].description, "old");
    }

    #[test]
    fn test_recent_limit_larger_than_input() {
        let records = vec![ExpenseRecord::new(1.0, Category::Food, "", at(1, 9))];
        assert_eq!(recent(&records, 100).len(), 1);
        assert!(recent(&records, 0).is_empty());
    }

    #[test]
    fn test_filter_category_and_inclusive_range() {
        let records = vec![
            ExpenseRecord::new(1.0, Category::Food, "", at(1, 23)),
            ExpenseRecord::new(2.0, Category::Food, "", at(3, 0)),
            ExpenseRecord::new(3.0, Category::Transport, "", at(2, 12)),
            ExpenseRecord::new(4.0, Category::Food, "", at(4, 0)),
        ];
        let from = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();

        let filtered = ExpenseFilter::new()
            .category(Category::Food)
            .date_range(from, to)
            .apply(&records);
        let amounts: Vec<f64> = filtered.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![1.0, 2.0]);

        assert_eq!(ExpenseFilter::new().apply(&records).len(), 4);
    }
}
