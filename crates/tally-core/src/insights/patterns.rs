//! Frequency and amount anomaly detection

use crate::models::ExpenseRecord;

use super::aggregate::{category_counts, mean_amount};
use super::types::{Pattern, PatternType};

/// Share of transactions above which the most frequent category is reported
pub const FREQUENCY_SHARE: f64 = 0.3;

/// Multiple of the mean above which an expense is "large"
pub const LARGE_EXPENSE_FACTOR: f64 = 2.0;

/// Number of records with `amount > 2 * mean`
pub fn count_large_expenses(records: &[ExpenseRecord]) -> usize {
    let threshold = mean_amount(records) * LARGE_EXPENSE_FACTOR;
    records.iter().filter(|r| r.amount > threshold).count()
}

/// Detect frequency and large-expense patterns, in that order
pub fn detect_patterns(records: &[ExpenseRecord]) -> Vec<Pattern> {
    let mut patterns = Vec::new();
    if records.is_empty() {
        return patterns;
    }

    let counts = category_counts(records);
    if let Some((category, &count)) = counts.max_by_value() {
        if count as f64 > records.len() as f64 * FREQUENCY_SHARE {
            patterns.push(Pattern {
                pattern_type: PatternType::Frequency,
                message: format!(
                    "You spend most frequently on {} ({} times)",
                    category, count
                ),
            });
        }
    }

    let large = count_large_expenses(records);
    if large > 0 {
        patterns.push(Pattern {
            pattern_type: PatternType::LargeExpenses,
            message: format!("You have {} expenses significantly above average", large),
        });
    }

    tracing::debug!(patterns = patterns.len(), "Pattern detection complete");
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::{TimeZone, Utc};

    fn record(amount: f64, category: Category) -> ExpenseRecord {
        let date = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        ExpenseRecord::new(amount, category, "", date)
    }

    #[test]
    fn test_empty_input_has_no_patterns() {
        assert!(detect_patterns(&[]).is_empty());
    }

    #[test]
    fn test_large_expense_threshold() {
        // mean 32.5, threshold 65
        let records = vec![
            record(10.0, Category::Food),
            record(10.0, Category::Transport),
            record(10.0, Category::Entertainment),
            record(100.0, Category::Accommodation),
        ];
        assert_eq!(count_large_expenses(&records), 1);

        let patterns = detect_patterns(&records);
        let large: Vec<&Pattern> = patterns
            .iter()
            .filter(|p| p.pattern_type == PatternType::LargeExpenses)
            .collect();
        assert_eq!(large.len(), 1);
        assert_eq!(
            large[0].message,
            "You have 1 expenses significantly above average"
        );
    }

    #[test]
    fn test_frequency_pattern_fires_above_thirty_percent() {
        let records = vec![
            record(10.0, Category::Food),
            record(10.0, Category::Food),
            record(10.0, Category::Transport),
            record(10.0, Category::Entertainment),
            record(10.0, Category::Other),
        ];
        // food: 2 of 5 = 40% > 30%
        let patterns = detect_patterns(&records);
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].pattern_type, PatternType::Frequency);
        assert_eq!(
            patterns[0].message,
            "You spend most frequently on food (2 times)"
        );
    }

    #[test]
    fn test_frequency_pattern_uses_counts_not_amounts() {
        let records = vec![
            record(500.0, Category::Accommodation),
            record(5.0, Category::Food),
            record(5.0, Category::Food),
            record(5.0, Category::Food),
        ];
        let patterns = detect_patterns(&records);
        assert_eq!(patterns[0].pattern_type, PatternType::Frequency);
        assert!(patterns[0].message.contains("food (3 times)"));
    }

    #[test]
    fn test_frequency_pattern_silent_at_or_below_threshold() {
        let records: Vec<ExpenseRecord> = [
            Category::Food,
            Category::Transport,
            Category::Entertainment,
            Category::Accommodation,
            Category::Activities,
            Category::Other,
            Category::Food,
            Category::Transport,
            Category::Entertainment,
            Category::Accommodation,
        ]
        .iter()
        .map(|c| record(10.0, *c))
        .collect();
        // Top count 2 of 10 = 20%; equal amounts mean no large expenses
        assert!(detect_patterns(&records).is_empty());
    }

    #[test]
    fn test_both_patterns_frequency_first() {
        let records = vec![
            record(10.0, Category::Food),
            record(10.0, Category::Food),
            record(10.0, Category::Food),
            record(200.0, Category::Transport),
        ];
        let patterns = detect_patterns(&records);
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].pattern_type, PatternType::Frequency);
        assert_eq!(patterns[1].pattern_type, PatternType::LargeExpenses);
    }

    #[test]
    fn test_frequency_tie_reports_first_seen_category() {
        let records = vec![
            record(10.0, Category::Transport),
            record(10.0, Category::Food),
            record(10.0, Category::Food),
            record(10.0, Category::Transport),
        ];
        let patterns = detect_patterns(&records);
        assert!(patterns[0].message.contains("transport (2 times)"));
    }
}
