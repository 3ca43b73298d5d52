//! Spending trends: weekly buckets and the 7-day comparison window

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::models::ExpenseRecord;

use super::types::{RecentTrend, TrendBucket, TrendDirection};

/// Number of weekly buckets reported
pub const MAX_WEEKS: usize = 4;

/// Label used for the 7-day comparison
pub const RECENT_PERIOD_LABEL: &str = "Last 7 days";

/// Start (Sunday) of the calendar week containing `date`
pub fn week_start(date: DateTime<Utc>) -> NaiveDate {
    let day = date.date_naive();
    day - Duration::days(i64::from(day.weekday().num_days_from_sunday()))
}

/// Sum amounts per Sunday-aligned week, most recent week first, at most 4
pub fn weekly_trends(records: &[ExpenseRecord]) -> Vec<TrendBucket> {
    let mut weeks: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        *weeks.entry(week_start(record.date)).or_insert(0.0) += record.amount;
    }

    tracing::debug!(weeks = weeks.len(), "Bucketed expenses by week");

    weeks
        .into_iter()
        .rev()
        .take(MAX_WEEKS)
        .map(|(period_start, amount)| TrendBucket {
            period_start,
            amount,
        })
        .collect()
}

/// Compare spending in the last 7 days against the 7 days before that
///
/// The current window is `date >= now - 7d` (no upper bound); the previous
/// window is `now - 14d <= date < now - 7d`. A zero previous total yields a
/// change of 0, which is labeled a decrease.
pub fn recent_trend(records: &[ExpenseRecord], now: DateTime<Utc>) -> RecentTrend {
    let week_ago = now - Duration::days(7);
    let two_weeks_ago = now - Duration::days(14);

    let current_total: f64 = records
        .iter()
        .filter(|r| r.date >= week_ago)
        .map(|r| r.amount)
        .sum();
    let previous_total: f64 = records
        .iter()
        .filter(|r| r.date >= two_weeks_ago && r.date < week_ago)
        .map(|r| r.amount)
        .sum();

    let change = if previous_total > 0.0 {
        (current_total - previous_total) / previous_total * 100.0
    } else {
        0.0
    };

    let direction = if change > 0.0 {
        TrendDirection::Increase
    } else {
        TrendDirection::Decrease
    };

    RecentTrend {
        period: RECENT_PERIOD_LABEL.to_string(),
        current_total,
        previous_total,
        change,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn record(amount: f64, date: DateTime<Utc>) -> ExpenseRecord {
        ExpenseRecord::new(amount, Category::Food, "", date)
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_is_sunday() {
        // 2024-03-13 is a Wednesday
        assert_eq!(week_start(at(2024, 3, 13, 18)), ymd(2024, 3, 10));
        // Sunday maps to itself
        assert_eq!(week_start(at(2024, 3, 10, 0)), ymd(2024, 3, 10));
        // Saturday belongs to the week that started six days earlier
        assert_eq!(week_start(at(2024, 3, 16, 23)), ymd(2024, 3, 10));
        // Across a month boundary
        assert_eq!(week_start(at(2024, 3, 1, 8)), ymd(2024, 2, 25));
    }

    #[test]
    fn test_weekly_trends_sums_and_orders() {
        let records = vec![
            record(10.0, at(2024, 3, 4, 9)),
            record(20.0, at(2024, 3, 13, 9)),
            record(5.0, at(2024, 3, 11, 9)),
            record(7.5, at(2024, 2, 27, 9)),
        ];
        let trends = weekly_trends(&records);

        assert_eq!(
            trends,
            vec![
                TrendBucket {
                    period_start: ymd(2024, 3, 10),
                    amount: 25.0
                },
                TrendBucket {
                    period_start: ymd(2024, 3, 3),
                    amount: 10.0
                },
                TrendBucket {
                    period_start: ymd(2024, 2, 25),
                    amount: 7.5
                },
            ]
        );
    }

    #[test]
    fn test_weekly_trends_keeps_four_most_recent() {
        let records: Vec<ExpenseRecord> = (0..6)
            .map(|week| record(1.0 + week as f64, at(2024, 1, 1, 12) + Duration::weeks(week)))
            .collect();
        let trends = weekly_trends(&records);

        assert_eq!(trends.len(), MAX_WEEKS);
        assert!(trends
            .windows(2)
            .all(|w| w[0].period_start > w[1].period_start));
        assert_eq!(trends[0].amount, 6.0);
        assert_eq!(trends[3].amount, 3.0);
    }

    #[test]
    fn test_weekly_trends_empty() {
        assert!(weekly_trends(&[]).is_empty());
    }

    #[test]
    fn test_recent_trend_increase() {
        let now = at(2024, 3, 20, 12);
        let records = vec![
            record(150.0, now - Duration::days(2)),
            record(100.0, now - Duration::days(10)),
            // Outside both windows
            record(999.0, now - Duration::days(30)),
        ];
        let trend = recent_trend(&records, now);

        assert_eq!(trend.period, "Last 7 days");
        assert_eq!(trend.current_total, 150.0);
        assert_eq!(trend.previous_total, 100.0);
        assert_eq!(trend.change, 50.0);
        assert_eq!(trend.direction, TrendDirection::Increase);
    }

    #[test]
    fn test_recent_trend_decrease() {
        let now = at(2024, 3, 20, 12);
        let records = vec![
            record(25.0, now - Duration::days(1)),
            record(100.0, now - Duration::days(8)),
        ];
        let trend = recent_trend(&records, now);
        assert_eq!(trend.change, -75.0);
        assert_eq!(trend.direction, TrendDirection::Decrease);
    }

    #[test]
    fn test_recent_trend_empty_previous_window_is_zero_decrease() {
        let now = at(2024, 3, 20, 12);
        let records = vec![
            record(80.0, now - Duration::days(1)),
            record(20.0, now - Duration::days(3)),
        ];
        let trend = recent_trend(&records, now);

        assert_eq!(trend.previous_total, 0.0);
        assert_eq!(trend.current_total, 100.0);
        assert_eq!(trend.change, 0.0);
        assert!(trend.change.is_finite());
        assert_eq!(trend.direction, TrendDirection::Decrease);
    }

    #[test]
    fn test_recent_trend_window_boundaries() {
        let now = at(2024, 3, 20, 12);
        let records = vec![
            // Exactly 7 days ago belongs to the current window
            record(10.0, now - Duration::days(7)),
            // Exactly 14 days ago belongs to the previous window
            record(40.0, now - Duration::days(14)),
            // Future-dated expenses still count as current
            record(5.0, now + Duration::days(1)),
        ];
        let trend = recent_trend(&records, now);
        assert_eq!(trend.current_total, 15.0);
        assert_eq!(trend.previous_total, 40.0);
    }
}
