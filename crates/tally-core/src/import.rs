//! Expense import from CSV and JSON exports
//!
//! Both formats carry `date`, `description`, `amount`, `category` and an
//! optional `created_at`. A blank category is filled in by the keyword
//! categorizer; anything else that fails validation is `InvalidInput`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use tracing::debug;

use crate::categorize::categorize;
use crate::error::{Error, Result};
use crate::models::{Category, ExpenseRecord, NewExpense};

/// Datetime layouts without an offset, read as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a timestamp: RFC 3339, an offset-less ISO datetime (UTC) or
/// `YYYY-MM-DD` (UTC midnight)
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }

    Err(Error::InvalidInput(format!("Unparseable date: {:?}", value)))
}

fn parse_amount(value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidInput(format!("Invalid amount: {:?}", value)))
}

fn parse_category(value: &str) -> Result<Option<Category>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    value
        .parse::<Category>()
        .map(Some)
        .map_err(Error::InvalidInput)
}

/// Validate a new expense and assign a category if it has none
pub fn into_record(expense: NewExpense) -> Result<ExpenseRecord> {
    if !expense.amount.is_finite() || expense.amount < 0.0 {
        return Err(Error::InvalidInput(format!(
            "Amount must be a non-negative number, got {}",
            expense.amount
        )));
    }

    let category = match expense.category {
        Some(category) => category,
        None => {
            let suggested = categorize(&expense.description);
            debug!(
                description = expense.description.as_str(),
                category = suggested.as_str(),
                "Auto-categorized expense"
            );
            suggested
        }
    };

    Ok(ExpenseRecord {
        amount: expense.amount,
        category,
        description: expense.description,
        date: expense.date,
        created_at: expense.created_at.unwrap_or(expense.date),
    })
}

/// Column positions resolved from the header row
struct Columns {
    date: usize,
    amount: usize,
    description: Option<usize>,
    category: Option<usize>,
    created_at: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |names: &[&str]| {
            headers.iter().position(|h| {
                let h = h.trim().to_lowercase();
                names.iter().any(|n| *n == h)
            })
        };

        Ok(Self {
            date: find(&["date"])
                .ok_or_else(|| Error::InvalidInput("Missing 'date' column".into()))?,
            amount: find(&["amount"])
                .ok_or_else(|| Error::InvalidInput("Missing 'amount' column".into()))?,
            description: find(&["description"]),
            category: find(&["category"]),
            created_at: find(&["created_at", "createdat"]),
        })
    }
}

/// Parse CSV expense data
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<ExpenseRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let mut records = Vec::new();

    for (idx, result) in rdr.records().enumerate() {
        let row = result?;
        // Header is line 1
        let line = idx + 2;
        let field = |i: usize| row.get(i).unwrap_or("");
        let optional = |i: Option<usize>| i.map(field).unwrap_or("");

        let with_line = |e: Error| match e {
            Error::InvalidInput(msg) => Error::InvalidInput(format!("line {}: {}", line, msg)),
            other => other,
        };

        let created_at = optional(columns.created_at);
        let expense = NewExpense {
            amount: parse_amount(field(columns.amount)).map_err(with_line)?,
            category: parse_category(optional(columns.category)).map_err(with_line)?,
            description: optional(columns.description).to_string(),
            date: parse_timestamp(field(columns.date)).map_err(with_line)?,
            created_at: if created_at.is_empty() {
                None
            } else {
                Some(parse_timestamp(created_at).map_err(with_line)?)
            },
        };

        records.push(into_record(expense).map_err(with_line)?);
    }

    debug!(count = records.len(), "Parsed CSV expenses");
    Ok(records)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawJsonExpense {
    amount: f64,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    description: Option<String>,
    date: String,
    #[serde(default, alias = "created_at")]
    created_at: Option<String>,
}

/// Parse a JSON array of expenses
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<ExpenseRecord>> {
    let raw: Vec<RawJsonExpense> = serde_json::from_reader(reader)?;
    let mut records = Vec::with_capacity(raw.len());

    for (idx, item) in raw.into_iter().enumerate() {
        let with_index = |e: Error| match e {
            Error::InvalidInput(msg) => Error::InvalidInput(format!("item {}: {}", idx, msg)),
            other => other,
        };

        let expense = NewExpense {
            amount: item.amount,
            category: parse_category(item.category.as_deref().unwrap_or(""))
                .map_err(with_index)?,
            description: item.description.unwrap_or_default(),
            date: parse_timestamp(&item.date).map_err(with_index)?,
            created_at: match item.created_at.as_deref() {
                Some(s) if !s.trim().is_empty() => Some(parse_timestamp(s).map_err(with_index)?),
                _ => None,
            },
        };
        records.push(into_record(expense).map_err(with_index)?);
    }

    debug!(count = records.len(), "Parsed JSON expenses");
    Ok(records)
}

/// Load expenses from a file, choosing the format by extension (`.json` or CSV)
pub fn load_file(path: &Path) -> Result<Vec<ExpenseRecord>> {
    let file = File::open(path)?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json(file)
    } else {
        parse_csv(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timestamp_formats() {
        let midnight = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-10").unwrap(), midnight);
        assert_eq!(
            parse_timestamp("2024-03-10T05:30:00+05:30").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_timestamp("2024-03-10 14:15:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 10, 14, 15, 0).unwrap()
        );
        assert!(matches!(
            parse_timestamp("10/03/2024"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_timestamp_without_offset() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 10, 10, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-10T10:00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-03-10T10:00:00.000").unwrap(), expected);

        let csv = "date,description,amount,category\n2024-03-10T10:00:00,Coffee,4.5,\n";
        let records = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(records[0].date, expected);
        assert_eq!(records[0].created_at, expected);
    }

    #[test]
    fn test_parse_csv_with_auto_categorization() {
        let csv = "\
date,description,amount,category
2024-03-10,Lunch at cafe,12.50,
2024-03-11,Uber to office,8,transport
2024-03-12,Mystery charge,99.99,
";
        let records = parse_csv(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].category, Category::Food);
        assert_eq!(records[0].amount, 12.5);
        assert_eq!(records[1].category, Category::Transport);
        assert_eq!(records[2].category, Category::Other);
        assert_eq!(records[0].created_at, records[0].date);
    }

    #[test]
    fn test_parse_csv_column_order_and_created_at() {
        let csv = "\
Amount,Category,Date,Created_At,Description
20,Entertainment,2024-03-10,2024-03-10T09:00:00Z,Concert
";
        let records = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(records[0].category, Category::Entertainment);
        assert_eq!(
            records[0].created_at,
            Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_csv_rejects_bad_rows() {
        let negative = "date,description,amount,category\n2024-03-10,Refund,-5,\n";
        let err = parse_csv(negative.as_bytes()).unwrap_err();
        assert!(matches!(&err, Error::InvalidInput(msg) if msg.starts_with("line 2")));

        let bad_category = "date,description,amount,category\n2024-03-10,X,5,groceries\n";
        assert!(matches!(
            parse_csv(bad_category.as_bytes()),
            Err(Error::InvalidInput(_))
        ));

        let bad_amount = "date,description,amount\n2024-03-10,X,abc\n";
        assert!(matches!(
            parse_csv(bad_amount.as_bytes()),
            Err(Error::InvalidInput(_))
        ));

        let missing_column = "description,amount\nX,5\n";
        assert!(matches!(
            parse_csv(missing_column.as_bytes()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_json() {
        let json = r#"[
            {"amount": 300, "description": "Hotel in Goa", "date": "2024-03-10"},
            {"amount": 15.5, "category": "activities", "description": "", "date": "2024-03-11T10:00:00Z", "createdAt": "2024-03-11T10:05:00Z"}
        ]"#;
        let records = parse_json(json.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, Category::Accommodation);
        assert_eq!(records[1].category, Category::Activities);
        assert_eq!(
            records[1].created_at,
            Utc.with_ymd_and_hms(2024, 3, 11, 10, 5, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_json_rejects_non_finite_or_negative() {
        let json = r#"[{"amount": -1, "date": "2024-03-10"}]"#;
        let err = parse_json(json.as_bytes()).unwrap_err();
        assert!(matches!(&err, Error::InvalidInput(msg) if msg.starts_with("item 0")));

        assert!(matches!(
            parse_json(r#"{"amount": 1}"#.as_bytes()),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_into_record_rejects_nan() {
        let expense = NewExpense {
            amount: f64::NAN,
            category: None,
            description: String::new(),
            date: Utc::now(),
            created_at: None,
        };
        assert!(matches!(into_record(expense), Err(Error::InvalidInput(_))));
    }
}
