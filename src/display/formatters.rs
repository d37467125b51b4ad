//! Value formatters for record fields.

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use serde_json::Value;

use crate::api::{Column, FieldFormat, Record};

/// Format a monetary amount as dollars with two decimals.
///
/// ```
/// use gavel::display::format_currency;
///
/// assert_eq!(format_currency(1250.5), "$1250.50");
/// assert_eq!(format_currency(0.0), "$0.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Hide the middle of a bank account number.
///
/// Numbers of eight characters or fewer keep only their last four.
pub fn mask_account_number(account: &str) -> String {
    let chars: Vec<char> = account.trim().chars().collect();
    if chars.is_empty() {
        return "N/A".to_string();
    }
    let last: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    if chars.len() <= 8 {
        return format!("****{last}");
    }
    let first: String = chars[..4].iter().collect();
    format!("{first}****{last}")
}

/// First eight characters of an identifier followed by an ellipsis.
pub fn short_id(id: &str) -> String {
    if id.chars().count() <= 8 {
        return id.to_string();
    }
    let head: String = id.chars().take(8).collect();
    format!("{head}...")
}

/// Stars for a 0-5 rating.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Score of a feedback answer: excellent 5, good 4, bad 2, anything else 0.
pub fn rating_score(answer: &str) -> u8 {
    match answer.trim().to_lowercase().as_str() {
        "excellent" => 5,
        "good" => 4,
        "bad" => 2,
        _ => 0,
    }
}

/// Rounded average score of a set of feedback answers; 0 when empty.
pub fn overall_rating(answers: &[&str]) -> u8 {
    if answers.is_empty() {
        return 0;
    }
    let total: u32 = answers.iter().map(|a| u32::from(rating_score(a))).sum();
    (f64::from(total) / answers.len() as f64).round() as u8
}

/// Display label of a privacy request type. Unknown types pass through.
pub fn request_type_label(kind: &str) -> String {
    match kind {
        "access" => "Data Access".to_string(),
        "delete" => "Data Deletion".to_string(),
        "correct" => "Data Correction".to_string(),
        "optout" => "Opt Out".to_string(),
        "other" => "Other".to_string(),
        other => other.to_string(),
    }
}

/// `payment-deposit` -> `Payment Deposit`, `in_progress` -> `In Progress`.
pub fn title_label(value: &str) -> String {
    value
        .split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse an API timestamp: RFC 3339, a bare date, or epoch milliseconds.
pub fn parse_timestamp(value: &Value) -> Option<Timestamp> {
    match value {
        Value::String(s) => s.parse::<Timestamp>().ok().or_else(|| {
            s.parse::<Date>()
                .ok()
                .and_then(|d| d.to_zoned(TimeZone::UTC).ok())
                .map(|z| z.timestamp())
        }),
        Value::Number(n) => n
            .as_i64()
            .and_then(|ms| Timestamp::from_millisecond(ms).ok()),
        _ => None,
    }
}

pub fn format_date_in(ts: Timestamp, tz: TimeZone) -> String {
    ts.to_zoned(tz).strftime("%Y-%m-%d").to_string()
}

pub fn format_datetime_in(ts: Timestamp, tz: TimeZone) -> String {
    ts.to_zoned(tz).strftime("%Y-%m-%d %H:%M").to_string()
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(as_text).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}

fn format_value(value: &Value, format: FieldFormat) -> Option<String> {
    match format {
        FieldFormat::Text | FieldFormat::Status | FieldFormat::List => as_text(value),
        FieldFormat::Currency => as_number(value).map(format_currency),
        FieldFormat::Date => parse_timestamp(value)
            .map(|ts| format_date_in(ts, TimeZone::system()))
            .or_else(|| as_text(value)),
        FieldFormat::DateTime => parse_timestamp(value)
            .map(|ts| format_datetime_in(ts, TimeZone::system()))
            .or_else(|| as_text(value)),
        FieldFormat::AccountNumber => as_text(value).map(|s| mask_account_number(&s)),
        FieldFormat::ShortId => as_text(value).map(|s| short_id(&s)),
        FieldFormat::Stars => as_number(value).map(|n| {
            let rating = n.round().clamp(0.0, 5.0) as u8;
            format!("{} {rating}/5", stars(rating))
        }),
        FieldFormat::OverallRating => {
            let answers: Vec<&str> = value
                .as_array()?
                .iter()
                .filter_map(Value::as_str)
                .collect();
            if answers.is_empty() {
                return None;
            }
            let rating = overall_rating(&answers);
            Some(format!("{} {rating}/5", stars(rating)))
        }
        FieldFormat::RequestType => as_text(value).map(|s| request_type_label(&s)),
        FieldFormat::Label => as_text(value).map(|s| title_label(&s)),
        FieldFormat::YesNo => as_bool(value).map(|b| if b { "Yes" } else { "No" }.to_string()),
        FieldFormat::Verified => {
            as_bool(value).map(|b| if b { "Verified" } else { "Not verified" }.to_string())
        }
        FieldFormat::ReadState => {
            as_bool(value).map(|b| if b { "Read" } else { "Unread" }.to_string())
        }
    }
}

/// Render one column of a record, falling back to the column's default
/// text when no source field is present or it cannot be formatted.
pub fn format_field(record: &Record, column: &Column) -> String {
    record
        .first_of(column.sources)
        .and_then(|value| format_value(value, column.format))
        .unwrap_or_else(|| column.fallback.to_string())
}
