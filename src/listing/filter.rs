//! Status and free-text filtering of list items.
//!
//! Search is a fuzzy match across the raw values of the resource's table
//! columns. Matches keep server order.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde_json::Value;

use crate::api::{Record, ResourceSpec};

/// Text the search query is matched against.
pub fn search_text(record: &Record, spec: &ResourceSpec) -> String {
    let mut parts = vec![record.id().to_string()];
    for column in spec.columns {
        if let Some(value) = record.first_of(column.sources) {
            match value {
                Value::String(s) => parts.push(s.clone()),
                Value::Number(n) => parts.push(n.to_string()),
                _ => {}
            }
        }
    }
    parts.join(" ")
}

/// Whether `record` has the given status, ignoring case.
pub fn has_status(record: &Record, status: &str) -> bool {
    record
        .status()
        .is_some_and(|s| unicase::eq(s, status))
}

/// Apply an optional status filter and an optional search query.
pub fn filter_records<'a>(
    items: &'a [Record],
    spec: &ResourceSpec,
    status: Option<&str>,
    query: Option<&str>,
) -> Vec<&'a Record> {
    let query = query.map(str::trim).filter(|q| !q.is_empty());
    let matcher = query.map(|_| SkimMatcherV2::default().smart_case());

    items
        .iter()
        .filter(|record| status.is_none_or(|s| has_status(record, s)))
        .filter(|record| match (&matcher, query) {
            (Some(matcher), Some(query)) => matcher
                .fuzzy_match(&search_text(record, spec), query)
                .is_some(),
            _ => true,
        })
        .collect()
}
