//! Response envelope normalization.
//!
//! The platform API wraps collections inconsistently: some endpoints
//! return a bare array, others `{data: [...]}`, `{orders: [...],
//! totalPages}`, `{success, data}` and so on. Everything is normalized
//! here so that the rest of the crate only ever sees a [`ListPayload`].

use serde_json::{Map, Value};

use super::error::ApiError;
use super::record::Record;
use super::resource::ResourceSpec;

/// Keys under which any endpoint has been seen to return its array.
const KNOWN_ARRAY_KEYS: &[&str] = &[
    "data",
    "orders",
    "sellers",
    "products",
    "transactions",
    "subscriptions",
    "notifications",
    "feedbacks",
    "contacts",
    "reports",
    "requests",
    "items",
];

/// Keys under which a single updated record may be returned.
const KNOWN_RECORD_KEYS: &[&str] = &["data", "user", "transaction", "report", "request"];

/// A normalized list response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPayload {
    pub items: Vec<Record>,
    /// Present when the server paginates.
    pub total_pages: Option<u32>,
    /// Elements dropped because they were not objects or had no id.
    pub dropped: usize,
}

/// Normalize a list response body for `spec`.
pub fn normalize_list(body: Value, spec: &ResourceSpec) -> Result<ListPayload, ApiError> {
    match body {
        Value::Array(elements) => Ok(collect_records(elements, spec, None)),
        Value::Object(mut map) => {
            if map.get("success").and_then(Value::as_bool) == Some(false) {
                return Err(ApiError::rejected(envelope_message(&map)));
            }

            let total_pages = map
                .get("totalPages")
                .and_then(Value::as_u64)
                .filter(|n| *n > 0)
                .map(|n| u32::try_from(n).unwrap_or(u32::MAX));

            let key = spec
                .envelope_key
                .into_iter()
                .chain(KNOWN_ARRAY_KEYS.iter().copied())
                .find(|key| map.get(*key).is_some_and(Value::is_array))
                .ok_or_else(|| {
                    ApiError::Malformed(format!(
                        "expected an array or an object with a '{}' array",
                        spec.envelope_key.unwrap_or("data")
                    ))
                })?;

            match map.remove(key) {
                Some(Value::Array(elements)) => Ok(collect_records(elements, spec, total_pages)),
                _ => Err(ApiError::Malformed(format!("'{key}' is not an array"))),
            }
        }
        other => Err(ApiError::Malformed(format!(
            "expected a JSON array or object, got {}",
            kind_of(&other)
        ))),
    }
}

/// Extract the updated record from a write response, if it carries one.
///
/// A 2xx body with `success: false` is a rejected write, not a write that
/// returned nothing.
pub fn normalize_record(body: Value) -> Result<Option<Record>, ApiError> {
    let Value::Object(mut map) = body else {
        return Ok(None);
    };
    if map.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ApiError::rejected(envelope_message(&map)));
    }
    for key in KNOWN_RECORD_KEYS {
        if let Some(Value::Object(inner)) = map.remove(*key) {
            return Ok(Record::from_map(inner));
        }
    }
    Ok(Record::from_map(map))
}

/// The `message` or `error` field of an envelope.
pub fn envelope_message(map: &Map<String, Value>) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn collect_records(
    elements: Vec<Value>,
    spec: &ResourceSpec,
    total_pages: Option<u32>,
) -> ListPayload {
    let total = elements.len();
    let items: Vec<Record> = elements.into_iter().filter_map(Record::from_value).collect();
    let dropped = total - items.len();
    if dropped > 0 {
        tracing::warn!(
            resource = spec.name,
            dropped,
            "dropped list elements without an identifier"
        );
    }
    ListPayload {
        items,
        total_pages,
        dropped,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
