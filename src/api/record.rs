//! Opaque records as returned by the platform API.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A JSON object fetched from the API together with its identifier.
///
/// The fields are kept exactly as the server sent them; views pick the
/// fields they need through the resource's column definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: String,
    fields: Map<String, Value>,
}

impl Record {
    /// Build a record from a JSON value.
    ///
    /// Returns `None` when the value is not an object or carries neither an
    /// `_id` nor an `id` field usable as an identifier.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Self::from_map(fields),
            _ => None,
        }
    }

    pub fn from_map(fields: Map<String, Value>) -> Option<Self> {
        let id = identifier(&fields, "_id").or_else(|| identifier(&fields, "id"))?;
        Some(Self { id, fields })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// First non-null value among `names`.
    pub fn first_of(&self, names: &[&str]) -> Option<&Value> {
        names.iter().find_map(|name| self.get(name))
    }

    pub fn status(&self) -> Option<&str> {
        self.get("status").and_then(Value::as_str)
    }

    pub fn set_status(&mut self, status: &str) {
        self.fields
            .insert("status".to_string(), Value::String(status.to_string()));
    }

    /// Whether a notification has been read. A missing flag counts as unread.
    pub fn is_read(&self) -> bool {
        self.get("read").and_then(Value::as_bool) == Some(true)
    }

    pub fn mark_read(&mut self) {
        self.fields.insert("read".to_string(), Value::Bool(true));
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

fn identifier(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
