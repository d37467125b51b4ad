//! Builders for test records and list payloads.

use gavel::{ListPayload, Record};
use serde_json::{Map, Value, json};

/// Builder for a record with an `_id` and arbitrary fields
pub struct RecordBuilder {
    fields: Map<String, Value>,
}

impl RecordBuilder {
    pub fn new(id: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("_id".to_string(), Value::String(id.to_string()));
        Self { fields }
    }

    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn status(self, status: &str) -> Self {
        self.field("status", status)
    }

    pub fn build(self) -> Record {
        Record::from_map(self.fields).expect("test record has an id")
    }
}

/// A withdrawal request as the transactions endpoint returns it
pub fn withdrawal(i: usize, status: &str) -> Record {
    RecordBuilder::new(&format!("w{i}"))
        .field("name", format!("User {i}"))
        .field("userEmail", format!("user{i}@example.com"))
        .field("amount", json!(250.5 * i as f64))
        .field("accountNumber", "12345678901234")
        .field("bankName", "First Bank")
        .field("type", "withdrawal")
        .field("date", "2024-03-01T10:00:00Z")
        .status(status)
        .build()
}

/// `n` pending withdrawals `w1..wn`
pub fn withdrawals(n: usize) -> Vec<Record> {
    (1..=n).map(|i| withdrawal(i, "pending")).collect()
}

/// A contact message
pub fn contact(i: usize) -> Record {
    RecordBuilder::new(&format!("c{i}"))
        .field("name", format!("Sender {i}"))
        .field("email", format!("sender{i}@example.com"))
        .field("subject", "Question")
        .field("message", "When does the auction close?")
        .field("createdAt", "2024-03-01T10:00:00Z")
        .build()
}

pub fn payload(items: Vec<Record>) -> ListPayload {
    ListPayload {
        items,
        ..Default::default()
    }
}

pub fn server_page(items: Vec<Record>, total_pages: u32) -> ListPayload {
    ListPayload {
        items,
        total_pages: Some(total_pages),
        dropped: 0,
    }
}

/// The raw JSON of a list of records, for envelope tests
pub fn raw(records: &[Record]) -> Vec<Value> {
    records
        .iter()
        .map(|r| serde_json::to_value(r).unwrap())
        .collect()
}
