//! Plain-text rendering of list pages and detail views.

use tabled::Table;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::api::{Record, ResourceSpec};
use crate::listing::ListState;

use super::formatters::format_field;

pub const NO_RECORDS: &str = "No records found";

/// `Page 2 of 3`
pub fn pagination_label(page: u32, page_count: u32) -> String {
    format!("Page {page} of {page_count}")
}

/// Formatted cells of one table row.
pub fn row_cells(record: &Record, spec: &ResourceSpec) -> Vec<String> {
    spec.columns
        .iter()
        .map(|column| format_field(record, column))
        .collect()
}

/// Whether the resource's own columns already show the identifier.
fn shows_id(spec: &ResourceSpec) -> bool {
    spec.columns
        .iter()
        .any(|c| c.sources.iter().any(|s| *s == "_id" || *s == "id"))
}

/// Table of the given records, with an ID column first unless the
/// resource lays one out itself.
///
/// With no records the table holds a single row carrying `empty_message`.
pub fn build_table(spec: &ResourceSpec, records: &[&Record], empty_message: &str) -> Table {
    let mut builder = Builder::default();
    let id_column = !shows_id(spec);

    let mut header: Vec<String> = Vec::new();
    if id_column {
        header.push("ID".to_string());
    }
    header.extend(spec.columns.iter().map(|c| c.label.to_string()));
    let width = header.len();
    builder.push_record(header);

    if records.is_empty() {
        let mut row = vec![empty_message.to_string()];
        row.resize(width, String::new());
        builder.push_record(row);
    }
    for record in records {
        let mut row = Vec::with_capacity(width);
        if id_column {
            row.push(record.id().to_string());
        }
        row.extend(row_cells(record, spec));
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table
}

/// The current page of a list view followed by its pagination line.
pub fn render_page(state: &ListState) -> String {
    let items = state.page_items();
    let empty_message = state.error().unwrap_or(NO_RECORDS);
    let table = build_table(state.spec(), &items, empty_message);
    format!(
        "{table}\n{}",
        pagination_label(state.page(), state.page_count())
    )
}

/// Label/value pairs of the detail view.
pub fn detail_rows(record: &Record, spec: &ResourceSpec) -> Vec<(&'static str, String)> {
    spec.detail
        .iter()
        .map(|column| (column.label, format_field(record, column)))
        .collect()
}
