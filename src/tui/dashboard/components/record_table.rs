//! Record table component
//!
//! Renders the current page of the active resource. Column widths are
//! shared out evenly; cells are clipped to fit.

use iocraft::prelude::*;

use crate::tui::components::{EmptyState, EmptyStateKind};
use crate::tui::dashboard::model::RowViewModel;
use crate::tui::theme::theme;

/// Props for the RecordTable component
#[derive(Default, Props)]
pub struct RecordTableProps {
    pub columns: Vec<&'static str>,
    pub rows: Vec<RowViewModel>,
    /// Shown instead of the rows when set
    pub empty_state: Option<EmptyStateKind>,
    pub empty_detail: Option<String>,
    /// Index of the status column, colored by value
    pub status_column: Option<usize>,
}

/// Table of the records on the current page
#[component]
pub fn RecordTable(props: &RecordTableProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let width = if props.columns.is_empty() {
        100
    } else {
        (100 / props.columns.len()).max(1) as u32
    };

    let body = match props.empty_state {
        Some(kind) => element! {
            EmptyState(kind, detail: props.empty_detail.clone())
        }
        .into_any(),
        None => element! {
            View(width: 100pct, flex_direction: FlexDirection::Column) {
                #(props.rows.iter().map(|row| {
                    let background = if row.is_highlighted { Some(theme.highlight) } else { None };
                    element! {
                        View(height: 1, width: 100pct, background_color: background) {
                            Text(
                                content: if row.is_highlighted { ">" } else { " " },
                                color: theme.text,
                            )
                            #(row.cells.iter().enumerate().map(|(i, cell)| {
                                let color = if row.is_highlighted {
                                    Color::White
                                } else if props.status_column == Some(i) {
                                    theme.status_color(cell)
                                } else {
                                    theme.text
                                };
                                let content = if row.is_updating && props.status_column == Some(i) {
                                    format!("{cell}...")
                                } else {
                                    cell.clone()
                                };
                                element! {
                                    View(width: Size::Percent(width as f32), padding_left: 1, overflow: Overflow::Hidden) {
                                        Text(content, color)
                                    }
                                }
                            }))
                        }
                    }
                }))
            }
        }
        .into_any(),
    };

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border_focused,
        ) {
            View(
                height: 1,
                width: 100pct,
                border_edges: Edges::Bottom,
                border_style: BorderStyle::Single,
                border_color: theme.border,
            ) {
                Text(content: " ")
                #(props.columns.iter().map(|label| element! {
                    View(width: Size::Percent(width as f32), padding_left: 1, overflow: Overflow::Hidden) {
                        Text(content: *label, weight: Weight::Bold, color: theme.text)
                    }
                }))
            }
            #(Some(body))
        }
    }
}
