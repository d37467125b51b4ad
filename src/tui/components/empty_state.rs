//! Empty state component
//!
//! Fills the table area when there is nothing to list.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// The resource has no records
    #[default]
    NoRecords,
    /// No records match the search or status filter
    NoSearchResults,
    /// The last fetch failed
    FetchError,
    /// First fetch still in flight
    Loading,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
    /// Search query (NoSearchResults) or error text (FetchError)
    pub detail: Option<String>,
}

/// Empty state display with helpful message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, hint) = match props.kind {
        EmptyStateKind::NoRecords => ("i", "No records found", "Press 'r' to refresh."),
        EmptyStateKind::NoSearchResults => (
            "?",
            "No Results",
            "Try a different search term, or press Esc to clear.",
        ),
        EmptyStateKind::FetchError => ("!", "Request Failed", "Press 'r' to try again."),
        EmptyStateKind::Loading => ("~", "Loading", ""),
    };
    let accent = if props.kind == EmptyStateKind::FetchError {
        theme.error
    } else {
        theme.border
    };
    let detail = props.detail.clone().map(|detail| match props.kind {
        EmptyStateKind::NoSearchResults => format!("Search: \"{detail}\""),
        _ => detail,
    });

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 1,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: accent,
                margin_bottom: 1,
            ) {
                Text(content: icon, color: accent, weight: Weight::Bold)
            }

            Text(content: title, color: theme.text, weight: Weight::Bold)

            #(detail.map(|detail| element! {
                View(margin_top: 1, max_width: 70) {
                    Text(
                        content: detail,
                        color: if props.kind == EmptyStateKind::FetchError {
                            theme.error
                        } else {
                            theme.search_match
                        },
                    )
                }
            }))

            #(if hint.is_empty() {
                None
            } else {
                Some(element! {
                    View(margin_top: 1) {
                        Text(content: hint, color: theme.text_dimmed)
                    }
                })
            })
        }
    }
}
