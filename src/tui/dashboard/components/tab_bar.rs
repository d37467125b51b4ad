//! Resource tab bar component
//!
//! One tab per resource the session may see, with the active search and
//! status filter on the right.

use iocraft::prelude::*;

use crate::tui::dashboard::model::TabViewModel;
use crate::tui::theme::theme;

/// Props for the TabBar component
#[derive(Default, Props)]
pub struct TabBarProps {
    pub tabs: Vec<TabViewModel>,
    /// Search query to display
    pub search_query: Option<String>,
    /// Whether the search box has focus
    pub search_focused: bool,
    /// Active status filter
    pub status_filter: Option<String>,
}

/// Tab bar showing the resources with search and filter display
#[component]
pub fn TabBar(props: &TabBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let query = props.search_query.clone().unwrap_or_default();
    let show_search = props.search_focused || !query.is_empty();
    let cursor = if props.search_focused { "_" } else { "" };

    element! {
        View(
            width: 100pct,
            padding_left: 1,
            flex_wrap: FlexWrap::Wrap,
            border_edges: Edges::Bottom,
            border_style: BorderStyle::Single,
            border_color: theme.border,
        ) {
            #(props.tabs.iter().enumerate().map(|(i, tab)| {
                // Number keys select the first nine tabs
                let label = if i < 9 {
                    format!("{}:{} ", i + 1, tab.label)
                } else {
                    format!("{} ", tab.label)
                };
                element! {
                    Text(
                        content: label,
                        color: if tab.is_active { Color::Cyan } else { theme.text_dimmed },
                        weight: if tab.is_active { Weight::Bold } else { Weight::Normal },
                    )
                }
            }))
            View(flex_grow: 1.0)
            #(props.status_filter.clone().map(|status| element! {
                Text(
                    content: format!(" Status: {status}"),
                    color: theme.status_color(&status),
                )
            }))
            #(show_search.then(|| element! {
                Text(
                    content: format!(" Search: {query}{cursor}"),
                    color: theme.search_match,
                )
            }))
        }
    }
}
