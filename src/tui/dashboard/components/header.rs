//! Dashboard header component
//!
//! Displays the "gavel" title with the session and API the dashboard talks to.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the DashboardHeader component
#[derive(Default, Props)]
pub struct DashboardHeaderProps {
    /// Base URL of the API
    pub api_url: String,
    /// `email (role)` of the session, when known
    pub session: Option<String>,
    /// Whether a fetch is in flight on the active tab
    pub is_loading: bool,
}

/// Header row showing "gavel" with the API and session
#[component]
pub fn DashboardHeader(props: &DashboardHeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(
                content: "gavel",
                color: Color::Cyan,
                weight: Weight::Bold,
            )
            Text(
                content: format!(" {}", props.api_url),
                color: theme.text_dimmed,
            )
            #(props.is_loading.then(|| element! {
                Text(content: " loading...", color: theme.search_match)
            }))
            View(flex_grow: 1.0)
            #(props.session.clone().map(|session| element! {
                Text(content: session, color: theme.text_dimmed)
            }))
        }
    }
}
