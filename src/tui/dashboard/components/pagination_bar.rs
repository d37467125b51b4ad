//! Pagination bar component

use iocraft::prelude::*;

use crate::tui::dashboard::model::PaginationViewModel;
use crate::tui::theme::theme;

/// Props for the PaginationBar component
#[derive(Default, Props)]
pub struct PaginationBarProps {
    pub pagination: Option<PaginationViewModel>,
}

/// `< Previous   Page X of Y   Next >` with unavailable directions dimmed
#[component]
pub fn PaginationBar(props: &PaginationBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(pagination) = props.pagination.clone() else {
        return element! { View() };
    };
    let enabled = |on: bool| if on { theme.text } else { theme.text_dimmed };

    element! {
        View(
            width: 100pct,
            height: 1,
            padding_left: 1,
            padding_right: 1,
            justify_content: JustifyContent::Center,
            column_gap: 3,
        ) {
            Text(content: "< Previous", color: enabled(pagination.has_previous))
            Text(content: pagination.label, weight: Weight::Bold, color: theme.text)
            Text(content: "Next >", color: enabled(pagination.has_next))
            Text(
                content: format!("({} records)", pagination.record_count),
                color: theme.text_dimmed,
            )
        }
    }
}
