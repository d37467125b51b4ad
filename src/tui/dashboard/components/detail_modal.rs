//! Detail modal component
//!
//! Label/value view of one record over the table.

use iocraft::prelude::*;

use crate::tui::components::ModalOverlay;
use crate::tui::dashboard::model::DetailViewModel;
use crate::tui::theme::theme;

/// Props for the DetailModal component
#[derive(Default, Props)]
pub struct DetailModalProps {
    pub detail: Option<DetailViewModel>,
}

/// Detail modal showing every detail field of the record
#[component]
pub fn DetailModal(props: &DetailModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(detail) = props.detail.clone() else {
        return element! { View() }.into_any();
    };
    let label_width = detail
        .fields
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0)
        + 2;

    element! {
        ModalOverlay(show_backdrop: true) {
            View(
                width: 80pct,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Double,
                border_color: theme.border_focused,
                background_color: Color::Black,
                padding_left: 1,
                padding_right: 1,
            ) {
                View(margin_bottom: 1) {
                    Text(content: detail.title, color: Color::Cyan, weight: Weight::Bold)
                    Text(content: format!(" {}", detail.id), color: theme.id_color)
                }
                #(detail.fields.iter().map(|(label, value)| {
                    let color = if *label == "Status" {
                        theme.status_color(value)
                    } else {
                        theme.text
                    };
                    element! {
                        View(width: 100pct) {
                            View(width: label_width as u32) {
                                Text(content: *label, color: theme.text_dimmed)
                            }
                            View(flex_grow: 1.0) {
                                Text(content: value.clone(), color)
                            }
                        }
                    }
                }))
                #(detail.supports_status.then(|| element! {
                    View(margin_top: 1) {
                        Text(
                            content: "Press 's' to change the status",
                            color: theme.text_dimmed,
                        )
                    }
                }))
            }
        }
    }
    .into_any()
}
