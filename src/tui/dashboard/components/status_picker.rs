//! Status picker modal component

use iocraft::prelude::*;

use crate::tui::components::ModalOverlay;
use crate::tui::dashboard::model::PickerViewModel;
use crate::tui::theme::theme;

/// Props for the StatusPickerModal component
#[derive(Default, Props)]
pub struct StatusPickerModalProps {
    pub picker: Option<PickerViewModel>,
}

/// List of the resource's statuses with the current one marked
#[component]
pub fn StatusPickerModal(props: &StatusPickerModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(picker) = props.picker.clone() else {
        return element! { View() }.into_any();
    };

    element! {
        ModalOverlay() {
            View(
                width: 40,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: Color::Yellow,
                background_color: Color::Black,
                padding_left: 1,
                padding_right: 1,
            ) {
                Text(content: "Set status", color: Color::Yellow, weight: Weight::Bold)
                Text(content: picker.record_id.clone(), color: theme.id_color)
                View(height: 1)
                #(picker.options.iter().enumerate().map(|(i, status)| {
                    let is_current = picker
                        .current
                        .as_deref()
                        .is_some_and(|current| unicase::eq(current, *status));
                    let highlighted = i == picker.index;
                    element! {
                        View(
                            width: 100pct,
                            background_color: if highlighted { Some(theme.highlight) } else { None },
                        ) {
                            Text(
                                content: format!(
                                    "{} {}{}",
                                    if highlighted { ">" } else { " " },
                                    status,
                                    if is_current { " (current)" } else { "" },
                                ),
                                color: if highlighted { Color::White } else { theme.status_color(status) },
                            )
                        }
                    }
                }))
            }
        }
    }
    .into_any()
}
