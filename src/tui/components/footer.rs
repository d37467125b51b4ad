//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "C-c", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Next Page")
    pub action: String,
}

impl Shortcut {
    /// Create a new shortcut
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the record table
pub fn list_shortcuts(supports_status: bool) -> Vec<Shortcut> {
    let mut shortcuts = vec![
        Shortcut::new("j/k", "Navigate"),
        Shortcut::new("h/l", "Page"),
        Shortcut::new("Tab", "Resource"),
        Shortcut::new("Enter", "Details"),
        Shortcut::new("/", "Search"),
    ];
    if supports_status {
        shortcuts.push(Shortcut::new("f", "Filter Status"));
        shortcuts.push(Shortcut::new("s", "Set Status"));
    }
    shortcuts.extend([
        Shortcut::new("y", "Copy ID"),
        Shortcut::new("r", "Refresh"),
        Shortcut::new("q", "Quit"),
    ]);
    shortcuts
}

/// Shortcuts for the detail modal
pub fn detail_shortcuts(supports_status: bool) -> Vec<Shortcut> {
    let mut shortcuts = Vec::new();
    if supports_status {
        shortcuts.push(Shortcut::new("s", "Set Status"));
    }
    shortcuts.push(Shortcut::new("y", "Copy ID"));
    shortcuts.push(Shortcut::new("Esc", "Close"));
    shortcuts
}

/// Shortcuts for search mode
pub fn search_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Enter", "Apply Search"),
        Shortcut::new("Esc", "Clear & Exit"),
        Shortcut::new("C-q", "Quit"),
    ]
}

/// Shortcuts for the status picker
pub fn status_picker_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("j/k", "Choose"),
        Shortcut::new("Enter", "Confirm"),
        Shortcut::new("Esc", "Cancel"),
    ]
}
