//! One-line notice shown under the dashboard table.

use iocraft::prelude::*;

/// Outcome of the last dashboard action worth telling the operator about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Filter changes, copies
    Info,
    /// Rejected keys, failed read receipts
    Warning,
    /// Failed writes
    Error,
    /// Applied status changes
    Success,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self { message, level }
    }

    pub fn color(&self) -> Color {
        match self.level {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Warning => Color::Yellow,
            ToastLevel::Error => Color::Red,
            ToastLevel::Success => Color::Green,
        }
    }
}

pub fn render_toast(toast: &Option<Toast>) -> Option<AnyElement<'static>> {
    toast.as_ref().map(|t| {
        element! {
            View(
                width: 100pct,
                height: 3,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: t.color(),
            ) {
                Text(content: t.message.clone(), color: t.color())
            }
        }
        .into_any()
    })
}
