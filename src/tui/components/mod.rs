//! Shared TUI components

pub mod empty_state;
pub mod footer;
pub mod modal_overlay;
pub mod toast;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, detail_shortcuts, list_shortcuts, search_shortcuts,
    status_picker_shortcuts,
};
pub use modal_overlay::{MODAL_BACKDROP, ModalOverlay, ModalOverlayProps};
pub use toast::{Toast, ToastLevel, render_toast};
