//! TUI module for the interactive dashboard

pub mod components;
pub mod dashboard;
pub mod theme;

pub use dashboard::{Dashboard, DashboardProps};
pub use theme::Theme;
