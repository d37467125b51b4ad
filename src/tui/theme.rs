//! Theme system for TUI colors and styles
//!
//! Status colors match the badges `display::format_status_colored` prints.

use iocraft::prelude::Color;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors (consistent with CLI badges)
    pub status_pending: Color,
    pub status_in_progress: Color,
    pub status_done: Color,
    pub status_rejected: Color,
    pub status_other: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub search_match: Color,
    pub id_color: Color,
    pub error: Color,
}

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_pending: Color::Yellow,
            status_in_progress: Color::Cyan,
            status_done: Color::Green,
            status_rejected: Color::Red,
            status_other: GREY,

            border: GREY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            search_match: Color::Yellow,
            id_color: Color::Cyan,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Get the color for a record status
    pub fn status_color(&self, status: &str) -> Color {
        match status.to_lowercase().as_str() {
            "pending" => self.status_pending,
            "processing" | "in-progress" => self.status_in_progress,
            "completed" | "resolved" | "active" => self.status_done,
            "rejected" | "cancelled" | "expired" => self.status_rejected,
            _ => self.status_other,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
