use owo_colors::OwoColorize;

pub mod formatters;
pub mod table;

pub use formatters::*;
pub use table::*;

/// Status badge colored by its meaning.
pub fn format_status_colored(status: &str) -> String {
    let badge = format!("[{status}]");
    match status.to_lowercase().as_str() {
        "pending" => badge.yellow().to_string(),
        "processing" | "in-progress" => badge.cyan().to_string(),
        "completed" | "resolved" | "active" => badge.green().to_string(),
        "rejected" | "cancelled" | "expired" => badge.red().to_string(),
        _ => badge.dimmed().to_string(),
    }
}
