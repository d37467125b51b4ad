//! Tracing subscriber setup.
//!
//! The filter comes from `GAVEL_LOG` (default `warn`). Line-oriented
//! commands log to stderr; the full-screen dashboard only logs, to a file,
//! when `GAVEL_LOG` is set.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GAVEL_LOG";

const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the dashboard log file.
pub fn log_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "gavel", "gavel")
        .map(|dirs| dirs.cache_dir().join("gavel.log"))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(target: LogTarget) {
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File => {
            if !env::var(LOG_ENV).is_ok_and(|v| !v.is_empty()) {
                return;
            }
            let Some(path) = log_path() else {
                return;
            };
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).ok();
            }
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => {
                    let _ = tracing_subscriber::fmt()
                        .with_env_filter(env_filter())
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .try_init();
                }
                Err(e) => eprintln!("Failed to open log file {}: {}", path.display(), e),
            }
        }
    }
}
