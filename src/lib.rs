pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod listing;
pub mod logging;
pub mod profile;
pub mod session;
pub mod tui;

pub use api::{
    ApiClient, ApiError, ListPayload, ListQuery, Record, Resource, ResourceClient, ResourceSpec,
};
pub use config::Config;
pub use error::{GavelError, Result};
pub use listing::{ListController, ListState, LoadOutcome};
pub use profile::ProfileUpdate;
pub use session::{Role, Session};
