mod config;
mod dashboard;
mod ls;
mod profile;
mod resources;
mod show;
mod status;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use dashboard::cmd_dashboard;
pub use ls::cmd_ls;
pub use profile::cmd_profile_update;
pub use resources::cmd_resources;
pub use show::{cmd_show, find_record};
pub use status::cmd_set_status;

use std::time::Duration;

use serde_json::Value;

use crate::api::ApiClient;
use crate::cli::{GlobalArgs, OutputOptions};
use crate::config::Config;
use crate::error::Result;
use crate::session::Session;

/// Everything a network command needs: client, session and list settings.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub client: ApiClient,
    pub session: Session,
    pub timeout: Duration,
    pub page_size: u32,
}

impl AppContext {
    /// Build from the config file, environment and command-line overrides.
    pub fn load(global: &GlobalArgs) -> Result<Self> {
        let config = Config::load()?;
        Self::from_config(&config, global)
    }

    pub fn from_config(config: &Config, global: &GlobalArgs) -> Result<Self> {
        let timeout = global
            .timeout
            .map(Duration::from_secs)
            .unwrap_or_else(|| config.timeout());
        let base_url = global.api_url.clone().unwrap_or_else(|| config.base_url());
        let client = ApiClient::new(&base_url, timeout)?;
        tracing::debug!(base_url = client.base_url(), ?timeout, "api client ready");

        Ok(Self {
            client,
            session: config.session(),
            timeout,
            page_size: config.page_size(),
        })
    }
}

/// Command result rendered either as JSON or as human-readable text.
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output: OutputOptions) -> Result<()> {
        match (output.json, self.text) {
            (false, Some(text)) => {
                println!("{text}");
                Ok(())
            }
            _ => print_json(&self.json),
        }
    }
}

/// Pretty-print a JSON value to stdout
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
