//! Configuration commands for managing gavel settings.
//!
//! - `config set`: Set a configuration value
//! - `config get`: Print one configuration value
//! - `config show`: Display current configuration

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::{API_URL_ENV, Config, TOKEN_ENV, is_sensitive_key, mask_sensitive_value};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path()?;

    let token_configured = config.token().is_some();
    let masked_token = config.token().map(|t| mask_sensitive_value(&t));
    let base_url = config.base_url();
    let url_from_env = base_url != config.api.base_url;

    let json_output = json!({
        "api": {
            "base_url": base_url,
            "timeout_secs": config.api.timeout_secs,
        },
        "list": {
            "page_size": config.list.page_size,
        },
        "session": {
            "token_configured": token_configured,
            "email": config.session.email,
            "role": config.session.role.to_string(),
        },
        "config_file": path.to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    text_output.push_str(&format!("{}:\n", "api".cyan()));
    text_output.push_str(&format!("  base_url: {base_url}"));
    if url_from_env {
        text_output.push_str(&format!(" {}", format!("(from {API_URL_ENV})").dimmed()));
    }
    text_output.push('\n');
    text_output.push_str(&format!("  timeout_secs: {}\n\n", config.api.timeout_secs));

    text_output.push_str(&format!("{}:\n", "list".cyan()));
    text_output.push_str(&format!("  page_size: {}\n\n", config.list.page_size));

    // Never show the raw token
    text_output.push_str(&format!("{}:\n", "session".cyan()));
    let token_status = match masked_token {
        Some(masked) => masked.green().to_string(),
        None => "not configured".dimmed().to_string(),
    };
    text_output.push_str(&format!("  token: {token_status}\n"));
    let email = match &config.session.email {
        Some(email) => email.clone(),
        None => "not configured".dimmed().to_string(),
    };
    text_output.push_str(&format!("  email: {email}\n"));
    text_output.push_str(&format!("  role: {}\n\n", config.session.role));

    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", path.display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output: OutputOptions) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let shown = if is_sensitive_key(key) {
        mask_sensitive_value(value)
    } else {
        config.get(key)?.unwrap_or_default()
    };

    let json_output = json!({
        "action": "config_set",
        "key": key,
        "value": shown,
        "success": true,
    });
    let mut text = format!("Set {} to {}", key.cyan(), shown);
    if key == "session.token" && std::env::var(TOKEN_ENV).is_ok_and(|v| !v.is_empty()) {
        text.push_str(&format!(
            "\n{}",
            format!("Note: {TOKEN_ENV} is set and takes precedence").yellow()
        ));
    }

    CommandOutput::new(json_output).with_text(text).print(output)
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    let (json_output, text_output) = match value {
        Some(value) if is_sensitive_key(key) => {
            let masked = mask_sensitive_value(&value);
            let json = json!({
                "key": key,
                "value": masked,
                "configured": true,
                "masked": true,
            });
            let text = format!("{masked} (masked - showing first 2 and last 2 characters)");
            (json, text)
        }
        Some(value) => {
            let json = json!({
                "key": key,
                "value": value,
                "configured": true,
            });
            (json, value)
        }
        None => {
            let json = json!({
                "key": key,
                "value": null,
                "configured": false,
            });
            (json, "not configured".dimmed().to_string())
        }
    };

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}
