//! Top-level application configuration.
//!
//! Configuration is stored in `<config dir>/gavel/config.yaml` (or the path
//! in `GAVEL_CONFIG`) and includes:
//! - API base URL and request timeout
//! - Page size of list views
//! - Session token, email and role

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GavelError, Result};
use crate::listing::DEFAULT_PAGE_SIZE;
use crate::session::{Role, Session};

pub const CONFIG_ENV: &str = "GAVEL_CONFIG";
pub const API_URL_ENV: &str = "GAVEL_API_URL";
pub const TOKEN_ENV: &str = "GAVEL_TOKEN";

/// Keys accepted by `gavel config set`.
pub const CONFIG_KEYS: &[&str] = &[
    "api.base_url",
    "api.timeout_secs",
    "list.page_size",
    "session.token",
    "session.email",
    "session.role",
];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub list: ListConfig,

    #[serde(default, skip_serializing_if = "SessionConfig::is_empty")]
    pub session: SessionConfig,
}

/// API endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the platform backend (default: https://localhost:5000)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Stored session
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default)]
    pub role: Role,
}

impl SessionConfig {
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.email.is_none() && self.role == Role::default()
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("email", &self.email)
            .field("role", &self.role)
            .finish()
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }
        let proj_dirs = directories::ProjectDirs::from("com", "gavel", "gavel").ok_or_else(|| {
            GavelError::Config(format!(
                "cannot determine config directory; set {CONFIG_ENV} to a file path"
            ))
        })?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            GavelError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                GavelError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content).map_err(|e| {
            GavelError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // The file may hold a session token; owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(path, permissions).map_err(|e| {
                GavelError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to set permissions on config at {}: {}",
                        path.display(),
                        e
                    ),
                ))
            })?;
        }

        Ok(())
    }

    /// Base URL from environment variable or config
    pub fn base_url(&self) -> String {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            return url;
        }
        self.api.base_url.clone()
    }

    /// Session token from environment variable or config
    pub fn token(&self) -> Option<String> {
        if let Ok(token) = env::var(TOKEN_ENV)
            && !token.is_empty()
        {
            return Some(token);
        }
        self.session.token.clone()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs.max(1))
    }

    pub fn page_size(&self) -> u32 {
        self.list.page_size.max(1)
    }

    pub fn session(&self) -> Session {
        Session::new(self.token(), self.session.email.clone(), self.session.role)
    }

    /// Current value of a key. Secrets are returned unmasked.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = match key {
            "api.base_url" => Some(self.api.base_url.clone()),
            "api.timeout_secs" => Some(self.api.timeout_secs.to_string()),
            "list.page_size" => Some(self.list.page_size.to_string()),
            "session.token" => self.session.token.clone(),
            "session.email" => self.session.email.clone(),
            "session.role" => Some(self.session.role.to_string()),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Set a key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "api.base_url" => {
                url::Url::parse(value).map_err(|e| {
                    GavelError::Config(format!("invalid value '{value}' for api.base_url: {e}"))
                })?;
                self.api.base_url = value.trim_end_matches('/').to_string();
            }
            "api.timeout_secs" => self.api.timeout_secs = parse_positive(key, value)?,
            "list.page_size" => {
                self.list.page_size = u32::try_from(parse_positive(key, value)?).map_err(|_| {
                    GavelError::Config(format!("value '{value}' for {key} is too large"))
                })?;
            }
            "session.token" => self.session.token = non_empty(value),
            "session.email" => self.session.email = non_empty(value),
            "session.role" => {
                self.session.role = value
                    .parse()
                    .map_err(|e: GavelError| GavelError::Config(e.to_string()))?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

pub fn is_sensitive_key(key: &str) -> bool {
    key == "session.token"
}

/// Mask a sensitive value by showing only the first 2 and last 2 characters
pub fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

fn unknown_key(key: &str) -> GavelError {
    let suggestion = key.replacen('_', ".", 1);
    let hint = if CONFIG_KEYS.contains(&suggestion.as_str()) {
        format!(" Did you mean '{suggestion}'?")
    } else {
        String::new()
    };
    GavelError::Config(format!(
        "unknown config key '{key}'.{hint} Valid keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}

fn parse_positive(key: &str, value: &str) -> Result<u64> {
    match value.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(GavelError::Config(format!(
            "invalid value '{value}' for {key}. Expected a positive integer"
        ))),
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
