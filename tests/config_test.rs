mod common;

use std::env;
use std::time::Duration;

use common::GavelTest;
use gavel::config::{API_URL_ENV, CONFIG_ENV, TOKEN_ENV};
use gavel::{Config, Role};
use serde_json::Value;
use serial_test::serial;
use tempfile::TempDir;

fn json(output: &str) -> Value {
    serde_json::from_str(output).expect("command should print JSON")
}

// ============================================================================
// `gavel config` commands
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let gavel = GavelTest::new();
    let output = json(&gavel.run_success(&["config", "show", "--json"]));

    assert_eq!(output["api"]["base_url"], "https://localhost:5000");
    assert_eq!(output["api"]["timeout_secs"], 10);
    assert_eq!(output["list"]["page_size"], 5);
    assert_eq!(output["session"]["token_configured"], false);
    assert_eq!(output["session"]["role"], "admin");
    assert_eq!(
        output["config_file"],
        gavel.config_path().to_string_lossy().as_ref()
    );
}

#[test]
fn test_config_set_persists_yaml() {
    let gavel = GavelTest::new();
    gavel.run_success(&["config", "set", "list.page_size", "20"]);
    gavel.run_success(&["config", "set", "session.role", "seller"]);
    gavel.run_success(&["config", "set", "api.base_url", "http://api.internal:5000/"]);

    let config = Config::load_from(&gavel.config_path()).unwrap();
    assert_eq!(config.list.page_size, 20);
    assert_eq!(config.session.role, Role::Seller);
    assert_eq!(config.api.base_url, "http://api.internal:5000");

    let output = json(&gavel.run_success(&["config", "get", "list.page_size", "--json"]));
    assert_eq!(output["value"], "20");
    assert_eq!(output["configured"], true);
}

#[test]
fn test_config_token_is_masked_everywhere() {
    let gavel = GavelTest::new();
    let set = json(&gavel.run_success(&[
        "config",
        "set",
        "session.token",
        "eyJhbGciOiJIUzI1NiJ9",
        "--json",
    ]));
    assert_eq!(set["action"], "config_set");
    assert_eq!(set["value"], "ey...J9");

    let get = gavel.run_success(&["config", "get", "session.token"]);
    assert!(get.contains("ey...J9"));
    assert!(!get.contains("eyJhbGciOiJIUzI1NiJ9"));

    let show = gavel.run_success(&["config", "show"]);
    assert!(show.contains("ey...J9"));
    assert!(!show.contains("eyJhbGciOiJIUzI1NiJ9"));

    // The file itself holds the real token
    let config = Config::load_from(&gavel.config_path()).unwrap();
    assert_eq!(config.session.token.as_deref(), Some("eyJhbGciOiJIUzI1NiJ9"));
}

#[cfg(unix)]
#[test]
fn test_config_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let gavel = GavelTest::new();
    gavel.run_success(&["config", "set", "session.email", "ops@example.com"]);
    let mode = std::fs::metadata(gavel.config_path())
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_config_get_unset_value() {
    let gavel = GavelTest::new();
    let output = json(&gavel.run_success(&["config", "get", "session.email", "--json"]));
    assert_eq!(output["configured"], false);
    assert!(output["value"].is_null());
}

#[test]
fn test_config_unknown_key() {
    let gavel = GavelTest::new();
    let stderr = gavel.run_failure(&["config", "set", "api_base_url", "http://x"]);
    assert!(stderr.contains("unknown config key 'api_base_url'"), "{stderr}");
    assert!(stderr.contains("Did you mean 'api.base_url'?"), "{stderr}");

    let stderr = gavel.run_failure(&["config", "get", "color"]);
    assert!(stderr.contains("Valid keys:"), "{stderr}");
    assert!(!gavel.config_path().exists());
}

#[test]
fn test_config_rejects_invalid_values() {
    let gavel = GavelTest::new();
    let stderr = gavel.run_failure(&["config", "set", "list.page_size", "0"]);
    assert!(stderr.contains("Expected a positive integer"), "{stderr}");

    let stderr = gavel.run_failure(&["config", "set", "session.role", "bidder"]);
    assert!(stderr.contains("bidder"), "{stderr}");
    assert!(!gavel.config_path().exists());
}

#[test]
fn test_malformed_config_file_is_reported() {
    let gavel = GavelTest::new();
    gavel.write_config("api: [unclosed\n");
    let stderr = gavel.run_failure(&["config", "show"]);
    assert!(stderr.contains("YAML parse error"), "{stderr}");
}

// ============================================================================
// Environment overrides
// ============================================================================

struct EnvGuard {
    keys: Vec<&'static str>,
}

impl EnvGuard {
    fn set(pairs: &[(&'static str, String)]) -> Self {
        for (key, value) in pairs {
            // SAFETY: tests touching the environment are #[serial]
            unsafe { env::set_var(key, value) };
        }
        Self {
            keys: pairs.iter().map(|(k, _)| *k).collect(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            // SAFETY: see EnvGuard::set
            unsafe { env::remove_var(key) };
        }
    }
}

#[test]
#[serial]
fn test_config_path_from_env() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("gavel.yaml");
    let _env = EnvGuard::set(&[(CONFIG_ENV, path.to_string_lossy().into_owned())]);

    assert_eq!(Config::config_path().unwrap(), path);
    assert_eq!(Config::load().unwrap().list.page_size, 5);

    let mut config = Config::default();
    config.set("api.timeout_secs", "25").unwrap();
    config.save().unwrap();
    assert!(path.exists());
    assert_eq!(Config::load().unwrap().timeout(), Duration::from_secs(25));
}

#[test]
#[serial]
fn test_env_overrides_url_and_token() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "api:\n  base_url: http://from-file:5000\nsession:\n  token: file-token\n  email: ops@example.com\n",
    )
    .unwrap();
    let _env = EnvGuard::set(&[
        (CONFIG_ENV, path.to_string_lossy().into_owned()),
        (API_URL_ENV, "http://from-env:5000".to_string()),
        (TOKEN_ENV, "env-token".to_string()),
    ]);

    let config = Config::load().unwrap();
    assert_eq!(config.api.base_url, "http://from-file:5000");
    assert_eq!(config.base_url(), "http://from-env:5000");
    assert_eq!(config.token().as_deref(), Some("env-token"));

    let session = config.session();
    assert_eq!(session.email(), Some("ops@example.com"));
    assert_eq!(session.role(), Role::Admin);
}

#[test]
#[serial]
fn test_empty_env_values_are_ignored() {
    let _env = EnvGuard::set(&[(API_URL_ENV, String::new()), (TOKEN_ENV, String::new())]);

    let mut config = Config::default();
    config.set("session.token", "stored-token").unwrap();
    assert_eq!(config.base_url(), "https://localhost:5000");
    assert_eq!(config.token().as_deref(), Some("stored-token"));
}
