#![allow(dead_code)]

pub mod http_server;
pub mod mock_client;
pub mod mock_data;

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the gavel binary built for integration tests
pub fn gavel_binary() -> &'static str {
    env!("CARGO_BIN_EXE_gavel")
}

/// Helper struct to run gavel commands against an isolated config file
pub struct GavelTest {
    pub temp_dir: TempDir,
}

impl GavelTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        GavelTest { temp_dir }
    }

    /// Config file used by every command run through this helper
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn write_config(&self, yaml: &str) {
        std::fs::write(self.config_path(), yaml).expect("Failed to write config");
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(gavel_binary())
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("GAVEL_CONFIG", self.config_path())
            .env_remove("GAVEL_API_URL")
            .env_remove("GAVEL_TOKEN")
            .env_remove("GAVEL_LOG")
            .output()
            .expect("Failed to execute gavel command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Command {:?} should have failed\nstdout: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

impl Default for GavelTest {
    fn default() -> Self {
        Self::new()
    }
}
