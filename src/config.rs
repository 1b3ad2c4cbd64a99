//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default registration endpoint
pub const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/users";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Roles offered when the config file does not list any
const DEFAULT_ROLES: &[&str] = &[
    "Frontend Engineer",
    "Backend Engineer",
    "Full Stack Engineer",
    "UX Designer",
    "Project Manager",
];

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OnboardConfig {
    /// Registration endpoint URL
    pub endpoint: Option<String>,
    /// Value for the `x-api-key` header
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Roles shown in the role selector
    pub roles: Option<Vec<String>>,
}

impl OnboardConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "onboard", "onboard-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Where log output is written
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("onboard-tui.log"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file(Self::config_path().as_deref())?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(path)?;
                let config: OnboardConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// `ONBOARD_ENDPOINT` and `ONBOARD_API_KEY` take precedence over the file
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = var("ONBOARD_ENDPOINT").filter(|v| !v.is_empty()) {
            self.endpoint = Some(endpoint);
        }
        if let Some(key) = var("ONBOARD_API_KEY").filter(|v| !v.is_empty()) {
            self.api_key = Some(key);
        }
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Request timeout; `0` falls back to the default
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .filter(|&secs| secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    pub fn roles(&self) -> Vec<String> {
        match &self.roles {
            Some(roles) if !roles.is_empty() => roles.clone(),
            _ => DEFAULT_ROLES.iter().map(|r| r.to_string()).collect(),
        }
    }
}
