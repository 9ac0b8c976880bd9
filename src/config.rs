//! Configuration handling for the form client

use crate::api::DEFAULT_ENDPOINT;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV: &str = "METAVERSE_FORM_ENDPOINT";

/// User configuration for the form client
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Submission endpoint URL
    pub endpoint: Option<String>,
    /// User agent for outgoing requests
    pub user_agent: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "metaverse", "metaverse-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, writing a default one on first run
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: FormConfig = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "Loaded config");
            return Ok(config);
        }

        let config = Self {
            endpoint: Some(DEFAULT_ENDPOINT.to_string()),
            ..Default::default()
        };
        if let Err(err) = config.save(path) {
            tracing::warn!(path = %path.display(), error = %err, "Could not write default config");
        }
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Endpoint to post to: environment, then config file, then default
    pub fn resolve_endpoint(&self) -> String {
        self.resolve_endpoint_with(std::env::var(ENDPOINT_ENV).ok())
    }

    fn resolve_endpoint_with(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }
}
