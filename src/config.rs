//! Configuration management for HealthMate
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files and environment variables.

use crate::error::{HealthMateError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for HealthMate
///
/// Holds the backend endpoints plus chat and checker behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Backend service endpoints
    #[serde(default)]
    pub backend: BackendConfig,

    /// Chat behavior configuration
    #[serde(default)]
    pub chat: ChatConfig,

    /// Symptom checker configuration
    #[serde(default)]
    pub check: CheckConfig,
}

/// Backend service endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the conversational backend
    #[serde(default = "default_chat_url")]
    pub chat_url: String,

    /// Base URL of the symptom-prediction backend
    #[serde(default = "default_triage_url")]
    pub triage_url: String,

    /// Optional HTTP client timeout in seconds
    ///
    /// The default is no timeout: a slow backend keeps the typing indicator
    /// active rather than erroring. Set this to bound a hung backend.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

fn default_chat_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_triage_url() -> String {
    "http://localhost:8001".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            chat_url: default_chat_url(),
            triage_url: default_triage_url(),
            timeout_seconds: None,
        }
    }
}

/// Chat behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Number of recent turns sent as context with each message
    #[serde(default = "default_history_turns")]
    pub history_turns: usize,
}

fn default_history_turns() -> usize {
    10
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            history_turns: default_history_turns(),
        }
    }
}

/// Symptom checker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Number of candidate conditions to request
    #[serde(default = "default_topk")]
    pub topk: usize,

    /// Chips per row when rendering vocabulary sections (2 or 3)
    #[serde(default = "default_columns")]
    pub columns: usize,
}

fn default_topk() -> usize {
    3
}

fn default_columns() -> usize {
    3
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            topk: default_topk(),
            columns: default_columns(),
        }
    }
}

impl Config {
    /// Load configuration from a file with environment overrides applied
    ///
    /// A missing file is not an error; defaults are used instead.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| HealthMateError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| HealthMateError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(chat_url) = std::env::var("HEALTHMATE_CHAT_URL") {
            self.backend.chat_url = chat_url;
        }

        if let Ok(triage_url) = std::env::var("HEALTHMATE_TRIAGE_URL") {
            self.backend.triage_url = triage_url;
        }

        if let Ok(timeout) = std::env::var("HEALTHMATE_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.backend.timeout_seconds = Some(value);
            } else {
                tracing::warn!("Invalid HEALTHMATE_TIMEOUT_SECONDS: {}", timeout);
            }
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.backend.chat_url.is_empty() {
            return Err(
                HealthMateError::Config("backend.chat_url cannot be empty".to_string()).into(),
            );
        }

        if self.backend.triage_url.is_empty() {
            return Err(
                HealthMateError::Config("backend.triage_url cannot be empty".to_string()).into(),
            );
        }

        if self.chat.history_turns == 0 {
            return Err(HealthMateError::Config(
                "chat.history_turns must be greater than 0".to_string(),
            )
            .into());
        }

        if self.check.topk == 0 {
            return Err(
                HealthMateError::Config("check.topk must be greater than 0".to_string()).into(),
            );
        }

        if !(2..=3).contains(&self.check.columns) {
            return Err(
                HealthMateError::Config("check.columns must be 2 or 3".to_string()).into(),
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.backend.chat_url, "http://localhost:8080");
        assert_eq!(config.backend.triage_url, "http://localhost:8001");
        assert_eq!(config.chat.history_turns, 10);
        assert_eq!(config.check.topk, 3);
        assert!(config.backend.timeout_seconds.is_none());
    }

    #[test]
    fn test_parse_partial_yaml_fills_defaults() {
        let yaml = "backend:\n  chat_url: \"http://example.com\"\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.backend.chat_url, "http://example.com");
        assert_eq!(config.backend.triage_url, "http://localhost:8001");
        assert_eq!(config.check.columns, 3);
    }

    #[test]
    #[serial]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/config.yaml").unwrap();
        assert_eq!(config.chat.history_turns, 10);
    }

    #[test]
    #[serial]
    fn test_env_overrides_applied() {
        std::env::set_var("HEALTHMATE_CHAT_URL", "http://chat.test");
        std::env::set_var("HEALTHMATE_TIMEOUT_SECONDS", "15");

        let config = Config::load("/nonexistent/config.yaml").unwrap();
        assert_eq!(config.backend.chat_url, "http://chat.test");
        assert_eq!(config.backend.timeout_seconds, Some(15));

        std::env::remove_var("HEALTHMATE_CHAT_URL");
        std::env::remove_var("HEALTHMATE_TIMEOUT_SECONDS");
    }

    #[test]
    fn test_validate_rejects_empty_urls() {
        let mut config = Config::default();
        config.backend.chat_url.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_history_turns() {
        let mut config = Config::default();
        config.chat.history_turns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_columns() {
        let mut config = Config::default();
        config.check.columns = 1;
        assert!(config.validate().is_err());
        config.check.columns = 4;
        assert!(config.validate().is_err());
        config.check.columns = 2;
        assert!(config.validate().is_ok());
    }
}
