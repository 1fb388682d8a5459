// File: contact-form/core/src/config.rs
// Purpose: Configuration parsing from contact-form.toml

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::rules::{RuleConfig, DEFAULT_MIN_MESSAGE_CHARS};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,
}

/// Contact form behaviour
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    /// Delay before a valid submission completes (default: 250)
    #[serde(default = "default_submit_delay_ms", alias = "submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// Minimum trimmed message length in characters (default: 10)
    #[serde(default = "default_min_message_chars", alias = "min_message_chars")]
    pub min_message_chars: usize,
}

fn default_submit_delay_ms() -> u64 {
    250
}

fn default_min_message_chars() -> usize {
    DEFAULT_MIN_MESSAGE_CHARS
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            min_message_chars: default_min_message_chars(),
        }
    }
}

impl FormConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn rules(&self) -> RuleConfig {
        RuleConfig {
            min_message_chars: self.min_message_chars,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. A missing or blank file yields
    /// the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from the default path (./contact-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("contact-form.toml")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.form.submit_delay(), Duration::from_millis(250));
        assert_eq!(config.form.rules().min_message_chars, 10);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_toml_str("  \n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [form]
            submit_delay_ms = 1000
        "#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.form.submit_delay_ms, 1000);
        assert_eq!(config.form.min_message_chars, 10);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_toml_str("[form]\nsubmit_delay_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load("does/not/exist/contact-form.toml").unwrap();
        assert_eq!(config, Config::default());
    }
}
