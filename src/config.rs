//! Centralized configuration management for sklad

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the log file the TUI writes to
    pub log_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let log_file = std::env::var("SKLAD_LOG_FILE")
            .unwrap_or_else(|_| "./sklad.log".to_string())
            .into();

        Ok(Config { log_file })
    }

    /// Get log file path as string
    pub fn log_file_str(&self) -> &str {
        self.log_file.to_str().unwrap_or("./sklad.log")
    }

    /// Validate configuration, creating the log directory if needed
    pub fn validate(&self) -> Result<()> {
        if let Some(parent) = self.log_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Cannot create log directory: {}", parent.display())
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_env().unwrap();
        assert_eq!(config.log_file_str(), "./sklad.log");
    }

    #[test]
    fn test_validate_creates_missing_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_file: dir.path().join("logs").join("sklad.log"),
        };

        config.validate().unwrap();
        assert!(dir.path().join("logs").exists());
    }
}
