// ABOUTME: Configuration management for the twits application
// ABOUTME: Handles loading configuration from YAML files and environment variable overrides

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::host::HostConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub host: HostConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file(),
        };

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&contents)?
        } else {
            Config::default()
        };

        config.merge_env();
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let possible_paths = [
            PathBuf::from("twits.yaml"),
            PathBuf::from("twits.yml"),
            PathBuf::from(".twits.yaml"),
            PathBuf::from(".twits.yml"),
        ];

        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".twits").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        for path in possible_paths {
            if path.exists() {
                return path;
            }
        }

        PathBuf::from("twits.yaml")
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        self.apply_env(|name| std::env::var(name).ok());
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("TWITS_TEMPLATE_DIR") {
            self.host.template_dir = Some(PathBuf::from(dir));
        }
        if let Some(content_type) = lookup("TWITS_CONTENT_TYPE") {
            self.host.content_type = content_type;
        }
        if let Some(index) = lookup("TWITS_INDEX_TEMPLATE") {
            self.host.index_template = index;
        }

        if let Some(level) = lookup("TWITS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("TWITS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}
