//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON)
//! - Environment variables (`WP2VERCEL_CONFIG`, via clap)
//! - Command-line arguments

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wp2vercel_core::OUTPUT_FILE_NAME;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Where and how `convert` writes its result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the output file is written to
    pub directory: PathBuf,

    /// Name of the output file
    pub file_name: String,

    /// Replace an existing output file without --force
    pub overwrite: bool,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no -v flag is given (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,

    /// Log file path
    pub file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_name: OUTPUT_FILE_NAME.to_string(),
            overwrite: false,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Default destination of `convert`
    pub fn default_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;

        let config = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in &Self::default_config_paths() {
            if path.exists() {
                // Logging is not initialized yet
                match Self::from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            if !path.exists() {
                return Err(Error::config(format!("config file {} does not exist", path.display())));
            }
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check, in priority order
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".wp2vercel.yaml"),
            PathBuf::from(".wp2vercel.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("wp2vercel");
            paths.push(app_dir.join("config.yaml"));
            paths.push(app_dir.join("config.json"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".wp2vercel.yaml"));
        }

        paths
    }

    /// Location `config init` writes to when no path is given
    pub fn user_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("wp2vercel").join("config.yaml"))
            .ok_or_else(|| Error::config("could not determine the user configuration directory"))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_yaml(path) {
            serde_yaml::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_output_path() {
        let config = Config::default();
        assert_eq!(config.output.default_path(), PathBuf::from("./vercel.json"));
        assert!(!config.output.overwrite);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "output:\n  directory: public\n  overwrite: true\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.output.directory, PathBuf::from("public"));
        assert_eq!(config.output.file_name, "vercel.json");
        assert!(config.output.overwrite);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_save_and_reload_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.logging.level = Some("debug".to_string());
        config.save(&path).unwrap();

        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_file_is_config_error() {
        let dir = tempdir().unwrap();
        let err = Config::load_with_file(Some(&dir.path().join("nope.yaml"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_yaml_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "output: [unclosed").unwrap();
        assert!(matches!(Config::from_file(&path), Err(Error::Yaml(_))));
    }
}
