//! Configuration management
//!
//! This module handles loading and managing configuration from:
//! - Command-line arguments
//! - Configuration files (TOML)
//! - Defaults

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub extractor: ExtractorConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// PDF-to-text extractor invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Executable to run
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments placed before the input path
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format (csv, json, table)
    #[serde(default = "default_format")]
    pub format: String,

    /// Write a header row before CSV records
    #[serde(default)]
    pub header: bool,

    /// Row terminator for CSV output
    #[serde(default = "default_line_terminator")]
    pub line_terminator: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions

fn default_command() -> String {
    "pdftotext".to_string()
}

fn default_args() -> Vec<String> {
    vec!["-raw".to_string()]
}

fn default_format() -> String {
    "csv".to_string()
}

fn default_line_terminator() -> String {
    "\r\n".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

// Default implementations

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: default_args(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            header: false,
            line_terminator: default_line_terminator(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file {:?}: {}", path, e)))?;

        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Searches in order:
    /// 1. ./lot-extract.toml
    /// 2. ~/.lot-extract/config.toml
    /// 3. /etc/lot-extract/config.toml
    pub fn load() -> Result<Self> {
        let mut paths = vec![PathBuf::from("lot-extract.toml")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".lot-extract").join("config.toml"));
        }
        paths.push(PathBuf::from("/etc/lot-extract/config.toml"));

        for path in paths {
            if path.exists() {
                tracing::info!("Loading config from {:?}", path);
                return Self::from_file(path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Reject settings that cannot produce usable output
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            !self.extractor.command.trim().is_empty(),
            "extractor.command must not be empty"
        );
        crate::ensure!(
            !self.output.line_terminator.is_empty(),
            "output.line_terminator must not be empty"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.extractor.command, "pdftotext");
        assert_eq!(config.extractor.args, vec!["-raw".to_string()]);
        assert_eq!(config.output.format, "csv");
        assert!(!config.output.header);
        assert_eq!(config.output.line_terminator, "\r\n");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_parse_toml_config() {
        let toml = r#"
[extractor]
command = "/opt/poppler/bin/pdftotext"

[output]
format = "json"
header = true

[logging]
level = "debug"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.extractor.command, "/opt/poppler/bin/pdftotext");
        assert_eq!(config.extractor.args, vec!["-raw".to_string()]);
        assert_eq!(config.output.format, "json");
        assert!(config.output.header);
        assert_eq!(config.output.line_terminator, "\r\n");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.extractor.command = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "extractor.command must not be empty");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nline_terminator = \"\\n\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.output.line_terminator, "\n");
        assert_eq!(config.extractor.command, "pdftotext");
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output\nformat = ").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
