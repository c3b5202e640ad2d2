//! Configuration for unitgen.
//!
//! Configuration is read from a TOML file and can be overridden through
//! environment variables. A missing file at the default location is not an
//! error; the defaults are used instead.
//!
//! # Configuration Location
//!
//! Resolution order:
//! 1. an explicit path (the CLI `--config` flag)
//! 2. the `UNITGEN_CONFIG_PATH` environment variable
//! 3. `<config_dir>/unitgen/config.toml` (e.g. `~/.config/unitgen/config.toml`)
//!
//! # Example
//!
//! ```toml
//! [general]
//! log_level = "info"
//!
//! [output]
//! format = "text"
//! directory = "src/test/java"
//! overwrite = false
//! ```

use crate::error::{Result, UnitgenError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// Environment variable names
pub const ENV_CONFIG_PATH: &str = "UNITGEN_CONFIG_PATH";
pub const ENV_LOG_LEVEL: &str = "UNITGEN_LOG_LEVEL";
pub const ENV_OUTPUT_FORMAT: &str = "UNITGEN_OUTPUT_FORMAT";
pub const ENV_OUTPUT_DIR: &str = "UNITGEN_OUTPUT_DIR";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// How generated artifacts are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The Java test suite source only
    #[default]
    Text,
    /// The full artifact (suite text and suggestions) as JSON
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = UnitgenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "java" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(UnitgenError::Config(format!(
                "Invalid output format '{}'. Must be one of: text, json",
                s
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitgenConfig {
    #[serde(default)]
    general: GeneralConfig,
    #[serde(default)]
    output: OutputConfig,
}

/// General configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
    /// Directory generated suites are written to; stdout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// Replace existing test files in `directory`
    #[serde(default)]
    pub overwrite: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl UnitgenConfig {
    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// An explicit path must exist. Otherwise the path is taken from
    /// `UNITGEN_CONFIG_PATH` or the platform config directory, and a missing
    /// file yields the defaults. Environment overrides are applied either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        let path = Self::resolve_path()?;
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            debug!("No configuration at {}, using defaults", path.display());
            let mut config = Self::default();
            config.merge_env_vars()?;
            config.validate()?;
            Ok(config)
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from_path(path: &Path) -> Result<Self> {
        debug!("Loading configuration from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| UnitgenError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config = Self::from_toml_str(&content)?;

        // Apply environment variable overrides
        config.merge_env_vars()?;

        config.validate()?;

        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text without applying overrides.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| UnitgenError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Save configuration to a specific path atomically
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or written
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        debug!("Saving configuration to: {}", path.display());

        self.validate()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    UnitgenError::Config(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| UnitgenError::Config(format!("Failed to serialize config: {}", e)))?;

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("toml.tmp");

        std::fs::write(&temp_path, content)
            .map_err(|e| UnitgenError::Config(format!("Failed to write config file: {}", e)))?;

        std::fs::rename(&temp_path, path)
            .map_err(|e| UnitgenError::Config(format!("Failed to rename config file: {}", e)))?;

        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.general.log_level.as_str()) {
            return Err(UnitgenError::Config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.general.log_level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        if let Some(dir) = &self.output.directory {
            if dir.as_os_str().is_empty() {
                return Err(UnitgenError::Config(
                    "output.directory must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Merge environment variable overrides into the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Merge overrides from an arbitrary variable lookup.
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            debug!("Overriding log_level from environment: {}", log_level);
            self.general.log_level = log_level.to_lowercase();
        }

        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            debug!("Overriding output format from environment: {}", format);
            self.output.format = format.parse()?;
        }

        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            debug!("Overriding output directory from environment: {}", dir);
            self.output.directory = Some(PathBuf::from(dir));
        }

        Ok(())
    }

    /// Resolve the configuration path from the environment or platform defaults.
    pub fn resolve_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
            return Ok(PathBuf::from(path));
        }
        Self::default_path()
    }

    /// Platform default configuration path.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            UnitgenError::Config("Could not determine the user config directory".to_string())
        })?;
        Ok(base.join("unitgen").join("config.toml"))
    }

    pub fn general(&self) -> &GeneralConfig {
        &self.general
    }

    pub fn general_mut(&mut self) -> &mut GeneralConfig {
        &mut self.general
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut OutputConfig {
        &mut self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = UnitgenConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general().log_level, "info");
        assert_eq!(config.output().format, OutputFormat::Text);
        assert!(config.output().directory.is_none());
        assert!(!config.output().overwrite);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = UnitgenConfig::from_toml_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output().format, OutputFormat::Json);
        assert_eq!(config.general().log_level, "info");

        let empty = UnitgenConfig::from_toml_str("").unwrap();
        assert_eq!(empty, UnitgenConfig::default());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = UnitgenConfig::from_toml_str("[output]\nformat = \"xml\"\n");
        assert!(matches!(result, Err(UnitgenError::Config(_))));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = UnitgenConfig::default();
        config.general_mut().log_level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_LOG_LEVEL, "DEBUG"),
            (ENV_OUTPUT_FORMAT, "json"),
            (ENV_OUTPUT_DIR, "out/tests"),
        ]
        .into_iter()
        .collect();

        let mut config = UnitgenConfig::default();
        config
            .merge_env_with(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.general().log_level, "debug");
        assert_eq!(config.output().format, OutputFormat::Json);
        assert_eq!(config.output().directory, Some(PathBuf::from("out/tests")));
    }

    #[test]
    fn test_env_override_invalid_format() {
        let mut config = UnitgenConfig::default();
        let result = config.merge_env_with(|k| {
            (k == ENV_OUTPUT_FORMAT).then(|| "yaml".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
