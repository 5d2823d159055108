//! Configuration management for logixpress
//!
//! Config stored at: ~/.config/logix/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use logix_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Operator name shown in the sidebar footer
    #[serde(default = "default_operator")]
    pub operator_name: String,

    /// Default output format for the CLI (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Optional JSON dataset replacing the built-in sample fleet
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Draw avenue names over the map
    #[serde(default = "default_true")]
    pub show_street_labels: bool,
}

fn default_operator() -> String {
    "Gestor de Logística".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            operator_name: default_operator(),
            output_format: OutputFormat::default(),
            dataset_path: None,
            show_street_labels: true,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("logix");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path, or create default
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "LOGIXPRESS Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(f, "Operator:      {}", self.operator_name)?;
        writeln!(f, "Output format: {}", self.output_format)?;
        writeln!(
            f,
            "Dataset:       {}",
            self.dataset_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in sample)".to_string())
        )?;
        writeln!(f, "Street labels: {}", self.show_street_labels)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:   {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.operator_name, "Gestor de Logística");
        assert!(config.show_street_labels);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.operator_name = "Turno Noche".to_string();
        config.output_format = OutputFormat::Json;
        config.show_street_labels = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.operator_name, "Turno Noche");
        assert_eq!(loaded.output_format, OutputFormat::Json);
        assert!(!loaded.show_street_labels);
    }

    #[test]
    fn test_corrupt_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
