//! Configuration file support for `.shiftlog.toml`.
//!
//! Configuration files can be placed in:
//! - User home directory: `~/.shiftlog.toml` (user defaults)
//! - Working directory: `./.shiftlog.toml` (project defaults)
//!
//! Precedence order (highest to lowest):
//! 1. Command-line arguments
//! 2. Project config (`./.shiftlog.toml`)
//! 3. User config (`~/.shiftlog.toml`)
//! 4. Built-in defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Default assumed year for reports without an explicit year.
    pub assumed_year: Option<i32>,

    /// Default output format ("csv" or "json").
    pub format: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Discover and merge the user and project config files.
    pub fn discover() -> Self {
        let user = dirs::home_dir()
            .map(|home| home.join(".shiftlog.toml"))
            .and_then(Self::load_if_present);
        let project = Self::load_if_present(PathBuf::from(".shiftlog.toml"));
        Self::merge(user, project)
    }

    fn load_if_present(path: PathBuf) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        match Self::load_from_file(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("ignoring config {}: {e}", path.display());
                None
            }
        }
    }

    /// Merge configs: project values override user values.
    fn merge(user: Option<Self>, project: Option<Self>) -> Self {
        let mut merged = Self::default();
        for layer in [user, project].into_iter().flatten() {
            if layer.assumed_year.is_some() {
                merged.assumed_year = layer.assumed_year;
            }
            if layer.format.is_some() {
                merged.format = layer.format;
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str("assumed_year = 2025\nformat = \"json\"").unwrap();
        assert_eq!(config.assumed_year, Some(2025));
        assert_eq!(config.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_project_overrides_user() {
        let user = Config {
            assumed_year: Some(2024),
            format: Some("csv".to_string()),
        };
        let project = Config {
            assumed_year: Some(2025),
            format: None,
        };

        let merged = Config::merge(Some(user), Some(project));
        assert_eq!(merged.assumed_year, Some(2025));
        assert_eq!(merged.format.as_deref(), Some("csv"));
    }

    #[test]
    fn test_load_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "assumed_year = 2023").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.assumed_year, Some(2023));
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "assumed_year = [not an int]").unwrap();
        assert!(Config::load_from_file(file.path()).is_err());
    }
}
