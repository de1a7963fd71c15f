use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::formatter::ErrorPolicy;

pub const DEFAULT_SEPARATOR: &str = " /";
pub const DEFAULT_MULTILINE_TITLE: &str = "Multiline output";
pub const DEFAULT_FAILURE_TITLE: &str = "Could not process. Invalid value or param";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Token between the subject and the command chain.
    pub separator: String,
    pub on_transform_error: ErrorPolicy,
    /// Command keys left out of preview mode.
    pub hidden: Vec<char>,
    /// Directory holding `<Command name>.png` icons.
    pub icon_dir: String,
    pub multiline_title: String,
    pub failure_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            on_transform_error: ErrorPolicy::default(),
            hidden: Vec::new(),
            icon_dir: ".".to_string(),
            multiline_title: DEFAULT_MULTILINE_TITLE.to_string(),
            failure_title: DEFAULT_FAILURE_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid JSON in config: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Separator must not be empty")]
    InvalidSeparator,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join("textchain.json"))
}

/// Load the config from its default location. A missing file yields the
/// defaults.
pub fn load_config() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(Config::default()),
    }
}

/// Load the config from an explicit path, which must exist.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    Config::from_json(&content)
}

impl Config {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::InvalidSeparator);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_object_is_all_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.separator, " /");
        assert_eq!(config.on_transform_error, ErrorPolicy::Placeholder);
    }

    #[test]
    fn deserialize_partial_config() {
        let json = r#"{
            "separator": "//",
            "on_transform_error": "skip",
            "hidden": ["R", "J"]
        }"#;

        let config = Config::from_json(json).unwrap();
        assert_eq!(config.separator, "//");
        assert_eq!(config.on_transform_error, ErrorPolicy::Skip);
        assert_eq!(config.hidden, vec!['R', 'J']);
        assert_eq!(config.failure_title, DEFAULT_FAILURE_TITLE);
    }

    #[test]
    fn empty_separator_is_rejected() {
        let err = Config::from_json(r#"{ "separator": "" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeparator));
    }

    #[test]
    fn unknown_policy_is_invalid_json() {
        let err = Config::from_json(r#"{ "on_transform_error": "explode" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "icon_dir": "./icons", "multiline_title": "Many lines" }}"#).unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.icon_dir, "./icons");
        assert_eq!(config.multiline_title, "Many lines");
    }

    #[test]
    fn load_from_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(load_config_from(&path), Err(ConfigError::NotFound(p)) if p == path));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = Config {
            hidden: vec!['d'],
            on_transform_error: ErrorPolicy::Skip,
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }
}
