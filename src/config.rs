use log::{info, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::services::file::DEFAULT_SEARCH_LIMIT;
use crate::syntax::DEFAULT_SYNTAX_THEME;

pub const DEFAULT_TREE_WIDTH: u16 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config format in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuillConfig {
    /// syntect theme used for highlighting
    pub syntax_theme: String,
    /// Maximum number of rows in the search result list
    pub search_limit: usize,
    /// Width of the directory tree sidebar in columns
    pub tree_width: u16,
}

impl Default for QuillConfig {
    fn default() -> Self {
        Self {
            syntax_theme: DEFAULT_SYNTAX_THEME.to_string(),
            search_limit: DEFAULT_SEARCH_LIMIT,
            tree_width: DEFAULT_TREE_WIDTH,
        }
    }
}

impl QuillConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `explicit` if given, else the first config file found in the usual places.
    ///
    /// Never fails: a missing file means defaults, a broken one is logged and replaced by defaults.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => find_config_file(),
        };
        let Some(path) = path else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("{}; using defaults", err);
                Self::default()
            }
        }
    }
}

pub fn get_config_dir() -> PathBuf {
    let config_home = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config")
    });
    config_home.join("quill")
}

pub fn find_config_file() -> Option<PathBuf> {
    let mut paths = vec![get_config_dir().join("config.toml")];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".quill").join("config.toml"));
    }

    paths.into_iter().find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = QuillConfig::default();
        assert_eq!(config.syntax_theme, "base16-ocean.dark");
        assert_eq!(config.search_limit, 10);
        assert_eq!(config.tree_width, 30);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "search_limit = 25\n").unwrap();

        let config = QuillConfig::from_file(&path).unwrap();
        assert_eq!(config.search_limit, 25);
        assert_eq!(config.syntax_theme, DEFAULT_SYNTAX_THEME);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "search_limit = \"many\"").unwrap();

        assert!(matches!(
            QuillConfig::from_file(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let broken = temp_dir.path().join("broken.toml");
        fs::write(&broken, "tree_width = [").unwrap();

        assert_eq!(QuillConfig::load(Some(broken.as_path())), QuillConfig::default());
        assert_eq!(
            QuillConfig::load(Some(temp_dir.path().join("missing.toml").as_path())),
            QuillConfig::default()
        );
    }

    #[test]
    fn test_config_dir_name() {
        assert!(get_config_dir().ends_with("quill"));
    }
}
