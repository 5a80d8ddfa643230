//! Player configuration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "quiz.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the quiz files and `manifest.json`.
    pub quizzes_dir: PathBuf,
    /// Shuffle question order on every attempt.
    pub shuffle: bool,
    /// Where logs go while the terminal UI is running.
    pub log_file: Option<PathBuf>,
    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quizzes_dir: PathBuf::from("quizzes"),
            shuffle: true,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `explicit` if given, else `quiz.toml` if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        fs::write(&path, "shuffle = false\nquizzes_dir = \"web/quizzes\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(!config.shuffle);
        assert_eq!(config.quizzes_dir, PathBuf::from("web/quizzes"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        fs::write(&path, "shuffle = \"sometimes\"").unwrap();

        assert!(matches!(Config::from_file(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/no/such/quiz.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
