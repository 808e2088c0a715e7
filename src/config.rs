//! Driver settings read from `exprlex.toml`.
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "exprlex.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("corrupt config {path:?}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color: bool,
    pub show_tokens: bool,
    pub format: OutputFormat,
    pub exit_command: String,
    pub history: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            color: true,
            show_tokens: true,
            format: OutputFormat::Text,
            exit_command: "exit".to_string(),
            history: true,
        }
    }
}

impl Config {
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml(path, &content)
    }

    /// Uses `explicit` when given, otherwise the first file found among
    /// `./exprlex.toml` and the user config directory. No file means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match search_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => {
                log::debug!("using config {:?}", path);
                Self::load_from(&path)
            }
            None => Ok(Config::default()),
        }
    }
}

fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("exprlex").join("config.toml"));
    }
    paths
}

/// Location of the REPL history file, if the platform has a data directory.
pub fn history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("exprlex").join("history.txt"))
}
