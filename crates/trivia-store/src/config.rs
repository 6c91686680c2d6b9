//! Host configuration and store factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use trivia_core::pagination::DEFAULT_PAGE_SIZE;
use trivia_core::store::QuestionStore;

use crate::json::JsonStore;

/// Top-level trivia configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriviaConfig {
    /// Path of the JSON data file holding questions and categories.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Questions per page in listings.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Questions served per quiz session before the host ends the game.
    #[serde(default = "default_quiz_length")]
    pub quiz_length: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("trivia.json")
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_quiz_length() -> usize {
    5
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: default_page_size(),
            quiz_length: default_quiz_length(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `trivia.toml` in the current directory
/// 2. `~/.config/trivia/config.toml`
///
/// Environment variable overrides: `TRIVIA_DATA_FILE`, `TRIVIA_PAGE_SIZE`,
/// `TRIVIA_QUIZ_LENGTH`.
pub fn load_config() -> Result<TriviaConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<TriviaConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("trivia.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<TriviaConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TriviaConfig::default(),
    };

    // Apply env var overrides
    if let Ok(file) = std::env::var("TRIVIA_DATA_FILE") {
        config.data_file = PathBuf::from(file);
    }
    if let Ok(size) = std::env::var("TRIVIA_PAGE_SIZE") {
        config.page_size = size
            .parse()
            .with_context(|| format!("TRIVIA_PAGE_SIZE is not a number: {size}"))?;
    }
    if let Ok(length) = std::env::var("TRIVIA_QUIZ_LENGTH") {
        config.quiz_length = length
            .parse()
            .with_context(|| format!("TRIVIA_QUIZ_LENGTH is not a number: {length}"))?;
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("trivia"))
}

/// Open the store the configuration points at.
pub fn open_store(config: &TriviaConfig) -> Result<Arc<dyn QuestionStore>> {
    let store = JsonStore::open(&config.data_file)?;
    Ok(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TriviaConfig::default();
        assert_eq!(config.data_file, PathBuf::from("trivia.json"));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.quiz_length, 5);
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let config: TriviaConfig = toml::from_str(r#"data_file = "decks/pub-night.json""#).unwrap();
        assert_eq!(config.data_file, PathBuf::from("decks/pub-night.json"));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.quiz_length, 5);
    }

    #[test]
    fn explicit_missing_config_path_is_an_error() {
        assert!(load_config_from(Some(Path::new("no-such-trivia.toml"))).is_err());
    }
}
