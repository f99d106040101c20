//! Configuration for chatsum
//!
//! Optional TOML file, by default `~/.config/chatsum/config.toml`. Every field
//! has a default, so a missing or empty file gives the built-in behavior.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ChatsumError, Result};
use crate::keywords::DEFAULT_TOP_N;
use crate::text::LinguisticResources;

const CONFIG_DIR: &str = "chatsum";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "CHATSUM_CONFIG_DIR";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummarizerConfig {
    #[serde(default)]
    pub keywords: KeywordsConfig,

    #[serde(default)]
    pub stop_words: StopWordsConfig,
}

/// Keyword ranking settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeywordsConfig {
    /// Keywords kept by each extractor
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

/// Additions to the built-in English stop words
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StopWordsConfig {
    #[serde(default)]
    pub extra: Vec<String>,
}

impl SummarizerConfig {
    /// Default config file location, honoring `CHATSUM_CONFIG_DIR`
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }

    /// Load from an explicit path, or from the default location if it exists.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file yields the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path).map_err(unreadable_config);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path).map_err(unreadable_config),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ChatsumError::io(path, e))?;
        let config: SummarizerConfig =
            toml::from_str(&content).map_err(|e| ChatsumError::invalid_config(path, e))?;
        config.validate(path)?;

        tracing::debug!(path = %path.display(), top_n = config.keywords.top_n, "loaded config");
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.keywords.top_n == 0 {
            return Err(ChatsumError::invalid_config(
                path,
                "keywords.top_n must be at least 1",
            ));
        }
        Ok(())
    }

    /// Build the linguistic resources this configuration describes
    pub fn resources(&self) -> LinguisticResources {
        LinguisticResources::english().with_extra_stop_words(&self.stop_words.extra)
    }
}

/// A config file that cannot be read is a usage error, not an I/O failure
fn unreadable_config(err: ChatsumError) -> ChatsumError {
    match err {
        ChatsumError::NotFound { path } => ChatsumError::invalid_config(path, "file does not exist"),
        ChatsumError::Io { path, source } => ChatsumError::invalid_config(path, source),
        other => other,
    }
}
