//! Player settings loaded from a TOML file: where games are saved and how the weighted
//! computer values its moves.

use std::path::{Path, PathBuf};

use derive_more::{Display, Error};
use reversi_core::persist::DEFAULT_SAVE_PATH;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::weighted::Weights;

/// Errors that can occur when loading configuration.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "failed to read config file {}: {}", path, source)]
    CannotReadFile { path: String, source: std::io::Error },

    #[display(fmt = "failed to parse TOML: {}", source)]
    CannotParse { source: toml::de::Error },

    #[display(fmt = "config validation error: {}", reason)]
    Invalid { reason: String },
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where games are saved and loaded.
    pub save_path: PathBuf,
    /// Weights for the weighted computer player.
    pub weights: Weights,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            weights: Weights::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::CannotReadFile {
                path: path.display().to_string(),
                source,
            })?;
        let config: AppConfig =
            toml::from_str(&content).map_err(|source| ConfigError::CannotParse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| {
            Err(ConfigError::Invalid {
                reason: reason.into(),
            })
        };

        if self.save_path.as_os_str().is_empty() {
            return invalid("save_path must not be empty");
        }

        let w = &self.weights;
        if w.corner < 0 || w.side < 0 || w.greedy_match < 0 {
            return invalid("weights.corner, weights.side and weights.greedy_match must be >= 0");
        }
        if w.opponent_corner > 0 || w.opponent_side > 0 {
            return invalid("weights.opponent_corner and weights.opponent_side must be <= 0");
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}
