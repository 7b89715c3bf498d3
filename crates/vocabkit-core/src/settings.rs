//! Application settings management
//!
//! Settings are read from `settings.toml` in the user config directory.
//! Every section falls back to its defaults when missing.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use telemetry::TelemetryConfig;

/// Default number of undo steps kept per editing session
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Main settings structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Undo/redo history
    pub history: HistorySettings,
    /// Language of undo/redo preview messages
    pub locale: LocaleSettings,
    /// Vocabulary store behavior
    pub vocabulary: VocabularySettings,
    /// Logging
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    pub capacity: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSettings {
    pub language: String,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            language: "en-US".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularySettings {
    /// Prefix marking placeholder terms that are never shown to the user
    pub blank_prefix: String,
}

impl Default for VocabularySettings {
    fn default() -> Self {
        Self {
            blank_prefix: "_blank_".into(),
        }
    }
}

impl Settings {
    /// Load settings from disk or return defaults
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing settings in {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("writing settings to {}", path.display()))?;

        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vocabkit")
            .join("settings.toml")
    }
}
