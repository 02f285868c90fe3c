//! Configuration for the glyph range runner

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ranges::{GlyphWidth, OverflowPolicy, RangeTable};
use crate::wordlist::Utf8Policy;

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Predefined tables to include
    pub tables: Vec<RangeTable>,
    /// Newline-delimited word lists whose characters are included
    pub word_lists: Vec<PathBuf>,
    /// Literal text whose characters are included
    pub text: Vec<String>,
    /// Glyph index width of the consuming font loader
    pub glyph_width: GlyphWidth,
    /// Handling of code points above the glyph width
    pub overflow: OverflowPolicy,
    /// Handling of malformed UTF-8 in word lists
    pub utf8: Utf8Policy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tables: vec![RangeTable::Japanese],
            word_lists: Vec::new(),
            // Modern form of 叱, outside the BMP
            text: vec!["𠮟".to_string()],
            glyph_width: GlyphWidth::default(),
            overflow: OverflowPolicy::default(),
            utf8: Utf8Policy::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        // Try to load from ~/.config/glyph-ranges/config.json
        if let Some(config_dir) = dirs_config_path() {
            let config_path = config_dir.join("config.json");
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Ignoring {}: {}", config_path.display(), e),
                }
            }
        }
        Self::default()
    }
}

/// Get the configuration directory path
fn dirs_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("glyph-ranges"))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
