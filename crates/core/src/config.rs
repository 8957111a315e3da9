use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project-level configuration loaded from `.smellguard.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub global: GlobalConfig,
    #[serde(default)]
    pub detectors: HashMap<String, DetectorConfig>,
    #[serde(default)]
    pub suppressions: SuppressionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub output_format: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_format: "text".to_string(),
        }
    }
}

/// Raw per-detector entry, as written in the config file or attached to a context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

/// Settings a detector is constructed with, defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorSettings {
    pub enabled: bool,
    /// Context full names (substrings or glob patterns) the detector skips
    pub exclude: Vec<String>,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            exclude: Vec::new(),
        }
    }
}

impl From<&DetectorConfig> for DetectorSettings {
    fn from(config: &DetectorConfig) -> Self {
        Self {
            enabled: config.enabled.unwrap_or(true),
            exclude: config.exclude.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SuppressionConfig {
    pub files: Vec<String>,
}

impl Config {
    /// Load config from a TOML file path. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the settings for one detector. A missing entry yields defaults.
    pub fn settings_for(&self, name: &str) -> DetectorSettings {
        self.detectors
            .get(name)
            .map(DetectorSettings::from)
            .unwrap_or_default()
    }

    /// Configured detector names that match none of `known`, sorted.
    pub fn unknown_detectors(&self, known: &[&str]) -> Vec<String> {
        let mut unknown: Vec<String> = self
            .detectors
            .keys()
            .filter(|name| !known.contains(&name.as_str()))
            .cloned()
            .collect();
        unknown.sort();
        unknown
    }

    /// Check if a file path should be excluded based on suppression glob patterns.
    pub fn is_file_excluded(&self, file_path: &Path) -> bool {
        let path_str = file_path.to_string_lossy();
        self.suppressions
            .files
            .iter()
            .any(|pattern| glob::Pattern::new(pattern).is_ok_and(|p| p.matches(&path_str)))
    }

    /// Generate default config file content.
    pub fn default_toml() -> &'static str {
        r#"# smellguard configuration

[global]
# Output format: "text", "json"
output_format = "text"

# Per-detector overrides, keyed by smell type
# [detectors.BooleanParameter]
# enabled = false
# exclude = ["Cli#run", "Legacy::*"]

[suppressions]
# Glob patterns for source files to skip entirely
files = ["spec/**", "test/**"]
"#
    }
}
