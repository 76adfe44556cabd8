use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::naming::DEFAULT_ID_SUFFIXES;

/// Options that control how relationships are inferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferOptions {
    /// Column suffixes stripped to derive a forward edge name, tried in order.
    pub id_suffixes: Vec<String>,
    /// Turn two-key join tables into many-to-many edges instead of two
    /// one-to-many pairs.
    pub detect_join_tables: bool,
    pub log: LogOptions,
}

impl Default for InferOptions {
    fn default() -> Self {
        Self {
            id_suffixes: DEFAULT_ID_SUFFIXES
                .iter()
                .map(|suffix| suffix.to_string())
                .collect(),
            detect_join_tables: false,
            log: LogOptions::default(),
        }
    }
}

impl InferOptions {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file; missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Log subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogOptions {
    /// `EnvFilter` directive, e.g. `info` or `entgraph_infer=debug`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
