use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const EPHE_PATH_VAR: &str = "SE_EPHE_PATH";

/// Locations of the ephemeris files and the record stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub ephe_path: PathBuf,
    pub charts_file: PathBuf,
    pub events_file: PathBuf,
    pub configs_file: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            ephe_path: PathBuf::from("./se"),
            charts_file: PathBuf::from("charts.json"),
            events_file: PathBuf::from("events.json"),
            configs_file: PathBuf::from("configs.json"),
        }
    }
}

impl EngineConfig {
    /// Defaults, with the ephemeris path taken from `SE_EPHE_PATH` when set.
    pub fn from_env() -> Self {
        let mut config = EngineConfig::default();
        if let Ok(path) = env::var(EPHE_PATH_VAR) {
            if !path.is_empty() {
                config.ephe_path = PathBuf::from(path);
            }
        }
        config
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
