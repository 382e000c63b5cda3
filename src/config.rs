// src/config.rs
//! Configuration for the freshness policy and fix timeout

use crate::error::{GeoError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeotagConfig {
    /// Maximum acceptable accuracy radius for a cached sample, meters.
    pub min_distance_meters: u32,
    /// Maximum acceptable age for a cached sample, milliseconds.
    pub min_time_millis: i64,
    /// How long `locate` waits for a one-shot fix, milliseconds.
    pub fix_timeout_ms: u64,
}

impl Default for GeotagConfig {
    fn default() -> Self {
        Self {
            min_distance_meters: 100,
            min_time_millis: 100,
            fix_timeout_ms: 10_000,
        }
    }
}

impl GeotagConfig {
    /// Load configuration from the config file, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| GeoError::Other(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| GeoError::Other(format!("Failed to parse config file: {}", e)))
    }

    /// Save configuration to the config file, creating the directory if
    /// needed.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| GeoError::Other(format!("Failed to create config directory: {}", e)))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| GeoError::Other(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, contents)
            .map_err(|e| GeoError::Other(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get config file path
    fn get_config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .map_err(|_| GeoError::Other("HOME environment variable not set".to_string()))?;

        Ok(PathBuf::from(home).join(".config").join("geotag").join("config.json"))
    }
}
