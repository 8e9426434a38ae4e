//! Configuration handling for the demo

use crate::state::{FormSettings, MIN_LENGTH};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_SUBMIT_DELAY_MS: u64 = 400;
const DEFAULT_TICK_RATE_MS: u64 = 100;

/// User configuration, every key optional
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DemoConfig {
    /// Simulated latency before the form-state library acknowledges
    pub submit_delay_ms: Option<u64>,
    /// Event poll interval of the UI loop
    pub tick_rate_ms: Option<u64>,
    /// Minimum trimmed length for every field
    pub min_length: Option<usize>,
}

impl DemoConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formlab", "form-rerender-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, falling back to defaults
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: DemoConfig = serde_json::from_str(&content)?;
                tracing::debug!("loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS))
    }

    pub fn form_settings(&self) -> FormSettings {
        FormSettings {
            min_length: self.min_length.unwrap_or(MIN_LENGTH),
            submit_delay: Duration::from_millis(
                self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS),
            ),
        }
    }
}
