//! Configuration handling for the TUI

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResumeConfig {
    /// Width of the preview pane as a percentage of the screen
    pub preview_percent: Option<u16>,
    /// Show key hints in the status bar
    pub show_hints: Option<bool>,
}

#[allow(dead_code)]
impl ResumeConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "resumetui", "resume-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, falling back to defaults on any problem
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!("Ignoring malformed config at {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                tracing::warn!("Could not read config at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}
