//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/heartpad/config.yaml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Seconds between automatic saves
    #[serde(default = "default_autosave_interval_secs")]
    pub autosave_interval_secs: u64,
    /// How long transient status messages stay visible
    #[serde(default = "default_status_duration_ms")]
    pub status_duration_ms: u64,
    /// File name suggested for Word export
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
    /// Override for the key-value store file (defaults to the config dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_file: Option<PathBuf>,
}

fn default_autosave_interval_secs() -> u64 {
    10 * 60
}

fn default_status_duration_ms() -> u64 {
    3000
}

fn default_export_file_name() -> String {
    "document.docx".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_interval_secs: default_autosave_interval_secs(),
            status_duration_ms: default_status_duration_ms(),
            export_file_name: default_export_file_name(),
            storage_file: None,
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults if unreadable
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to a specific file, creating its directory if needed
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn autosave_interval(&self) -> Duration {
        Duration::from_secs(self.autosave_interval_secs)
    }

    pub fn status_duration(&self) -> Duration {
        Duration::from_millis(self.status_duration_ms)
    }

    /// Where the key-value store lives
    pub fn storage_path(&self) -> Option<PathBuf> {
        self.storage_file
            .clone()
            .or_else(crate::config_paths::storage_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.autosave_interval(), Duration::from_secs(600));
        assert_eq!(config.status_duration(), Duration::from_secs(3));
        assert_eq!(config.export_file_name, "document.docx");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: EditorConfig = serde_yaml::from_str("autosave_interval_secs: 30\n").unwrap();
        assert_eq!(config.autosave_interval_secs, 30);
        assert_eq!(config.status_duration_ms, 3000);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = EditorConfig {
            export_file_name: "essay.docx".to_string(),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(EditorConfig::load_from(&path), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EditorConfig::load_from(&dir.path().join("absent.yaml"));
        assert_eq!(config, EditorConfig::default());
    }
}
