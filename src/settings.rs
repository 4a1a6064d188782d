//! User settings stored as settings.json in the app data directory
//!
//! Only window and layout preferences live here. Port values are never saved.

use crate::types::TabLabel;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Layout
    pub last_tab: TabLabel,
    pub mvm_expanded: bool,
    pub show_activity_log: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            last_tab: TabLabel::Buck0,
            mvm_expanded: false,
            show_activity_log: false,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.last_tab, TabLabel::Buck0);
        assert!(settings.window_w.is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(1200.0),
            last_tab: TabLabel::Cima,
            mvm_expanded: true,
            ..Default::default()
        };
        settings.save(dir.path());
        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.window_w, Some(1200.0));
        assert_eq!(loaded.last_tab, TabLabel::Cima);
        assert!(loaded.mvm_expanded);
    }

    #[test]
    fn partial_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"last_tab":"Board"}"#).unwrap();
        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.last_tab, TabLabel::Board);
        assert!(!loaded.show_activity_log);

        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(Settings::load(dir.path()).last_tab, TabLabel::Buck0);
    }
}
