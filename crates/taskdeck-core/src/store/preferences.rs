use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::PREFERENCES_FILE;
use crate::models::DisplayMode;

/// App preferences (persisted to JSON file)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Preferences {
    #[serde(default)]
    pub display_mode: DisplayMode,
}

/// Storage for preferences; every setter writes through immediately.
pub struct PreferenceStore {
    path: PathBuf,
    prefs: Preferences,
}

impl PreferenceStore {
    pub fn new(data_dir: &Path) -> Self {
        let path = data_dir.join(PREFERENCES_FILE);
        let prefs = Self::load_from_file(&path).unwrap_or_default();
        Self { path, prefs }
    }

    fn load_from_file(path: &Path) -> Option<Preferences> {
        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    fn save_to_file(&self) {
        if let Ok(json) = serde_json::to_string_pretty(&self.prefs) {
            if let Err(err) = fs::write(&self.path, json) {
                tracing::warn!(error = %err, "failed to persist preferences");
            }
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.prefs.display_mode
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.prefs.display_mode = mode;
        self.save_to_file();
    }

    /// Advance to the next mode in the fixed order, persisting immediately.
    pub fn cycle_display_mode(&mut self) -> DisplayMode {
        let next = self.prefs.display_mode.cycle_next();
        self.set_display_mode(next);
        next
    }
}
