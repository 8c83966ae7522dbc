//! Game settings
//!
//! Loaded from a JSON file next to the binary. Missing fields take their
//! defaults, so a file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DOT_SIZE, MIN_RADIUS, STROKE_WIDTH, WATCHDOG_SECS};

/// Default settings file name
pub const SETTINGS_FILE: &str = "perfect-circle.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid setting {field}: {value}")]
    Invalid { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Rules ===
    /// Samples closer than this to the dot fail the attempt
    pub min_radius: f64,
    /// Seconds allowed per attempt
    pub watchdog_secs: f64,

    // === Display ===
    pub stroke_width: f64,
    pub dot_size: f64,
    /// Prompt shown above the dot
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_radius: MIN_RADIUS,
            watchdog_secs: WATCHDOG_SECS,
            stroke_width: STROKE_WIDTH,
            dot_size: DOT_SIZE,
            prompt: "Try to draw a perfect circle!".to_string(),
        }
    }
}

impl Settings {
    /// Reject values the session can't work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let checks = [
            ("min_radius", self.min_radius, self.min_radius >= 0.0),
            ("watchdog_secs", self.watchdog_secs, self.watchdog_secs > 0.0),
            ("stroke_width", self.stroke_width, self.stroke_width > 0.0),
            ("dot_size", self.dot_size, self.dot_size >= 0.0),
        ];
        for (field, value, ok) in checks {
            if !ok || !value.is_finite() {
                return Err(SettingsError::Invalid { field, value });
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load from `path`, falling back to defaults when absent or broken
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.min_radius, 35.0);
        assert_eq!(s.watchdog_secs, 6.0);
        assert_eq!(s.stroke_width, 4.0);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{ "watchdog_secs": 10.0 }"#).unwrap();
        assert_eq!(s.watchdog_secs, 10.0);
        assert_eq!(s.min_radius, 35.0);
        assert_eq!(s.prompt, "Try to draw a perfect circle!");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "watchdog_secs": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "watchdog_secs",
                ..
            }
        ));
        let err = Settings::from_json(r#"{ "min_radius": -1.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "min_radius", .. }));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            Settings::from_json("{ nope"),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("perfect-circle-{}.json", std::process::id()));
        let mut s = Settings::default();
        s.min_radius = 20.0;
        s.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), s);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_falls_back() {
        let s = Settings::load_or_default("/nonexistent/perfect-circle.json");
        assert_eq!(s, Settings::default());
    }
}
