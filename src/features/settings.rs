//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::KeyBindings;
use super::reveal::{
    AnimationProfile, ControllerConfig, EasingKind, StaggerPolicy, TriggerOffset,
    DEFAULT_OFFSET_Y,
};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Scroll reveal tuning
    pub reveal: RevealSettings,
    /// Custom keybindings
    pub keybindings: KeyBindings,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplaySettings {
    pub dark_mode: bool,
    /// Power saving mode - disables animations and renders everything static
    pub power_saving_mode: bool,
}

/// Scroll reveal settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Trigger line, measured up from the viewport bottom
    pub trigger: TriggerOffset,
    /// Delay between consecutive cards of one grid
    pub stagger_step_ms: u64,
    pub duration_ms: u64,
    /// Vertical travel of the hidden pose
    pub offset_y: f32,
    pub easing: EasingKind,
    pub stagger_policy: StaggerPolicy,
    /// Extra timer-driven ticks, on top of scroll and resize events
    pub poll_interval_ms: Option<u64>,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            trigger: TriggerOffset::default(),
            stagger_step_ms: 200,
            duration_ms: 800,
            offset_y: DEFAULT_OFFSET_Y,
            easing: EasingKind::EaseOut,
            stagger_policy: StaggerPolicy::ByIndex,
            poll_interval_ms: None,
        }
    }
}

impl RevealSettings {
    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(self.stagger_step_ms)
    }

    /// Animation profile shared by every revealed card
    pub fn profile(&self) -> AnimationProfile {
        AnimationProfile {
            offset_y: self.offset_y.max(0.0),
            opacity_from: 0.0,
            duration: Duration::from_millis(self.duration_ms),
            easing: self.easing,
        }
    }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            default_trigger: self.trigger,
            stagger_policy: self.stagger_policy,
            ..ControllerConfig::default()
        }
    }

    /// Polling period, zero treated as disabled
    pub fn poll_interval(&self) -> Option<Duration> {
        self.poll_interval_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "folio", "Folio")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring settings at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.display.dark_mode = true;
        settings.reveal.trigger = TriggerOffset::Percent(20.0);
        settings.reveal.poll_interval_ms = Some(250);

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{ "display": { "dark_mode": true }, "reveal": { "stagger_step_ms": 150 } }"#,
        )
        .unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert!(loaded.display.dark_mode);
        assert!(!loaded.display.power_saving_mode);
        assert_eq!(loaded.reveal.stagger_step(), Duration::from_millis(150));
        assert_eq!(loaded.reveal.trigger, TriggerOffset::Pixels(100.0));
    }

    #[test]
    fn test_trigger_serialization() {
        let json = serde_json::to_string(&TriggerOffset::Percent(10.0)).unwrap();
        assert_eq!(json, r#"{"unit":"percent","value":10.0}"#);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(
            Settings::load_from_file(&missing),
            Err(SettingsError::Io(_))
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            Settings::load_from_file(&broken),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_reveal_settings_conversion() {
        let settings = RevealSettings {
            duration_ms: 600,
            offset_y: -10.0,
            poll_interval_ms: Some(0),
            trigger: TriggerOffset::Percent(25.0),
            ..Default::default()
        };

        let profile = settings.profile();
        assert_eq!(profile.duration, Duration::from_millis(600));
        assert_eq!(profile.offset_y, 0.0);
        assert_eq!(settings.poll_interval(), None);
        let config = settings.controller_config();
        assert_eq!(config.default_trigger, TriggerOffset::Percent(25.0));
        assert!(!config.auto_observe_mutations);
    }
}
