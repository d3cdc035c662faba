//! Game settings
//!
//! Read from an optional JSON file at startup. Missing fields fall back to
//! the defaults, so a file only needs the values it changes:
//!
//! ```json
//! { "time_limit_secs": 600, "screen_width": 1280, "screen_height": 720 }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    /// Display name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Case-insensitive preset name, as given in `MOUSE_MASTER_QUALITY`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Triangle segments used for a full circle
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 16,
            QualityPreset::Medium => 32,
            QualityPreset::High => 64,
        }
    }
}

/// Errors raised while loading settings
#[derive(Debug)]
pub enum SettingsError {
    /// The settings file could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The settings JSON is malformed
    Parse(serde_json::Error),
    /// A value is outside its allowed range
    Invalid {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
    /// The quality override names no preset
    UnknownQuality(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "cannot read settings file {}: {}", path.display(), source)
            }
            SettingsError::Parse(err) => write!(f, "invalid settings JSON: {}", err),
            SettingsError::Invalid {
                name,
                value,
                expected,
            } => write!(f, "setting '{}' = {} must be {}", name, value, expected),
            SettingsError::UnknownQuality(name) => {
                write!(f, "unknown quality preset '{}' (low, medium, high)", name)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Parse(err) => Some(err),
            SettingsError::Invalid { .. } | SettingsError::UnknownQuality(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

/// Convenience alias: a `Result` using `SettingsError` as the error type.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mesh quality preset
    pub quality: QualityPreset,

    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Frames per second the loop is paced at
    pub fps: u32,
    /// Draw the ring cursor during play
    pub show_cursor: bool,

    // === Game ===
    /// Levels in a full run
    pub max_levels: u32,
    /// Session length before the parental lock (seconds)
    pub time_limit_secs: u64,
    /// RNG seed; random when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: FPS,
            show_cursor: true,

            max_levels: MAX_LEVELS,
            time_limit_secs: TIME_LIMIT_SECONDS,
            seed: None,
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file
    pub const PATH_ENV: &'static str = "MOUSE_MASTER_SETTINGS";
    /// Environment variable overriding the quality preset
    pub const QUALITY_ENV: &'static str = "MOUSE_MASTER_QUALITY";

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from the file named by `MOUSE_MASTER_SETTINGS`, or use defaults,
    /// then apply `MOUSE_MASTER_QUALITY` if set
    pub fn from_env() -> SettingsResult<Self> {
        let mut settings = match std::env::var_os(Self::PATH_ENV) {
            Some(path) => Self::load(Path::new(&path))?,
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        };
        if let Ok(name) = std::env::var(Self::QUALITY_ENV) {
            settings.override_quality(&name)?;
        }
        Ok(settings)
    }

    /// Replace the quality preset by name
    pub fn override_quality(&mut self, name: &str) -> SettingsResult<()> {
        let quality = QualityPreset::parse(name)
            .ok_or_else(|| SettingsError::UnknownQuality(name.to_string()))?;
        log::info!("Quality preset: {}", quality.as_str());
        self.quality = quality;
        Ok(())
    }

    /// Check every value is in range
    pub fn validate(&self) -> SettingsResult<()> {
        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        at_least_one("fps", self.fps as u64)?;
        at_least_one("max_levels", self.max_levels as u64)?;
        at_least_one("time_limit_secs", self.time_limit_secs)?;
        Ok(())
    }

    /// Time budget for one frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }
}

fn positive(name: &'static str, value: f32) -> SettingsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            name,
            value: value as f64,
            expected: "a positive number",
        })
    }
}

fn at_least_one(name: &'static str, value: u64) -> SettingsResult<()> {
    if value >= 1 {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            name,
            value: value as f64,
            expected: "at least 1",
        })
    }
}
