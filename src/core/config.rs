use crate::models::gesture::{RecognitionError, RecognitionResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Recognition pipeline configuration.
///
/// Classification thresholds are deliberately absent: they live as constants in
/// `core::predicates` and changing them is a code change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Minimum time between classified frames (0 = classify every frame)
    pub detection_interval_ms: u64,
    /// Hands requested from the tracker; only single-hand tracking is supported
    pub max_hands: u32,
    /// Tracked hands scored below this are treated as absent (0.0-1.0)
    pub min_detection_confidence: f64,
    /// Frame size used when projecting landmarks for an overlay
    pub frame_width: u32,
    pub frame_height: u32,
    /// Bound of the frame channel feeding a recognition session
    pub channel_capacity: usize,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            detection_interval_ms: 100, // 10 detections per second at most
            max_hands: 1,
            min_detection_confidence: 0.5,
            frame_width: 640,
            frame_height: 480,
            channel_capacity: 100,
        }
    }
}

impl RecognitionConfig {
    /// Load configuration from the default path, creating it with defaults if it doesn't exist
    pub fn load() -> RecognitionResult<Self> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> RecognitionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: RecognitionConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> RecognitionResult<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> RecognitionResult<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> RecognitionResult<()> {
        if self.detection_interval_ms > 10_000 {
            return Err(RecognitionError::InvalidConfig(format!(
                "Invalid detection interval: {}ms. Must be at most 10000ms",
                self.detection_interval_ms
            )));
        }

        if self.max_hands != 1 {
            return Err(RecognitionError::InvalidConfig(format!(
                "Invalid max hands: {}. Only single-hand tracking is supported",
                self.max_hands
            )));
        }

        if !(0.0..=1.0).contains(&self.min_detection_confidence) {
            return Err(RecognitionError::InvalidConfig(format!(
                "Invalid min detection confidence: {}. Must be between 0.0 and 1.0",
                self.min_detection_confidence
            )));
        }

        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(RecognitionError::InvalidConfig(format!(
                "Invalid frame size: {}x{}. Both dimensions must be non-zero",
                self.frame_width, self.frame_height
            )));
        }

        if self.channel_capacity == 0 {
            return Err(RecognitionError::InvalidConfig(
                "Channel capacity must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Reset the default config file to defaults
    pub fn reset() -> RecognitionResult<Self> {
        let config = Self::default();
        config.save()?;
        Ok(config)
    }

    /// Get the configuration file path
    pub fn get_config_path() -> RecognitionResult<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| {
                RecognitionError::InvalidConfig("Could not determine home directory".to_string())
            })?;

        let mut path = PathBuf::from(home);
        path.push(".gesture_recognition");
        path.push("config");
        path.push("settings.json");

        Ok(path)
    }
}
