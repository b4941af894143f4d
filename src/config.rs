// config.rs - Window and session configuration
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{DisplayError, Result, DEFAULT_QUEUE_CAPACITY};

const DEFAULT_TITLE: &str = "pixel-display";
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;

/// Everything needed to open a session. Missing JSON fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    /// Client area width in physical pixels
    pub width: u32,
    /// Client area height in physical pixels
    pub height: u32,
    /// Events held before new ones are dropped
    pub queue_capacity: usize,
    pub resizable: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            resizable: true,
        }
    }
}

impl DisplayConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DisplayError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| DisplayError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| DisplayError::Config(e.to_string()))
    }

    /// Reject sizes no surface can be allocated for
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DisplayError::AllocationFailure(format!(
                "window dimensions {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        if self.queue_capacity == 0 {
            return Err(DisplayError::Config(
                "queue_capacity must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.queue_capacity, 64);
        assert!(config.resizable);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = DisplayConfig::from_json_str(r#"{ "title": "demo", "width": 320 }"#).unwrap();
        assert_eq!(config.title, "demo");
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 600);
        assert_eq!(config.queue_capacity, 64);
    }

    #[test]
    fn test_json_round_trip() {
        let config = DisplayConfig::new("round", 640, 480)
            .with_queue_capacity(16)
            .with_resizable(false);
        let json = config.to_json().unwrap();
        assert_eq!(DisplayConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        assert!(matches!(
            DisplayConfig::from_json_str("{ width: }"),
            Err(DisplayError::Config(_))
        ));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = DisplayConfig::default().with_queue_capacity(0);
        assert!(matches!(config.validate(), Err(DisplayError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let path = std::env::temp_dir().join("pixel-display-does-not-exist.json");
        assert!(matches!(
            DisplayConfig::from_json_file(&path),
            Err(DisplayError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "pixel-display-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "width": 100, "height": 50, "resizable": false }"#).unwrap();
        let config = DisplayConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!((config.width, config.height), (100, 50));
        assert!(!config.resizable);
    }
}
