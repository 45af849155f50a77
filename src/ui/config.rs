use egui::Pos2;
use log::warn;
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use lapwatch::LapwatchError;
use lapwatch::ticker::DEFAULT_TICK_INTERVAL;

const CONFIG_DIR_NAME: &str = "lapwatch";
const CONFIG_FILE_NAME: &str = "config.json";
const MAX_TICK_INTERVAL_MS: u64 = 1000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct WindowPosition {
    pub(crate) x: f32,
    pub(crate) y: f32,
}

impl Default for WindowPosition {
    fn default() -> Self {
        Self { x: 0., y: 0. }
    }
}

impl From<WindowPosition> for Pos2 {
    fn from(value: WindowPosition) -> Self {
        Pos2::new(value.x, value.y)
    }
}

impl From<Pos2> for WindowPosition {
    fn from(value: Pos2) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

/// Window settings. Stopwatch and lap state are deliberately not part of it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) tick_interval_ms: u64,
    pub(crate) always_on_top: bool,
    pub(crate) window_position: WindowPosition,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            always_on_top: false,
            window_position: WindowPosition::default(),
        }
    }
}

pub(crate) fn validate_tick_interval(value: u64) -> Result<u64, LapwatchError> {
    if value == 0 || value > MAX_TICK_INTERVAL_MS {
        return Err(LapwatchError::InvalidTickInterval { value });
    }
    Ok(value)
}

impl AppConfig {
    pub(crate) fn default_path() -> Result<PathBuf, LapwatchError> {
        Ok(dirs::config_dir()
            .ok_or(LapwatchError::NoConfigDir)?
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME))
    }

    /// Loads the config from the user's config directory. Any problem is
    /// logged and treated as if there was no config file.
    pub(crate) fn from_local_file() -> Option<Self> {
        let loaded = Self::default_path().and_then(|path| Self::load_from(&path));
        match loaded {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file: {}", e);
                None
            }
        }
    }

    pub(crate) fn load_from(path: &Path) -> Result<Option<Self>, LapwatchError> {
        if !path.exists() {
            return Ok(None);
        }
        let file =
            std::fs::File::open(path).map_err(|e| LapwatchError::ConfigIOError { source: e })?;
        let mut config: Self =
            serde_json::from_reader(file).map_err(|e| LapwatchError::ConfigParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        if validate_tick_interval(config.tick_interval_ms).is_err() {
            warn!(
                "Tick interval of {}ms in config file is out of range, using default",
                config.tick_interval_ms
            );
            config.tick_interval_ms = Self::default().tick_interval_ms;
        }
        Ok(Some(config))
    }

    pub(crate) fn save(&self) -> Result<(), LapwatchError> {
        self.save_to(&Self::default_path()?)
    }

    pub(crate) fn save_to(&self, path: &Path) -> Result<(), LapwatchError> {
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| LapwatchError::ConfigIOError { source: e })?;
        }

        let file = std::fs::File::create(path)
            .map_err(|e| LapwatchError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| LapwatchError::ConfigSerializeError { source: e })
    }

    pub(crate) fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_nothing() {
        let dir = TempDir::new().unwrap();
        let loaded = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            tick_interval_ms: 25,
            always_on_top: true,
            window_position: WindowPosition { x: 120., y: 40. },
        };

        config.save_to(&path).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.tick_interval(), Duration::from_millis(25));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "always_on_top": true }"#).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap().unwrap();
        assert!(loaded.always_on_top);
        assert_eq!(loaded.tick_interval_ms, 10);
        assert_eq!(loaded.window_position, WindowPosition::default());
    }

    #[test]
    fn test_out_of_range_tick_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "tick_interval_ms": 0 }"#).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap().unwrap();
        assert_eq!(loaded.tick_interval_ms, 10);
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        match AppConfig::load_from(&path) {
            Err(LapwatchError::ConfigParseError { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_tick_interval() {
        assert_eq!(validate_tick_interval(10).unwrap(), 10);
        assert_eq!(validate_tick_interval(1000).unwrap(), 1000);
        assert!(matches!(
            validate_tick_interval(0),
            Err(LapwatchError::InvalidTickInterval { value: 0 })
        ));
        assert!(validate_tick_interval(1001).is_err());
    }
}
