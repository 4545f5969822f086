use crate::geography::find_city;
use crate::markers::MarkerLayout;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub map: MapSettings,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapSettings {
    /// Start with the day/night overlay on
    pub day_night: bool,
    /// Seconds between redraws
    pub tick: f32,
    /// Catalog cities to mark; empty keeps the built-in markers
    pub cities: Vec<String>,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            day_night: false,
            tick: 1.0,
            cities: Vec::new(),
        }
    }
}

impl Settings {
    /// Load from the default location, falling back to defaults on any error
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_path())
    }

    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|err| {
            warn!("{err}; using default settings");
            Self::default()
        })
    }

    /// Load from `path`. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("worldtime")
            .join("config.toml")
    }
}

impl MapSettings {
    /// Markers for the configured city list. Names not in the catalog are
    /// skipped with a warning.
    pub fn marker_layout(&self) -> MarkerLayout {
        if self.cities.is_empty() {
            return MarkerLayout::Native;
        }

        let cities = self
            .cities
            .iter()
            .filter_map(|name| {
                let city = find_city(name);
                if city.is_none() {
                    warn!(city = %name, "unknown city in config, skipping");
                }
                city
            })
            .collect();
        MarkerLayout::Cities(cities)
    }

    /// Tick interval clamped to something a terminal can keep up with
    pub fn tick_seconds(&self) -> f32 {
        if self.tick.is_finite() {
            self.tick.clamp(0.05, 60.0)
        } else {
            1.0
        }
    }
}
