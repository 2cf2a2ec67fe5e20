use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    cli::{Cli, DEFAULT_REFRESH_SECS, MIN_REFRESH_SECS},
    domain::forecast::{Location, preset_locations},
};

pub const CONFIG_DIR_ENV: &str = "AQI_FORECAST_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub locations: Vec<Location>,
    pub last_location: Option<String>,
    pub refresh_interval_secs: u64,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            locations: preset_locations(),
            last_location: None,
            refresh_interval_secs: DEFAULT_REFRESH_SECS,
        }
    }
}

impl RuntimeSettings {
    /// Index into `locations` of the remembered location, else the first one.
    pub fn last_location_index(&self) -> usize {
        self.last_location
            .as_deref()
            .and_then(|name| self.position_of(name))
            .unwrap_or(0)
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.locations
            .iter()
            .position(|loc| loc.name.eq_ignore_ascii_case(name))
    }

    /// Adds `location` (or replaces a saved one with the same name) and returns its index.
    pub fn upsert_location(&mut self, location: Location) -> usize {
        if let Some(idx) = self.position_of(&location.name) {
            self.locations[idx] = location;
            idx
        } else {
            self.locations.push(location);
            self.locations.len() - 1
        }
    }
}

/// Loads settings from disk when enabled, then layers CLI overrides on top.
///
/// Returns the settings, the index of the starting location, and the path
/// changes should be written back to.
pub fn load_runtime_settings(
    cli: &Cli,
    enable_disk: bool,
) -> anyhow::Result<(RuntimeSettings, usize, Option<PathBuf>)> {
    let path = if enable_disk { settings_path() } else { None };
    let mut settings = path
        .as_deref()
        .and_then(read_settings)
        .unwrap_or_default();

    if settings.locations.is_empty() {
        settings.locations = preset_locations();
    }
    settings.refresh_interval_secs = cli
        .effective_refresh_secs()
        .unwrap_or(settings.refresh_interval_secs.max(MIN_REFRESH_SECS));

    let index = if let Some(location) = cli.coordinate_location() {
        settings.upsert_location(location)
    } else if let Some(city) = cli.city.as_deref() {
        settings.position_of(city).with_context(|| {
            format!("unknown city {city:?}; pass --lat and --lon to add it")
        })?
    } else {
        settings.last_location_index()
    };

    Ok((settings, index, path))
}

/// Reads a settings file, `None` when it is missing or unreadable.
pub fn read_settings(path: &Path) -> Option<RuntimeSettings> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<RuntimeSettings>(&content) {
        Ok(settings) => Some(settings),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring corrupt settings file");
            None
        }
    }
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("aqi-forecast")
            .join("settings.json"),
    )
}

#[cfg(test)]
mod tests;
