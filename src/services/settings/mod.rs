// Settings service
// Loads and saves SchedulerSettings as TOML in the platform config
// directory. Missing or malformed files fall back to defaults with a
// logged warning; settings problems never block the views.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::SchedulerSettings;

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService;

impl SettingsService {
    /// Platform config file path, e.g. `~/.config/taskgrid/settings.toml`
    /// on Linux.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "TaskGrid", "TaskGrid")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Load settings from the platform config path, falling back to
    /// defaults when the path is unavailable or the file is absent/broken.
    pub fn load_or_default() -> SchedulerSettings {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("No config directory available, using default settings");
                SchedulerSettings::default()
            }
        }
    }

    /// Load settings from a specific file, falling back to defaults.
    pub fn load_from(path: &Path) -> SchedulerSettings {
        if !path.exists() {
            log::info!("No settings file at {:?}, using defaults", path);
            return SchedulerSettings::default();
        }

        match fs::read_to_string(path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("Malformed settings file {:?}: {}, using defaults", path, err);
                    SchedulerSettings::default()
                }
            },
            Err(err) => {
                log::warn!("Failed to read settings {:?}: {}, using defaults", path, err);
                SchedulerSettings::default()
            }
        }
    }

    /// Persist settings to a specific file, creating parent directories.
    pub fn save_to(path: &Path, settings: &SchedulerSettings) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }
        let text = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(path, text).with_context(|| format!("Failed to write settings {:?}", path))?;
        Ok(())
    }

    /// Persist settings to the platform config path.
    pub fn save(settings: &SchedulerSettings) -> Result<()> {
        let path = Self::default_path()
            .context("No config directory available for settings")?;
        Self::save_to(&path, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        assert_eq!(SettingsService::load_from(&path), SchedulerSettings::default());
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "lane_count = \"three\"").unwrap();
        assert_eq!(SettingsService::load_from(&path), SchedulerSettings::default());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = SchedulerSettings::default();
        settings.lane_count = 5;
        settings.first_day_of_week = 1;

        SettingsService::save_to(&path, &settings).unwrap();
        assert_eq!(SettingsService::load_from(&path), settings);
    }
}
