use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::ProjectDirs;

use super::persistence::{load_settings_file, save_settings_file};
use crate::models::settings::BirthdaySettings;

const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Loads and saves [`BirthdaySettings`] from a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform config directory, or the working
    /// directory when none can be resolved.
    pub fn at_default_location() -> Self {
        Self::new(Self::resolve_default_path())
    }

    pub fn resolve_default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "BirthdayCountdown", "BirthdayCountdown") {
            dirs.config_dir().join(SETTINGS_FILE_NAME)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE_NAME)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate. `Ok(None)` when no file exists yet.
    pub fn get(&self) -> Result<Option<BirthdaySettings>> {
        let Some(settings) = load_settings_file(&self.path)? else {
            return Ok(None);
        };
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;
        Ok(Some(settings))
    }

    pub fn update(&self, settings: &BirthdaySettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        save_settings_file(&self.path, settings)
    }

    /// Start-up loading: never fails. A missing file is created with
    /// defaults; a broken one is left untouched and defaults are used.
    pub fn load_or_default(&self) -> BirthdaySettings {
        match self.get() {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", self.path.display());
                settings
            }
            Ok(None) => {
                let settings = BirthdaySettings::default();
                if let Err(e) = self.update(&settings) {
                    log::warn!("Failed to write default settings: {:#}", e);
                } else {
                    log::info!("Wrote default settings to {}", self.path.display());
                }
                settings
            }
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                BirthdaySettings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{ThemePreference, TimeZoneSetting};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join("settings.toml"));

        let settings = service.load_or_default();
        assert_eq!(settings, BirthdaySettings::default());
        assert!(service.path().exists());
        assert_eq!(service.get().unwrap(), Some(BirthdaySettings::default()));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("settings.toml"));

        let settings = BirthdaySettings {
            celebrant_name: "Noor".to_string(),
            time_zone: TimeZoneSetting::Named {
                name: "Asia/Dubai".to_string(),
            },
            theme: ThemePreference::System,
            desktop_notification: true,
            ..Default::default()
        };
        service.update(&settings).unwrap();

        assert_eq!(service.get().unwrap(), Some(settings));
    }

    #[test]
    fn test_broken_file_falls_back_without_overwriting() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "celebrant_name = [not toml").unwrap();
        let service = SettingsService::new(&path);

        assert!(service.get().is_err());
        assert_eq!(service.load_or_default(), BirthdaySettings::default());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "celebrant_name = [not toml"
        );
    }

    #[test]
    fn test_invalid_values_are_rejected_on_update() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("settings.toml"));
        let settings = BirthdaySettings {
            time_zone: TimeZoneSetting::Offset {
                utc_offset_hours: 20,
            },
            ..Default::default()
        };

        assert!(service.update(&settings).is_err());
        assert!(!service.path().exists());
    }
}
