// Settings module
// User-editable configuration for the countdown window

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 3;
pub const MIN_UTC_OFFSET_HOURS: i32 = -12;
pub const MAX_UTC_OFFSET_HOURS: i32 = 14;

pub const DEFAULT_WISH_MESSAGE: &str = "Wishing you a day filled with laughter, love, and all the \
sparkle you bring to everyone's life. You are one of a kind, may your year ahead be full of joy, \
success, and unforgettable moments. 💖";

/// Validation failures for [`BirthdaySettings`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("utc offset {0}h is outside the supported range of -12h..=+14h")]
    OffsetOutOfRange(i32),
    #[error("unknown time zone '{0}'")]
    UnknownTimeZone(String),
    #[error("celebrant name must not be empty")]
    EmptyCelebrantName,
}

/// Where "midnight" is measured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeZoneSetting {
    /// A fixed offset from UTC in whole hours
    Offset { utc_offset_hours: i32 },
    /// An IANA zone name such as `Asia/Riyadh`
    Named { name: String },
}

impl Default for TimeZoneSetting {
    fn default() -> Self {
        Self::Offset {
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the operating system's light/dark mode
    System,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self::Light
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthdaySettings {
    pub celebrant_name: String,
    pub sender_name: String,
    pub wish_message: String,
    pub theme: ThemePreference,
    pub window_width: f32,
    pub window_height: f32,
    pub desktop_notification: bool,
    /// Kept last so it serializes as a trailing TOML table
    pub time_zone: TimeZoneSetting,
}

impl Default for BirthdaySettings {
    fn default() -> Self {
        Self {
            celebrant_name: "Gigi".to_string(),
            sender_name: "Yara".to_string(),
            wish_message: DEFAULT_WISH_MESSAGE.to_string(),
            theme: ThemePreference::default(),
            window_width: 760.0,
            window_height: 620.0,
            desktop_notification: false,
            time_zone: TimeZoneSetting::default(),
        }
    }
}

impl BirthdaySettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.celebrant_name.trim().is_empty() {
            return Err(SettingsError::EmptyCelebrantName);
        }

        match &self.time_zone {
            TimeZoneSetting::Offset { utc_offset_hours } => {
                if !(MIN_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(utc_offset_hours) {
                    return Err(SettingsError::OffsetOutOfRange(*utc_offset_hours));
                }
            }
            TimeZoneSetting::Named { name } => {
                if name.parse::<chrono_tz::Tz>().is_err() {
                    return Err(SettingsError::UnknownTimeZone(name.clone()));
                }
            }
        }

        Ok(())
    }

    /// Name shown in the header, trimmed.
    pub fn display_name(&self) -> &str {
        self.celebrant_name.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = BirthdaySettings::default();
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(
            settings.time_zone,
            TimeZoneSetting::Offset {
                utc_offset_hours: 3
            }
        );
        assert!(!settings.desktop_notification);
    }

    #[test]
    fn test_offset_out_of_range_is_rejected() {
        let settings = BirthdaySettings {
            time_zone: TimeZoneSetting::Offset {
                utc_offset_hours: 15,
            },
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::OffsetOutOfRange(15)));
    }

    #[test]
    fn test_unknown_zone_is_rejected() {
        let settings = BirthdaySettings {
            time_zone: TimeZoneSetting::Named {
                name: "Mars/Olympus_Mons".to_string(),
            },
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::UnknownTimeZone("Mars/Olympus_Mons".to_string()))
        );
    }

    #[test]
    fn test_named_zone_is_accepted() {
        let settings = BirthdaySettings {
            time_zone: TimeZoneSetting::Named {
                name: "Asia/Riyadh".to_string(),
            },
            ..Default::default()
        };
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let settings = BirthdaySettings {
            celebrant_name: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::EmptyCelebrantName));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: BirthdaySettings = toml::from_str(
            r#"
            celebrant_name = "Noor"
            theme = "dark"
            time_zone = { name = "Europe/London" }
            "#,
        )
        .unwrap();

        assert_eq!(settings.celebrant_name, "Noor");
        assert_eq!(settings.theme, ThemePreference::Dark);
        assert_eq!(
            settings.time_zone,
            TimeZoneSetting::Named {
                name: "Europe/London".to_string()
            }
        );
        assert_eq!(settings.sender_name, "Yara");
    }
}
