use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::settings::BirthdaySettings;

/// Read settings from a TOML file. A missing file yields `None`.
pub fn load_settings_file(path: &Path) -> Result<Option<BirthdaySettings>> {
    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    let settings = toml::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    Ok(Some(settings))
}

pub fn save_settings_file(path: &Path, settings: &BirthdaySettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = toml::to_string_pretty(settings)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write settings to {}", path.display()))?;
    Ok(())
}

fn map_deser_error(err: toml::de::Error, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize settings from {}",
        path.display()
    ))
}
