//! Persistent inspector settings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use mapiwire_codec::DecodeLimits;

/// Settings read from `settings.json` in the user config directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Limits applied while decoding.
    pub limits: DecodeLimits,
}

impl Settings {
    /// Returns the settings file location.
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mapiwire")
            .join("settings.json")
    }

    /// Loads settings, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::path();
        if !path.exists() {
            tracing::debug!(?path, "No settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&contents).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    /// Parses settings from JSON text.
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_from_json() {
        let settings =
            Settings::from_json(r#"{"limits":{"max_auxiliary_buffer_size":64}}"#).unwrap();
        assert_eq!(settings.limits.max_auxiliary_buffer_size, 64);
    }

    #[test]
    fn test_settings_missing_fields() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_invalid() {
        assert!(Settings::from_json("{\"limits\": 3}").is_err());
    }
}
