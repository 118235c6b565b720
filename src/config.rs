//! Gamepad configuration.
//!
//! [`PadConfig`] is a small serde struct read from TOML (default) or JSON. Every
//! field has a default, so an empty file is a valid config.
//!
//! ```toml
//! name = "driver"
//! trigger_threshold = 0.3
//! log_events = true
//! release_on_disconnect = true
//! xinput_slot = 0
//! ```

use crate::error::ConfigError;
use crate::snapshot::DEFAULT_TRIGGER_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of XInput user slots.
pub const XINPUT_SLOTS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Label used in log records.
    pub name: String,
    /// Analog trigger level above which a trigger counts as pressed, in `[0, 1)`.
    pub trigger_threshold: f32,
    /// Attach an [`EventLogger`](crate::logger::EventLogger) to every button.
    pub log_events: bool,
    /// Feed one all-released snapshot when the source disconnects.
    pub release_on_disconnect: bool,
    /// XInput user slot (`0..4`), used by the Windows backend.
    pub xinput_slot: u32,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            name: "gamepad".to_string(),
            trigger_threshold: DEFAULT_TRIGGER_THRESHOLD,
            log_events: false,
            release_on_disconnect: true,
            xinput_slot: 0,
        }
    }
}

impl PadConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: PadConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: PadConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads a config file; `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_trigger_threshold(self.trigger_threshold)?;
        check_xinput_slot(self.xinput_slot)?;
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("name cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Trigger threshold must lie in `[0, 1)`; shared by config and sources.
pub(crate) fn check_trigger_threshold(threshold: f32) -> Result<(), ConfigError> {
    if !(0.0..1.0).contains(&threshold) {
        return Err(ConfigError::Invalid(format!(
            "trigger_threshold must be in [0, 1), got {threshold}"
        )));
    }
    Ok(())
}

pub(crate) fn check_xinput_slot(slot: u32) -> Result<(), ConfigError> {
    if slot >= XINPUT_SLOTS {
        return Err(ConfigError::Invalid(format!(
            "xinput_slot must be below {XINPUT_SLOTS}, got {slot}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(PadConfig::from_toml_str("").unwrap(), PadConfig::default());
    }

    #[test]
    fn partial_toml() {
        let cfg = PadConfig::from_toml_str("name = \"operator\"\ntrigger_threshold = 0.25\n").unwrap();
        assert_eq!(cfg.name, "operator");
        assert_eq!(cfg.trigger_threshold, 0.25);
        assert!(cfg.release_on_disconnect);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            PadConfig::from_toml_str("trigger_threshold = 1.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PadConfig::from_json_str(r#"{"xinput_slot": 4}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PadConfig::from_toml_str("log_events = \"yes\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn rejects_blank_name() {
        let err = PadConfig::from_toml_str("name = \"   \"").unwrap_err();
        assert!(matches!(&err, ConfigError::Invalid(msg) if msg.contains("name")));
    }

    #[test]
    fn load_picks_format_from_extension() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"{{"log_events": true}}"#).unwrap();
        assert!(PadConfig::load(json.path()).unwrap().log_events);

        let mut toml = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(toml, "xinput_slot = 2").unwrap();
        assert_eq!(PadConfig::load(toml.path()).unwrap().xinput_slot, 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PadConfig::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
