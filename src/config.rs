//! Bridge configuration.
//!
//! Every field has a default matching stock Android behavior, so an empty TOML
//! document (or [`BridgeConfig::default`]) is a valid configuration.
//!
//! ```toml
//! host_keys = [24, 25, 27, 168, 169]
//! synthesize_scancodes = true
//! hat_policy = "ignore_trailing"
//! request_timeout_ms = 2000
//! ```

use crate::error::{BridgeError, Result};
use crate::event::keycode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// What to do with a hat axis that has no partner (odd number of hat ranges).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HatPolicy {
    /// Register the device, dropping the unpaired trailing hat axis.
    #[default]
    IgnoreTrailing,
    /// Do not register the device at all.
    Reject,
}

/// Serializable bridge settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Keycodes never routed; they stay with the host (volume, camera, zoom).
    pub host_keys: Vec<i32>,
    /// Generate a scancode per ASCII code point committed by the soft keyboard.
    pub synthesize_scancodes: bool,
    pub hat_policy: HatPolicy,
    /// Upper bound for blocking UI-thread requests.
    pub request_timeout_ms: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            host_keys: vec![
                keycode::VOLUME_DOWN,
                keycode::VOLUME_UP,
                keycode::CAMERA,
                keycode::ZOOM_IN,
                keycode::ZOOM_OUT,
            ],
            synthesize_scancodes: true,
            hat_policy: HatPolicy::default(),
            request_timeout_ms: 2000,
        }
    }
}

impl BridgeConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| BridgeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    #[inline]
    pub fn is_host_key(&self, keycode: i32) -> bool {
        self.host_keys.contains(&keycode)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = BridgeConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, BridgeConfig::default());
        assert!(cfg.is_host_key(keycode::VOLUME_UP));
        assert!(cfg.is_host_key(keycode::ZOOM_OUT));
        assert!(!cfg.is_host_key(keycode::ENTER));
    }

    #[test]
    fn partial_document_overrides_fields() {
        let cfg = BridgeConfig::from_toml_str(
            r#"
            synthesize_scancodes = false
            hat_policy = "reject"
            "#,
        )
        .unwrap();
        assert!(!cfg.synthesize_scancodes);
        assert_eq!(cfg.hat_policy, HatPolicy::Reject);
        assert_eq!(cfg.request_timeout(), Duration::from_millis(2000));
    }

    #[test]
    fn bad_policy_is_a_parse_error() {
        let err = BridgeConfig::from_toml_str(r#"hat_policy = "guess""#).unwrap_err();
        assert!(matches!(err, BridgeError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = BridgeConfig::load("/definitely/not/here.toml").unwrap_err();
        match err {
            BridgeError::ConfigIo { path, .. } => assert!(path.ends_with("here.toml")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
