//! Runtime configuration.
//!
//! Everything has a default, so a config file only needs the keys it wants
//! to change:
//!
//! ```json
//! { "gate_delay_ms": 800, "guest_params": ["khach", "k"] }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{InviteError, InviteResult};
use crate::query::DEFAULT_GUEST_PARAMS;

/// Where bundled media lives relative to the app's working directory
pub const DEFAULT_ASSET_BASE: &str = "assets/";

/// Length of the envelope opening animation
pub const DEFAULT_GATE_DELAY_MS: u64 = 1500;

/// File name offered when exporting event data
pub const DEFAULT_EXPORT_FILE_NAME: &str = "wedding_data.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InviteConfig {
    /// Envelope opening delay in milliseconds
    pub gate_delay_ms: u64,
    /// Query parameters that may carry the guest name, highest priority first
    pub guest_params: Vec<String>,
    /// Suggested file name for exports
    pub export_file_name: String,
    /// Prefix for the bundled sample media
    pub asset_base: String,
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            gate_delay_ms: DEFAULT_GATE_DELAY_MS,
            guest_params: DEFAULT_GUEST_PARAMS.iter().map(|p| p.to_string()).collect(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            asset_base: DEFAULT_ASSET_BASE.to_string(),
        }
    }
}

impl InviteConfig {
    /// Read a JSON config file, filling unspecified keys with defaults
    pub fn load(path: impl AsRef<Path>) -> InviteResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> InviteResult<()> {
        if self.guest_params.iter().any(|p| p.trim().is_empty()) {
            return Err(InviteError::InvalidConfig(
                "guest_params must not contain empty names".to_string(),
            ));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(InviteError::InvalidConfig(
                "export_file_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn gate_delay(&self) -> Duration {
        Duration::from_millis(self.gate_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = InviteConfig::default();
        assert_eq!(config.gate_delay(), Duration::from_millis(1500));
        assert_eq!(config.guest_params, vec!["k", "guest", "to"]);
        assert_eq!(config.export_file_name, "wedding_data.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invite.json");
        std::fs::write(&path, r#"{ "gate_delay_ms": 800 }"#).unwrap();

        let config = InviteConfig::load(&path).unwrap();
        assert_eq!(config.gate_delay_ms, 800);
        assert_eq!(config.asset_base, DEFAULT_ASSET_BASE);
    }

    #[test]
    fn rejects_blank_guest_param() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invite.json");
        std::fs::write(&path, r#"{ "guest_params": ["k", " "] }"#).unwrap();

        let err = InviteConfig::load(&path).unwrap_err();
        assert!(matches!(err, InviteError::InvalidConfig(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = InviteConfig::load("/nonexistent/invite.json").unwrap_err();
        assert!(matches!(err, InviteError::Io(_)));
    }
}
