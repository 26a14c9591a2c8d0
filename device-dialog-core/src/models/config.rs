use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::DialogError;

/// Configuration for the dialog layer.
///
/// Passed explicitly into the calls that need it; nothing reads it from
/// global state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DialogConfig {
    /// Support page linked from inline failure panels. None hides the link.
    pub support_url: Option<String>,

    /// Where opt-out preferences are persisted, or None to keep them in memory.
    pub preferences_path: Option<PathBuf>,
}

impl DialogConfig {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(url) = &self.support_url {
            let url = url.trim();
            if url.is_empty() {
                return Err("support url must not be empty".into());
            }
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(format!("unsupported support url scheme: {}", url));
            }
        }
        if let Some(path) = &self.preferences_path {
            if path.as_os_str().is_empty() {
                return Err("preferences path must not be empty".into());
            }
        }
        Ok(())
    }

    /// Load and validate a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self, DialogError> {
        let json = fs::read_to_string(path)
            .map_err(|e| DialogError::ConfigurationFailed(format!("failed to read config: {}", e)))?;
        let config: DialogConfig = serde_json::from_str(&json)
            .map_err(|e| DialogError::ConfigurationFailed(format!("failed to parse config: {}", e)))?;
        config.validate().map_err(DialogError::ConfigurationFailed)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(DialogConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_http_support_url() {
        let config = DialogConfig {
            support_url: Some("javascript:alert(1)".into()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = DialogConfig {
            support_url: Some("   ".into()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_camel_case_json() {
        let path = std::env::temp_dir().join("device_dialog_test_config.json");
        fs::write(
            &path,
            r#"{ "supportUrl": "https://support.example.com" }"#,
        )
        .unwrap();

        let config = DialogConfig::from_json_file(&path).unwrap();
        assert_eq!(config.support_url.as_deref(), Some("https://support.example.com"));
        assert_eq!(config.preferences_path, None);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn invalid_file_is_a_configuration_error() {
        let path = std::env::temp_dir().join("device_dialog_test_bad_config.json");
        fs::write(&path, r#"{ "supportUrl": "ftp://example.com" }"#).unwrap();

        let err = DialogConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, DialogError::ConfigurationFailed(_)));

        fs::remove_file(&path).ok();
    }
}
