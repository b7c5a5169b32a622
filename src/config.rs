//! Bundle configuration.
//!
//! A filesystem bundle may carry a `manifest.json` naming the file behind each
//! asset. Every key is optional:
//!
//! ```json
//! { "frontPhoto": "selfie.png", "video": "clip.mov", "validateFormats": true }
//! ```

use crate::asset::SimulatorAsset;
use crate::error::SimulatorResourceError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BundleConfig {
    pub front_photo: String,
    pub back_photo: String,
    pub video: String,
    /// Reject payloads whose detected format doesn't match the asset kind.
    pub validate_formats: bool,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            front_photo: SimulatorAsset::FrontPhoto.default_file_name().to_string(),
            back_photo: SimulatorAsset::BackPhoto.default_file_name().to_string(),
            video: SimulatorAsset::Video.default_file_name().to_string(),
            validate_formats: true,
        }
    }
}

impl BundleConfig {
    pub const MANIFEST_FILE_NAME: &'static str = "manifest.json";

    /// Parses and validates a manifest.
    pub fn from_json(json: &str) -> Result<Self, SimulatorResourceError> {
        let config: BundleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn file_name(&self, asset: SimulatorAsset) -> &str {
        match asset {
            SimulatorAsset::FrontPhoto => &self.front_photo,
            SimulatorAsset::BackPhoto => &self.back_photo,
            SimulatorAsset::Video => &self.video,
        }
    }

    /// Checks that every asset names a file and no two assets share one.
    pub fn validate(&self) -> Result<(), SimulatorResourceError> {
        for (i, asset) in SimulatorAsset::ALL.iter().enumerate() {
            let file = self.file_name(*asset);
            if file.trim().is_empty() {
                return Err(SimulatorResourceError::Config(format!(
                    "no file configured for '{}'",
                    asset
                )));
            }
            if let Some(other) = SimulatorAsset::ALL[..i]
                .iter()
                .find(|other| self.file_name(**other) == file)
            {
                return Err(SimulatorResourceError::Config(format!(
                    "'{}' and '{}' both point at '{}'",
                    other, asset, file
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_packaged_names() {
        let config = BundleConfig::default();
        for asset in SimulatorAsset::ALL {
            assert_eq!(config.file_name(asset), asset.default_file_name());
        }
        assert!(config.validate_formats);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_manifest_keeps_defaults() {
        let config = BundleConfig::from_json(r#"{ "video": "clip.mov" }"#).unwrap();
        assert_eq!(config.file_name(SimulatorAsset::Video), "clip.mov");
        assert_eq!(config.file_name(SimulatorAsset::FrontPhoto), "front.jpg");
        assert!(config.validate_formats);
    }

    #[test]
    fn test_manifest_disables_validation() {
        let config = BundleConfig::from_json(r#"{ "validateFormats": false }"#).unwrap();
        assert!(!config.validate_formats);
    }

    #[test]
    fn test_manifest_rejects_unknown_keys() {
        let err = BundleConfig::from_json(r#"{ "frontphoto": "a.jpg" }"#).unwrap_err();
        assert!(matches!(err, SimulatorResourceError::Manifest(_)));
    }

    #[test]
    fn test_manifest_rejects_duplicate_files() {
        let err =
            BundleConfig::from_json(r#"{ "frontPhoto": "same.jpg", "backPhoto": "same.jpg" }"#)
                .unwrap_err();
        match err {
            SimulatorResourceError::Config(message) => {
                assert!(message.contains("front-photo"));
                assert!(message.contains("back-photo"));
                assert!(message.contains("same.jpg"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_manifest_rejects_blank_file() {
        let err = BundleConfig::from_json(r#"{ "video": "  " }"#).unwrap_err();
        assert!(matches!(err, SimulatorResourceError::Config(ref m) if m.contains("video")));
    }

    #[test]
    fn test_config_serializes_camel_case() {
        let json = serde_json::to_string(&BundleConfig::default()).unwrap();
        assert!(json.contains("\"frontPhoto\":\"front.jpg\""));
        assert!(json.contains("\"validateFormats\":true"));
    }
}
