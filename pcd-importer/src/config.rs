use std::path::{Path, PathBuf};

use pcd_core::pointcloud::classification::Classification;
use serde::{Deserialize, Serialize};

use crate::ImportError;

pub const DEFAULT_RESOLUTION_PERCENT: u8 = 100;

/// Everything one import needs, checked once before any file is opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportConfig {
    path: PathBuf,
    classification: Classification,
    clear_scene: bool,
    resolution_percent: u8,
}

impl ImportConfig {
    pub fn new(
        path: impl Into<PathBuf>,
        classification: Classification,
        clear_scene: bool,
        resolution_percent: u8,
    ) -> Result<Self, ImportError> {
        let config = Self {
            path: path.into(),
            classification,
            clear_scene,
            resolution_percent,
        };
        config.validate()?;
        Ok(config)
    }

    /// Ground points at full resolution, clearing the scene first.
    pub fn with_defaults(path: impl Into<PathBuf>) -> Result<Self, ImportError> {
        Self::new(
            path,
            Classification::default(),
            true,
            DEFAULT_RESOLUTION_PERCENT,
        )
    }

    pub fn validate(&self) -> Result<(), ImportError> {
        if self.path.as_os_str().is_empty() {
            return Err(ImportError::InvalidConfig("empty file path".to_string()));
        }
        if !(1..=100).contains(&self.resolution_percent) {
            return Err(ImportError::InvalidConfig(format!(
                "resolution must be within 1..=100 percent, got {}",
                self.resolution_percent
            )));
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn clear_scene(&self) -> bool {
        self.clear_scene
    }

    pub fn resolution_percent(&self) -> u8 {
        self.resolution_percent
    }

    pub fn with_path(&self, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..self.clone()
        }
    }

    pub fn with_clear_scene(&self, clear_scene: bool) -> Self {
        Self {
            clear_scene,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_import_dialog() {
        let config = ImportConfig::with_defaults("scan.las").unwrap();
        assert_eq!(config.classification(), Classification::Ground);
        assert!(config.clear_scene());
        assert_eq!(config.resolution_percent(), 100);
    }

    #[test]
    fn resolution_out_of_range_is_rejected() {
        for percent in [0u8, 101, 255] {
            let result = ImportConfig::new("scan.las", Classification::Ground, true, percent);
            assert!(matches!(result, Err(ImportError::InvalidConfig(_))));
        }
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(ImportConfig::with_defaults("").is_err());
    }

    #[test]
    fn deserialized_config_is_revalidated() {
        let json = r#"{"path":"a.las","classification":"low-vegetation","clear_scene":false,"resolution_percent":0}"#;
        let config: ImportConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.classification(), Classification::LowVegetation);
        assert!(config.validate().is_err());
    }

    #[test]
    fn with_path_keeps_other_settings() {
        let config =
            ImportConfig::new("a.las", Classification::HighVegetation, false, 25).unwrap();
        let other = config.with_path("b.laz");
        assert_eq!(other.path(), Path::new("b.laz"));
        assert_eq!(other.classification(), Classification::HighVegetation);
        assert_eq!(other.resolution_percent(), 25);
        assert!(!other.clear_scene());
    }
}
