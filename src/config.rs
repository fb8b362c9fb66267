// src/config.rs

//! Generator configuration.
//!
//! Both generators run with a fixed configuration: the resolution, the archive path
//! and the ordered name list. It lives in `color_maps.json`, embedded at build time,
//! and deserializes into [`GeneratorConfig`] with defaults for any missing field.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::names::{self, NameEntry};
use crate::sampler::DEFAULT_RESOLUTION;

/// Archive written by the npz generator, relative to the working directory.
pub const DEFAULT_ARCHIVE_PATH: &str = "matplotlib_color_maps.npz";

const EMBEDDED: &str = include_str!("color_maps.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Steps between the first and last sample; each map yields `resolution + 1` samples.
    pub resolution: usize,
    /// Where the archive generator writes.
    pub archive_path: PathBuf,
    /// Color maps to sample, in emission order.
    pub names: Vec<NameEntry>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            resolution: DEFAULT_RESOLUTION,
            archive_path: PathBuf::from(DEFAULT_ARCHIVE_PATH),
            names: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// The embedded configuration, validated.
    pub fn load() -> Result<Self> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.resolution == 0 {
            return Err(Error::InvalidResolution(self.resolution));
        }
        names::validate(&self.names)
    }

    /// Keys of the archive, alias groups flattened.
    pub fn archive_names(&self) -> Vec<&str> {
        names::archive_names(&self.names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BuiltinRegistry;

    #[test]
    fn embedded_configuration_loads() {
        let config = GeneratorConfig::load().unwrap();
        assert_eq!(config.resolution, 25);
        assert_eq!(config.archive_path, PathBuf::from("matplotlib_color_maps.npz"));
        assert_eq!(config.names.len(), 83);
        assert_eq!(config.names[0], NameEntry::from("Accent"));
        assert_eq!(config.names[82], NameEntry::from("YlOrRd"));
    }

    #[test]
    fn every_configured_name_is_builtin() {
        let config = GeneratorConfig::load().unwrap();
        let registry = BuiltinRegistry::new();
        for name in config.archive_names() {
            assert!(registry.contains(name), "{name} is not a builtin color map");
        }
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = GeneratorConfig::from_json(r#"{"names": ["jet"]}"#).unwrap();
        assert_eq!(config.resolution, DEFAULT_RESOLUTION);
        assert_eq!(config.archive_path, PathBuf::from(DEFAULT_ARCHIVE_PATH));
        assert_eq!(config.names, vec![NameEntry::from("jet")]);
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let err = GeneratorConfig::from_json(r#"{"resolution": 0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidResolution(0)));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = GeneratorConfig::from_json(r#"{"names": [1, 2]}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
