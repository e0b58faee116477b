//! Host configuration.
//!
//! Loaded from the YAML file named by `OPTABLE_CONFIG`; every field is
//! optional and falls back to its default.
//!
//! ```yaml
//! log_level: info
//! usage:
//!   description_column: 30
//!   heading: "Options:"
//!   footer: []
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use optable_core::UsageLayout;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "OPTABLE_CONFIG";

/// Settings for the `optable` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Log filter used when `RUST_LOG` is unset and `--debug` is absent.
    pub log_level: String,
    /// Layout of the usage listing.
    pub usage: UsageLayout,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            usage: UsageLayout::default(),
        }
    }
}

impl HostConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Io`](crate::error::HostError::Io) if the file
    /// cannot be read, or [`HostError::Yaml`](crate::error::HostError::Yaml)
    /// if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Io`](crate::error::HostError::Io) if the file
    /// cannot be written, or [`HostError::Yaml`](crate::error::HostError::Yaml)
    /// if serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Loads the file named by [`CONFIG_ENV`], or the defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial() {
        let yaml = r#"
usage:
  heading: "Options:"
  footer: []
"#;
        let config: HostConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.usage.heading, "Options:");
        assert_eq!(config.usage.description_column, 38);
        assert!(config.usage.footer.is_empty());
    }

    #[test]
    fn test_deserialize_empty_document() {
        let config: HostConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("optable.yml");

        let mut original = HostConfig::default();
        original.log_level = "debug".to_string();
        original.usage.rule_width = 60;
        original.save(&path).unwrap();

        assert_eq!(HostConfig::load(&path).unwrap(), original);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = HostConfig::load(dir.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, crate::error::HostError::Io(_)));
    }
}
