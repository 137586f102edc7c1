use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::records::DEFAULT_DELIMITER;

/// How the CLI prints a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Separator between predecessor names in task records.
    pub predecessor_delimiter: String,
    /// Reject invalid input instead of assigning it as-is.
    pub strict: bool,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predecessor_delimiter: DEFAULT_DELIMITER.to_string(),
            strict: false,
            output: OutputFormat::Table,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a config file; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Config::load path={}", path.display());
        if !path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config = Self::from_toml_str(&fs::read_to_string(path)?)?;
        debug!(
            "Config loaded: delimiter={:?}, strict={}, output={:?}",
            config.predecessor_delimiter, config.strict, config.output
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.predecessor_delimiter, ",");
        assert!(!config.strict);
        assert_eq!(config.output, OutputFormat::Table);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("strict = true").unwrap();
        assert!(config.strict);
        assert_eq!(config.predecessor_delimiter, ",");

        let config = Config::from_toml_str("output = \"json\"\npredecessor_delimiter = \";\"").unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.predecessor_delimiter, ";");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Config::from_toml_str("output = \"xml\""),
            Err(Error::TomlParse(_))
        ));
    }

    #[test]
    fn test_load_missing_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("u-assign.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("u-assign.toml");
        fs::write(&path, "strict = true\n").unwrap();
        assert!(Config::load(&path).unwrap().strict);
    }
}
