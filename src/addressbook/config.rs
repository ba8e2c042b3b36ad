use crate::error::{AddressBookError, Result};
use crate::sample::DEFAULT_SAMPLE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIST_LIMIT: usize = 25;
const DEFAULT_LINE_WIDTH: usize = 100;

/// Configuration for addressbook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressBookConfig {
    /// Number of random contacts generated at startup
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Maximum number of list rows printed at once
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,

    /// Terminal width the list is laid out for
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

fn default_list_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for AddressBookConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            list_limit: DEFAULT_LIST_LIMIT,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl AddressBookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddressBookError::Io)?;
        let config: AddressBookConfig =
            serde_json::from_str(&content).map_err(AddressBookError::Serialization)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AddressBookConfig::default();
        assert_eq!(config.sample_size, 1000);
        assert_eq!(config.list_limit, 25);
        assert_eq!(config.line_width, 100);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = AddressBookConfig::load(temp_dir.path().join("missing")).unwrap();
        assert_eq!(config, AddressBookConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"sample_size": 12, "list_limit": 3, "line_width": 60}"#,
        )
        .unwrap();

        let loaded = AddressBookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(
            loaded,
            AddressBookConfig {
                sample_size: 12,
                list_limit: 3,
                line_width: 60,
            }
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"list_limit": 5}"#).unwrap();

        let loaded = AddressBookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.list_limit, 5);
        assert_eq!(loaded.sample_size, 1000);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "not json").unwrap();

        assert!(matches!(
            AddressBookConfig::load(temp_dir.path()),
            Err(AddressBookError::Serialization(_))
        ));
    }
}
