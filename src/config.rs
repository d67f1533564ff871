//! Application configuration loaded from JSON

use crate::calc::{Compounding, InterestType, RateBounds, DEFAULT_MAX_PERIODS};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Calculator settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Accepted rate range in percent
    #[serde(default)]
    pub rate_bounds: RateBounds,

    /// Longest span accepted, in series periods (years or months)
    #[serde(default = "default_max_periods")]
    pub max_periods: u32,

    /// File backing the history store
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,

    #[serde(default)]
    pub default_compounding: Compounding,

    #[serde(default)]
    pub default_interest_type: InterestType,
}

fn default_history_file() -> PathBuf {
    PathBuf::from("interest_history.json")
}

fn default_max_periods() -> u32 {
    DEFAULT_MAX_PERIODS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rate_bounds: RateBounds::default(),
            max_periods: DEFAULT_MAX_PERIODS,
            history_file: default_history_file(),
            default_compounding: Compounding::default(),
            default_interest_type: InterestType::default(),
        }
    }
}

impl AppConfig {
    /// Read and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    /// Parse and validate config from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: "<inline>".to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let RateBounds { min, max } = self.rate_bounds;
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        if self.max_periods == 0 {
            return Err(ConfigError::InvalidMaxPeriods);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.rate_bounds, RateBounds::STANDARD);
    }

    #[test]
    fn test_partial_config() {
        let config = AppConfig::from_json(
            r#"{ "rateBounds": { "min": 0.1 }, "defaultCompounding": "monthly" }"#,
        )
        .unwrap();

        assert_eq!(config.rate_bounds, RateBounds::FINE);
        assert_eq!(config.max_periods, DEFAULT_MAX_PERIODS);
        assert_eq!(config.default_compounding, Compounding::Monthly);
        assert_eq!(config.default_interest_type, InterestType::Compound);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err =
            AppConfig::from_json(r#"{ "rateBounds": { "min": 60, "max": 50 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBounds { .. }));

        let err = AppConfig::from_json(r#"{ "maxPeriods": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxPeriods));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "historyFile": "/tmp/h.json" }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.history_file, PathBuf::from("/tmp/h.json"));

        let missing = AppConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(missing, ConfigError::Read { .. }));
    }
}
