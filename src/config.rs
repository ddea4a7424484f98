// Tue Jan 13 2026 - Alex

use crate::bag::DEFAULT_CAPACITY;
use crate::dish::ElaborateRule;
use crate::utils::math::RoundingPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenConfig {
    /// `None` lifts the limit entirely.
    pub capacity: Option<usize>,
    /// Defaults to the standard definition: at least 5 ingredients and at
    /// least 60 minutes. Any other value redefines what `elaborate_count` and
    /// the report's elaborate percentage measure for this kitchen.
    pub elaborate: ElaborateRule,
    pub percentage_rounding: RoundingPolicy,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            capacity: Some(DEFAULT_CAPACITY),
            elaborate: ElaborateRule::default(),
            percentage_rounding: RoundingPolicy::Nearest,
        }
    }
}

impl KitchenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_rounding(mut self, policy: RoundingPolicy) -> Self {
        self.percentage_rounding = policy;
        self
    }

    pub fn with_elaborate_rule(mut self, rule: ElaborateRule) -> Self {
        self.elaborate = rule;
        self
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;

        let ext = path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let config: KitchenConfig = match ext.to_lowercase().as_str() {
            "json" => serde_json::from_str(&contents)?,
            _ => return Err(ConfigError::UnsupportedFormat(ext.to_string())),
        };

        config.validate()?;
        if config.elaborate != ElaborateRule::default() {
            log::warn!(
                "{} redefines elaborate dishes as >= {} ingredients and >= {} minutes",
                path.display(),
                config.elaborate.min_ingredients,
                config.elaborate.min_prep_time
            );
        }
        log::debug!("Loaded kitchen config from {}", path.display());
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        let ext = path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("json");

        let contents = match ext.to_lowercase().as_str() {
            "json" => serde_json::to_string_pretty(self)?,
            _ => return Err(ConfigError::UnsupportedFormat(ext.to_string())),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, contents)?;
        Ok(())
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Falling back to default kitchen config: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == Some(0) {
            return Err(ConfigError::Validation("capacity must be > 0".to_string()));
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KitchenConfig::default();
        assert_eq!(config.capacity, Some(DEFAULT_CAPACITY));
        assert_eq!(config.elaborate, ElaborateRule::new(5, 60));
        assert_eq!(config.percentage_rounding, RoundingPolicy::Nearest);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_is_invalid() {
        let config = KitchenConfig::new().with_capacity(Some(0));
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
        assert!(KitchenConfig::new().with_capacity(None).validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("kitchen.json");

        let config = KitchenConfig::new()
            .with_capacity(Some(13))
            .with_rounding(RoundingPolicy::Up);
        config.save(&path).unwrap();

        let loaded = KitchenConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kitchen.json");
        fs::write(&path, r#"{ "percentage_rounding": "up" }"#).unwrap();

        let loaded = KitchenConfig::load(&path).unwrap();
        assert_eq!(loaded.percentage_rounding, RoundingPolicy::Up);
        assert_eq!(loaded.capacity, Some(DEFAULT_CAPACITY));
    }

    #[test]
    fn test_custom_elaborate_rule_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kitchen.json");
        fs::write(&path, r#"{ "elaborate": { "min_prep_time": 30 } }"#).unwrap();

        let loaded = KitchenConfig::load(&path).unwrap();
        assert_eq!(loaded.elaborate, ElaborateRule::new(5, 30));

        let untouched = dir.path().join("plain.json");
        fs::write(&untouched, "{}").unwrap();
        assert_eq!(KitchenConfig::load(&untouched).unwrap().elaborate, ElaborateRule::new(5, 60));
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            KitchenConfig::load(dir.path().join("missing.json")),
            Err(ConfigError::NotFound(_))
        ));

        let toml = dir.path().join("kitchen.toml");
        fs::write(&toml, "capacity = 3").unwrap();
        assert!(matches!(KitchenConfig::load(&toml), Err(ConfigError::UnsupportedFormat(_))));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(KitchenConfig::load(&broken), Err(ConfigError::Parse(_))));
        assert_eq!(KitchenConfig::load_or_default(&broken), KitchenConfig::default());
    }
}
