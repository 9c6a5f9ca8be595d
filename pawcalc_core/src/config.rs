//! Configuration file support for PawCalc.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/pawcalc/config.toml`.
//! Every section is optional; missing values fall back to the documented
//! calculator defaults.

use crate::{
    ActivityLevel, AgeUnit, BodyCondition, Error, FormData, Result, SizeCategory, WeightUnit,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub units: UnitsConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Units pre-selected when a calculator starts
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct UnitsConfig {
    #[serde(default)]
    pub weight_unit: WeightUnit,

    #[serde(default)]
    pub age_unit: AgeUnit,
}

/// Choices pre-selected when a calculator starts
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub activity_level: ActivityLevel,

    #[serde(default)]
    pub body_condition: BodyCondition,

    #[serde(default)]
    pub size_category: SizeCategory,
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .ok_or_else(|| Error::Config("cannot locate a config directory".into()))?,
        };
        Ok(base.join("pawcalc").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Initial form values for a new calculator
    pub fn form_defaults(&self) -> FormData {
        FormData {
            weight_unit: self.units.weight_unit,
            age_unit: self.units.age_unit,
            activity_level: self.defaults.activity_level,
            body_condition: self.defaults.body_condition,
            size_category: self.defaults.size_category,
            ..FormData::default()
        }
    }
}
