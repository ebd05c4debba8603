//! Configuration loading and typed config structures.
//!
//! The configuration is a YAML document with three optional sections:
//!
//! ```yaml
//! settings:
//!   sfsHumanPrefRawTastyOverMealSurvival: true
//!   sfsAsceticPrefRawTastyOverMealSurvival: false
//! designated:
//!   survival_meals: [MealSurvivalPack, Pemmican]
//!   hay: [Hay]
//!   insect_meats: [Meat_Megaspider]
//!   insect_taste_thoughts: [AteInsectMeatAsIngredient]
//! logging:
//!   level: debug
//! ```
//!
//! Every section and field falls back to its default when absent.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::settings::PreferenceSettings;

/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "FORAGE_LOG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ForageConfig {
    /// Preference toggles.
    #[serde(default)]
    pub settings: PreferenceSettings,

    /// Definitions the classifier singles out by name.
    #[serde(default)]
    pub designated: DesignatedDefs,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ForageConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `FORAGE_LOG` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.logging.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Definitions the classifier treats specially by name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DesignatedDefs {
    /// Simple-preferability meals classified as survival meals.
    #[serde(default = "default_survival_meals")]
    pub survival_meals: BTreeSet<String>,

    /// Plant foods classified as hay.
    #[serde(default = "default_hay")]
    pub hay: BTreeSet<String>,

    /// Bad-tasting meats classified as insect meat.
    #[serde(default = "default_insect_meats")]
    pub insect_meats: BTreeSet<String>,

    /// Taste thoughts that mark a food as insect meat.
    #[serde(default = "default_insect_taste_thoughts")]
    pub insect_taste_thoughts: BTreeSet<String>,
}

impl Default for DesignatedDefs {
    fn default() -> Self {
        Self {
            survival_meals: default_survival_meals(),
            hay: default_hay(),
            insect_meats: default_insect_meats(),
            insect_taste_thoughts: default_insect_taste_thoughts(),
        }
    }
}

impl DesignatedDefs {
    /// Whether `def_name` is a designated survival meal.
    pub fn is_survival_meal(&self, def_name: &str) -> bool {
        self.survival_meals.contains(def_name)
    }

    /// Whether `def_name` is designated hay.
    pub fn is_hay(&self, def_name: &str) -> bool {
        self.hay.contains(def_name)
    }

    /// Whether a food is insect meat, by its own name or its taste thought.
    pub fn is_insect_meat(&self, def_name: &str, taste_thought: Option<&str>) -> bool {
        self.insect_meats.contains(def_name)
            || taste_thought.is_some_and(|t| self.insect_taste_thoughts.contains(t))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV)
            && !level.is_empty()
        {
            self.level = level;
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|s| String::from(*s)).collect()
}

fn default_survival_meals() -> BTreeSet<String> {
    names(&["MealSurvivalPack", "Pemmican"])
}

fn default_hay() -> BTreeSet<String> {
    names(&["Hay"])
}

fn default_insect_meats() -> BTreeSet<String> {
    names(&["Meat_Megaspider"])
}

fn default_insect_taste_thoughts() -> BTreeSet<String> {
    names(&["AteInsectMeatAsIngredient"])
}

fn default_log_level() -> String {
    String::from("info")
}
