//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use crate::i18n::LANG_PATH;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub resources: ResourcesConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Resource root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourcesConfig {
    /// Filesystem directory acting as the resource root
    pub dir: String,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Logical directory holding the translation files
    pub lang_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for a daily rolling log file; stderr only when unset
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("polyglot")
    }

    /// Load settings from the named configuration file (extension optional)
    /// layered over the defaults, with environment overrides on top
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("resources.dir", defaults.resources.dir)?
            .set_default("i18n.lang_path", defaults.i18n.lang_path)?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::Environment::with_prefix("POLYGLOT").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::PolyglotError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resources: ResourcesConfig {
                dir: "resources".to_string(),
            },
            i18n: I18nConfig {
                lang_path: LANG_PATH.to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
