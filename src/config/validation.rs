//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{PolyglotError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_resources_config(&settings.resources)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate resource root configuration
fn validate_resources_config(config: &super::ResourcesConfig) -> Result<()> {
    if config.dir.trim().is_empty() {
        return Err(PolyglotError::Config(
            "Resource directory is required".to_string()
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.lang_path.trim().is_empty() {
        return Err(PolyglotError::Config(
            "Language path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(PolyglotError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PolyglotError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if let Some(ref dir) = config.file_path {
        if dir.trim().is_empty() {
            return Err(PolyglotError::Config(
                "Log file path must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();

        let err = validate_settings(&settings).unwrap_err();
        assert!(err.to_string().contains("Invalid log level: verbose"));
    }

    #[test]
    fn test_empty_paths_rejected() {
        let mut settings = Settings::default();
        settings.resources.dir = "  ".to_string();
        assert!(validate_settings(&settings).is_err());

        let mut settings = Settings::default();
        settings.i18n.lang_path = String::new();
        assert!(validate_settings(&settings).is_err());

        let mut settings = Settings::default();
        settings.logging.file_path = Some(String::new());
        assert!(validate_settings(&settings).is_err());
    }
}
