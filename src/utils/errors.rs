//! Error handling for Polyglot
//!
//! This module defines the error type shared by resource resolution,
//! translation loading and configuration.

use thiserror::Error;

/// Main error type for Polyglot
#[derive(Error, Debug)]
pub enum PolyglotError {
    #[error("Resource not found: {path}")]
    NotFound { path: String },

    #[error("Invalid JSON syntax for {locale_code}: {source}")]
    MalformedData {
        locale_code: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Empty language file for {locale_code}")]
    EmptyContent { locale_code: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for Polyglot operations
pub type Result<T> = std::result::Result<T, PolyglotError>;

impl PolyglotError {
    /// Build a `NotFound` error for a logical resource path
    pub fn not_found(path: impl Into<String>) -> Self {
        PolyglotError::NotFound { path: path.into() }
    }

    /// Check if the error means a resource could not be resolved
    pub fn is_not_found(&self) -> bool {
        matches!(self, PolyglotError::NotFound { .. })
    }

    /// Locale code the error relates to, if any
    pub fn locale_code(&self) -> Option<&str> {
        match self {
            PolyglotError::MalformedData { locale_code, .. } => Some(locale_code),
            PolyglotError::EmptyContent { locale_code } => Some(locale_code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_data_message_names_locale() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PolyglotError::MalformedData {
            locale_code: "de.json".to_string(),
            source,
        };

        assert!(err.to_string().contains("de.json"));
        assert_eq!(err.locale_code(), Some("de.json"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_not_found_classification() {
        let err = PolyglotError::not_found("/lang/");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Resource not found: /lang/");
        assert!(err.locale_code().is_none());

        let err = PolyglotError::EmptyContent { locale_code: "en.json".to_string() };
        assert!(!err.is_not_found());
    }
}
