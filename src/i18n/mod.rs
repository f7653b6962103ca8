//! Internationalization module
//!
//! This module loads translation files into [`Language`] tables and groups
//! them into a [`Catalog`] that can be queried by locale code.

pub mod catalog;
pub mod language;

// Re-export commonly used i18n components
pub use catalog::{Catalog, CatalogStats, LanguageStats, LANG_PATH};
pub use language::Language;
