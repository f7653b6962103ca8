//! Discovery of translation files and lookup by locale code

use tracing::{debug, warn};
use super::language::Language;
use crate::resources::{join_path, ResourceResolver};
use crate::utils::errors::{PolyglotError, Result};
use crate::utils::logging;

/// Logical directory holding the translation files
pub const LANG_PATH: &str = "/lang/";

/// Extension a resource must carry to be loaded as a language
const LANGUAGE_EXTENSION: &str = ".json";

/// All languages found under a translation directory.
///
/// Languages are kept in listing order. Two entries that lower-case to the
/// same locale code (`EN.json` and `en.json`) are both kept; lookups return
/// the first one.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: String,
    languages: Vec<Language>,
}

impl Catalog {
    /// Load every language under [`LANG_PATH`]
    pub fn new<R>(resolver: &R) -> Result<Self>
    where
        R: ResourceResolver + ?Sized,
    {
        Self::load(resolver, LANG_PATH)
    }

    /// Load every `.json` entry of the directory `root` as a language.
    ///
    /// Entry names are lower-cased to form locale codes. Loading stops at the
    /// first language that fails, and no catalog is returned in that case.
    ///
    /// # Errors
    ///
    /// [`PolyglotError::NotFound`] if `root` cannot be listed, or any error
    /// from [`Language::load`].
    pub fn load<R>(resolver: &R, root: &str) -> Result<Self>
    where
        R: ResourceResolver + ?Sized,
    {
        let entries = resolver
            .list(root)?
            .ok_or_else(|| PolyglotError::not_found(root))?;

        let mut languages: Vec<Language> = Vec::new();
        for entry in entries.iter().map(|e| e.trim()).filter(|e| !e.is_empty()) {
            let locale_code = entry.to_lowercase();
            if !locale_code.ends_with(LANGUAGE_EXTENSION) {
                debug!("Skipping non-language entry {}", entry);
                continue;
            }

            // Resolve by the listed name so mixed-case files load on
            // case-sensitive filesystems.
            let language = Language::load_path(resolver, &join_path(root, entry), &locale_code)?;

            if languages.iter().any(|l| l.locale_code() == locale_code) {
                warn!("Duplicate locale code {} loaded from {}", locale_code, entry);
            }
            languages.push(language);
        }

        logging::log_catalog_loaded(root, languages.len());
        Ok(Self {
            root: root.to_string(),
            languages,
        })
    }

    /// Gets a language by its locale code, ignoring case
    pub fn get_language(&self, locale_code: &str) -> Option<&Language> {
        let wanted = locale_code.to_lowercase();
        self.languages
            .iter()
            .find(|language| language.locale_code().to_lowercase() == wanted)
    }

    /// All loaded languages
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn locale_codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(Language::locale_code)
    }

    /// Directory the catalog was loaded from
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Get translation statistics
    pub fn stats(&self) -> CatalogStats {
        let languages: Vec<LanguageStats> = self
            .languages
            .iter()
            .map(|language| LanguageStats {
                code: language.locale_code().to_string(),
                key_count: language.len(),
            })
            .collect();
        let total_keys = languages.iter().map(|l| l.key_count).sum();

        CatalogStats { languages, total_keys }
    }
}

/// Translation statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub languages: Vec<LanguageStats>,
    pub total_keys: usize,
}

/// Language-specific statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
}
