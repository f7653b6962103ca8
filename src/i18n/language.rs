//! A single locale's translation table

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;
use tracing::debug;
use crate::resources::{join_path, ResourceResolver};
use crate::utils::errors::{PolyglotError, Result};
use crate::utils::logging;

/// Strings of one translation file, looked up by field name.
///
/// A `Language` is fully populated when constructed and never changes
/// afterwards. An empty translation file (`{}`) is a valid language with no
/// strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    locale_code: String,
    strings: HashMap<String, String>,
}

impl Language {
    /// Load the language file `{lang_root}/{locale_code}` from `resolver`.
    ///
    /// The locale code is stored as given, extension included. Callers that
    /// want case-insensitive codes must normalize before calling.
    ///
    /// # Errors
    ///
    /// * [`PolyglotError::NotFound`] if the resource does not exist.
    /// * [`PolyglotError::MalformedData`] if it is not a flat JSON object of strings.
    /// * [`PolyglotError::EmptyContent`] if it holds JSON `null` or nothing at all.
    pub fn load<R>(resolver: &R, lang_root: &str, locale_code: &str) -> Result<Self>
    where
        R: ResourceResolver + ?Sized,
    {
        Self::load_path(resolver, &join_path(lang_root, locale_code), locale_code)
    }

    /// Load the resource at `path` and store it under `locale_code`
    pub(crate) fn load_path<R>(resolver: &R, path: &str, locale_code: &str) -> Result<Self>
    where
        R: ResourceResolver + ?Sized,
    {
        debug!("Loading language file {}", path);
        let reader = resolver
            .open(path)?
            .ok_or_else(|| PolyglotError::not_found(path))?;

        Self::from_reader(locale_code, reader)
    }

    /// Parse a translation table from `reader` under `locale_code`
    pub fn from_reader(locale_code: impl Into<String>, mut reader: impl Read) -> Result<Self> {
        let locale_code = locale_code.into();

        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;

        // An empty document parses to no value at all, same as `null`.
        if content.iter().all(u8::is_ascii_whitespace) {
            return Err(PolyglotError::EmptyContent { locale_code });
        }

        let parsed: Option<StringTable> = match serde_json::from_slice(&content) {
            Ok(parsed) => parsed,
            Err(source) => return Err(PolyglotError::MalformedData { locale_code, source }),
        };
        let Some(StringTable(strings)) = parsed else {
            return Err(PolyglotError::EmptyContent { locale_code });
        };

        logging::log_language_loaded(&locale_code, strings.len());
        Ok(Self { locale_code, strings })
    }

    /// Locale code of this language, e.g. `en.json`
    pub fn locale_code(&self) -> &str {
        &self.locale_code
    }

    /// Returns the string mapped to the given field
    pub fn get_string(&self, field: &str) -> Option<&str> {
        self.strings.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.strings.contains_key(field)
    }

    /// Iterate over all field names, in no particular order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }

    /// Number of strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Flat JSON object read leniently: numbers and booleans become their text,
/// `null` values are left out, repeated keys are rejected.
struct StringTable(HashMap<String, String>);

impl<'de> Deserialize<'de> for StringTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StringTableVisitor)
    }
}

struct StringTableVisitor;

impl<'de> Visitor<'de> for StringTableVisitor {
    type Value = StringTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object of strings")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<StringTable, A::Error>
    where
        A: MapAccess<'de>,
    {
        // Null entries stay as `None` until the end so repeats are still caught.
        let mut entries: HashMap<String, Option<String>> = HashMap::new();

        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            if entries.contains_key(&key) {
                return Err(de::Error::custom(format!("duplicate key: {}", key)));
            }
            let text = match value {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                Value::Null => None,
                Value::Array(_) | Value::Object(_) => {
                    return Err(de::Error::custom(format!("expected a string for {}", key)));
                }
            };
            entries.insert(key, text);
        }

        Ok(StringTable(
            entries
                .into_iter()
                .filter_map(|(key, text)| text.map(|text| (key, text)))
                .collect(),
        ))
    }
}
