//! Polyglot
//!
//! Localization helper that discovers the JSON translation files bundled
//! with an application, parses each into a field-to-string table keyed by a
//! locale code, and serves lookups by locale code and field name.
//!
//! ```
//! use polyglot::{Catalog, MemoryResolver};
//!
//! let resources = MemoryResolver::new()
//!     .with("/lang/en.json", &br#"{"greeting": "Hello"}"#[..])
//!     .with("/lang/TR.json", &br#"{"greeting": "Merhaba"}"#[..]);
//!
//! let catalog = Catalog::new(&resources)?;
//! let turkish = catalog.get_language("tr.json").expect("loaded");
//! assert_eq!(turkish.get_string("greeting"), Some("Merhaba"));
//! # Ok::<(), polyglot::PolyglotError>(())
//! ```

pub mod config;
pub mod i18n;
pub mod resources;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{PolyglotError, Result};

// Re-export main components for easy access
pub use i18n::{Catalog, Language, LANG_PATH};
pub use resources::{DirectoryResolver, MemoryResolver, ResourceResolver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
