//! Resource resolution
//!
//! Translation files are read through a [`ResourceResolver`], which maps
//! logical slash-separated paths (such as `/lang/en.json`) to byte streams and
//! directory listings. The loaders never touch the filesystem directly, so a
//! catalog can be built from a directory on disk, from embedded bytes, or from
//! anything else that can answer these two questions.

pub mod directory;
pub mod memory;

pub use directory::DirectoryResolver;
pub use memory::MemoryResolver;

use std::io::Read;
use crate::utils::errors::Result;

/// Source of packaged resources addressed by logical path
pub trait ResourceResolver {
    /// Open the resource at `path` for reading.
    ///
    /// Returns `Ok(None)` when no such resource exists.
    fn open(&self, path: &str) -> Result<Option<Box<dyn Read + '_>>>;

    /// List the names of the immediate entries of the directory at `dir`.
    ///
    /// Returns `Ok(None)` when `dir` cannot be resolved as a directory.
    fn list(&self, dir: &str) -> Result<Option<Vec<String>>>;
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for &R {
    fn open(&self, path: &str) -> Result<Option<Box<dyn Read + '_>>> {
        (**self).open(path)
    }

    fn list(&self, dir: &str) -> Result<Option<Vec<String>>> {
        (**self).list(dir)
    }
}

/// Join a logical directory and an entry name with exactly one `/`
pub fn join_path(dir: &str, name: &str) -> String {
    format!("{}/{}", dir.trim_end_matches('/'), name.trim_start_matches('/'))
}

/// Split a logical path into its non-empty segments
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/lang/", "en.json"), "/lang/en.json");
        assert_eq!(join_path("/lang", "en.json"), "/lang/en.json");
        assert_eq!(join_path("lang//", "/en.json"), "lang/en.json");
    }

    #[test]
    fn test_segments() {
        let parts: Vec<&str> = segments("/lang//./en.json").collect();
        assert_eq!(parts, vec!["lang", "en.json"]);
        assert_eq!(segments("/").count(), 0);
    }
}
