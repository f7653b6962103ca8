//! Filesystem-backed resources

use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::trace;
use super::{segments, ResourceResolver};
use crate::utils::errors::Result;

/// Resolves logical paths against a base directory on disk.
///
/// `/lang/en.json` resolves to `{base}/lang/en.json`. Paths that try to
/// climb out of the base directory with `..` resolve to nothing.
#[derive(Debug, Clone)]
pub struct DirectoryResolver {
    base: PathBuf,
}

impl DirectoryResolver {
    /// Create a resolver rooted at `base`
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Base directory of this resolver
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let mut resolved = self.base.clone();
        for segment in segments(path) {
            if segment == ".." {
                return None;
            }
            resolved.push(segment);
        }
        Some(resolved)
    }
}

impl ResourceResolver for DirectoryResolver {
    fn open(&self, path: &str) -> Result<Option<Box<dyn Read + '_>>> {
        let Some(file_path) = self.resolve(path) else {
            return Ok(None);
        };
        if !file_path.is_file() {
            return Ok(None);
        }

        trace!("Opening resource {}", file_path.display());
        match File::open(&file_path) {
            Ok(file) => Ok(Some(Box::new(BufReader::new(file)))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self, dir: &str) -> Result<Option<Vec<String>>> {
        let Some(dir_path) = self.resolve(dir) else {
            return Ok(None);
        };
        if !dir_path.is_dir() {
            return Ok(None);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir_path)? {
            let entry = entry?;
            // Non UTF-8 names cannot be addressed by a logical path.
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        names.sort();

        Ok(Some(names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_list() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("lang")).unwrap();
        fs::write(dir.path().join("lang/b.json"), "{}").unwrap();
        fs::write(dir.path().join("lang/a.json"), r#"{"k":"v"}"#).unwrap();

        let resolver = DirectoryResolver::new(dir.path());

        let names = resolver.list("/lang/").unwrap().unwrap();
        assert_eq!(names, vec!["a.json", "b.json"]);

        let mut content = String::new();
        resolver
            .open("/lang/a.json")
            .unwrap()
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, r#"{"k":"v"}"#);
    }

    #[test]
    fn test_missing_paths_resolve_to_none() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("file.json"), "{}").unwrap();

        let resolver = DirectoryResolver::new(dir.path());

        assert!(resolver.open("/missing.json").unwrap().is_none());
        assert!(resolver.list("/missing/").unwrap().is_none());
        // A file is not a directory and a directory is not a file.
        assert!(resolver.list("/file.json").unwrap().is_none());
        assert!(resolver.open("/").unwrap().is_none());
    }

    #[test]
    fn test_parent_traversal_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("inner")).unwrap();
        fs::write(dir.path().join("secret.json"), "{}").unwrap();

        let resolver = DirectoryResolver::new(dir.path().join("inner"));
        assert!(resolver.open("/../secret.json").unwrap().is_none());
        assert!(resolver.list("/..").unwrap().is_none());
    }
}
