//! In-memory resources
//!
//! Useful for translations compiled into the binary with `include_bytes!`
//! and for tests.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::io::{Cursor, Read};
use super::{segments, ResourceResolver};
use crate::utils::errors::Result;

/// Resources held in memory, keyed by normalized logical path
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    files: BTreeMap<String, Cow<'static, [u8]>>,
}

impl MemoryResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource at `path`, replacing any previous content
    pub fn insert(&mut self, path: &str, content: impl Into<Cow<'static, [u8]>>) {
        self.files.insert(normalize(path), content.into());
    }

    /// Builder form of [`MemoryResolver::insert`]
    pub fn with(mut self, path: &str, content: impl Into<Cow<'static, [u8]>>) -> Self {
        self.insert(path, content);
        self
    }

    /// Number of resources held
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no resources are held
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ResourceResolver for MemoryResolver {
    fn open(&self, path: &str) -> Result<Option<Box<dyn Read + '_>>> {
        Ok(self
            .files
            .get(&normalize(path))
            .map(|content| Box::new(Cursor::new(&content[..])) as Box<dyn Read + '_>))
    }

    fn list(&self, dir: &str) -> Result<Option<Vec<String>>> {
        let dir = normalize(dir);
        let prefix = if dir.is_empty() { String::new() } else { format!("{}/", dir) };

        let names: BTreeSet<&str> = self
            .files
            .keys()
            .filter_map(|path| path.strip_prefix(prefix.as_str()))
            .filter_map(|rest| rest.split('/').next())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            return Ok(None);
        }
        Ok(Some(names.into_iter().map(str::to_string).collect()))
    }
}

fn normalize(path: &str) -> String {
    segments(path).collect::<Vec<_>>().join("/")
}
