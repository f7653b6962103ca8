//! Test helpers module
//!
//! Builds translation directories on disk for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use polyglot::DirectoryResolver;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("polyglot=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Resource root in a temporary directory
pub struct ResourceFixture {
    pub temp_dir: tempfile::TempDir,
}

impl ResourceFixture {
    /// Create an empty resource root
    pub fn new() -> Self {
        init_test_env();
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Create a resource root with an empty `lang` directory
    pub fn with_lang_dir() -> Self {
        let fixture = Self::new();
        fs::create_dir_all(fixture.lang_dir()).expect("Failed to create lang dir");
        fixture
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn lang_dir(&self) -> PathBuf {
        self.path().join("lang")
    }

    /// Write a file into the `lang` directory
    pub fn write_lang_file(&self, name: &str, content: &str) -> &Self {
        fs::write(self.lang_dir().join(name), content).expect("Failed to write lang file");
        self
    }

    pub fn resolver(&self) -> DirectoryResolver {
        DirectoryResolver::new(self.path())
    }
}
