//! Shared testing utilities for shelfsort CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Sample catalog written by most CLI tests.
pub const SAMPLE_CATALOG: &str = r#"[
    {
        "id": 1,
        "name": "Alabaster Table",
        "price": 12.99,
        "created_at": "2019-01-04T00:00:00Z",
        "sale_count": 32,
        "view_count": 730
    },
    {
        "id": 2,
        "name": "Zebra Table",
        "price": 44.49,
        "created_at": "2012-01-04T00:00:00Z",
        "sale_count": 301,
        "view_count": 3279
    },
    {
        "id": 3,
        "name": "Coffee Table",
        "price": 10.00,
        "created_at": "2014-05-28T00:00:00Z",
        "sale_count": 1048,
        "view_count": 20123
    }
]"#;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `shelfsort` binary in
    /// the working directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("shelfsort").expect("Failed to locate shelfsort binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Write `contents` as `products.json` in the working directory.
    pub fn write_catalog(&self, contents: &str) {
        self.write_catalog_at("products.json", contents);
    }

    /// Write `contents` under `name` in the working directory.
    pub fn write_catalog_at(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, contents).expect("Failed to write test catalog");
        path
    }
}
