//! Common test infrastructure for Palette Snoop integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;

use std::path::PathBuf;

use tempfile::TempDir;

/// Write `content` to `name` inside a fresh temp dir
///
/// The returned `TempDir` must be kept alive for as long as the file is used.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write temp file");
    (dir, path)
}
