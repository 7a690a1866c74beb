//! TestRepo builder for integration testing
//!
//! Tests build temporary repositories with specific database layouts
//! instead of checked-in fixture trees. Claimed source files never
//! have to exist on disk: entry resolution is lexical.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for creating test repository structures
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new empty test repository
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the path to the test repository root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file with the given content
    pub fn add_file(&self, relative_path: &str, content: &str) -> &Self {
        let full_path = self.dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Add a compile_commands.json under `rel_dir` claiming the given
    /// root-relative files.
    pub fn add_database(&self, rel_dir: &str, files: &[&str]) -> &Self {
        let entries: Vec<serde_json::Value> = files
            .iter()
            .map(|file| {
                serde_json::json!({
                    "directory": self.path().display().to_string(),
                    "file": file,
                    "command": format!("cc -c {}", file),
                })
            })
            .collect();
        let json = serde_json::to_string_pretty(&entries).expect("Failed to encode database");
        self.add_file(&format!("{}/compile_commands.json", rel_dir), &json)
    }

    /// Add a raw (possibly malformed) compile_commands.json under
    /// `rel_dir`.
    pub fn add_raw_database(&self, rel_dir: &str, content: &str) -> &Self {
        self.add_file(&format!("{}/compile_commands.json", rel_dir), content)
    }

    /// Add a `.devenv/config.toml` with the given content
    pub fn add_config(&self, content: &str) -> &Self {
        self.add_file(".devenv/config.toml", content)
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
