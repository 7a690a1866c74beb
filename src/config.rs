//! Generator configuration loaded from `.devenv/config.toml`
//!
//! Only the `[clangd]` table is consulted:
//!
//! ```toml
//! [clangd]
//! # Removed from discovery, claims, and PathMatch generation entirely.
//! exclude_path = ["source/foo/generated", "source/bar/test"]
//! # Emitted as `Index.Background: Skip` documents; nothing else.
//! background_skip_path = ["source/foo/third_party"]
//! ```
//!
//! The two prefix sets are independent: a path can stay in PathMatch
//! while being skipped for background indexing, and vice versa. A
//! missing file, a missing `[clangd]` table, or unparsable TOML all
//! degrade to the empty configuration; configuration problems never
//! stop a generation run.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::paths;

/// Settings for one generation run.
///
/// Prefixes are normalized (forward slashes, single trailing slash),
/// deduplicated, and sorted at load time; empty values are discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClangdConfig {
    /// Paths removed from consideration entirely: they participate in
    /// neither discovery, nor claims, nor output.
    #[serde(default)]
    pub exclude_path: Vec<String>,

    /// Paths annotated with `Index.Background: Skip` in the output.
    #[serde(default)]
    pub background_skip_path: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    clangd: ClangdConfig,
}

impl ClangdConfig {
    /// Load configuration for a repository root from
    /// `<root>/.devenv/config.toml`.
    pub fn load(root: &Path) -> Self {
        Self::load_from(&root.join(".devenv").join("config.toml"))
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("ignoring unreadable config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => file.clangd.normalized(),
            Err(e) => {
                warn!("ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn normalized(self) -> Self {
        Self {
            exclude_path: normalize_prefix_set(self.exclude_path),
            background_skip_path: normalize_prefix_set(self.background_skip_path),
        }
    }
}

fn normalize_prefix_set(values: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = values
        .iter()
        .filter(|value| !value.is_empty())
        .map(|value| paths::normalize_prefix(value))
        .collect();
    normalized.sort();
    normalized.dedup();
    normalized
}
