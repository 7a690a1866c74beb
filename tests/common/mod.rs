//! Common test utilities and fixtures for clangd-gen integration tests
//!
//! Provides the `TestRepo` tempdir builder and helpers for picking the
//! rendered `.clangd` output apart.

#![allow(dead_code)]

pub mod test_repo;

pub use test_repo::TestRepo;

use std::collections::BTreeMap;

/// Extract the PathMatch patterns per database from rendered `.clangd`
/// text. Background-skip documents carry no `CompilationDatabase` and
/// are not reported.
pub fn pathmatch_by_db(content: &str) -> BTreeMap<String, Vec<String>> {
    let mut result = BTreeMap::new();
    let mut pending: Option<Vec<String>> = None;
    for line in content.lines() {
        if let Some(value) = line.strip_prefix("  PathMatch: ") {
            pending = Some(value.split('|').map(str::to_string).collect());
        } else if let Some(db) = line.strip_prefix("  CompilationDatabase: ") {
            if let Some(patterns) = pending.take() {
                result.insert(db.to_string(), patterns);
            }
        } else if line == "---" {
            pending = None;
        }
    }
    result
}

/// True iff any of the patterns matches the root-relative path.
pub fn any_matches(patterns: &[String], rel_path: &str) -> bool {
    patterns.iter().any(|p| {
        regex::Regex::new(p)
            .unwrap_or_else(|e| panic!("invalid pattern {:?}: {}", p, e))
            .is_match(rel_path)
    })
}
