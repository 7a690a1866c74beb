//! End-to-end generation pipeline
//!
//! Discovery → reading → resolution → compression → rendering, in that
//! order, fully in memory. The resolver always sees the complete claim
//! set from every database before any tie-break decision, because
//! conflict resolution depends on global knowledge of all claimants.
//! Nothing is cached between runs; each invocation recomputes the full
//! assignment from the full input set.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::{assign, database, discover, render, ClangdConfig, ClangdGenError, PathTrie, Result};

/// Counters reported after a run, mirroring the shape of the output.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    /// Databases discovered (after exclusion), readable or not.
    pub databases: usize,
    /// Pattern groups in the output (one per database).
    pub fragments: usize,
    /// Files claimed by more than one database.
    pub conflicts: usize,
    /// Configured exclusion prefixes.
    pub excluded_prefixes: usize,
    /// Configured background-index skip prefixes.
    pub background_skip_prefixes: usize,
}

/// A finished generation: the rendered `.clangd` text plus run
/// statistics. Produced only when the whole pipeline succeeded;
/// callers never see a partial document.
#[derive(Debug, Clone)]
pub struct Generation {
    pub content: String,
    pub stats: RunStats,
}

/// Run the full pipeline over `root` with the given configuration.
///
/// The single fatal condition is an empty database set after
/// exclusion; every malformed document or record below that is
/// absorbed where it is read.
pub fn generate(root: &Path, config: &ClangdConfig) -> Result<Generation> {
    let databases = discover::discover_databases(root, &config.exclude_path);
    if databases.is_empty() {
        return Err(ClangdGenError::NoDatabases {
            root: root.to_path_buf(),
        });
    }
    debug!("discovered {} compilation databases", databases.len());

    let mut claims = Vec::new();
    for db_path in &databases {
        claims.extend(database::read_claims(db_path, root, &config.exclude_path));
    }
    debug!("collected {} claims", claims.len());

    let resolution = assign::resolve(&claims);
    let trie = PathTrie::from_assignment(&resolution.assignment);
    let selections = trie.select();
    debug!(
        "compressed {} assignments into {} boundary selections",
        resolution.assignment.len(),
        selections.len()
    );

    let db_keys: Vec<String> = databases
        .iter()
        .map(|path| discover::database_key(path, root))
        .collect();
    let fragments = render::build_fragments(&selections, &db_keys);
    let content = render::render_clangd(
        &fragments,
        resolution.conflicts.len(),
        &config.exclude_path,
        &config.background_skip_path,
    );

    Ok(Generation {
        content,
        stats: RunStats {
            databases: databases.len(),
            fragments: fragments.len(),
            conflicts: resolution.conflicts.len(),
            excluded_prefixes: config.exclude_path.len(),
            background_skip_prefixes: config.background_skip_path.len(),
        },
    })
}
