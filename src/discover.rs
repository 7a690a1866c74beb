//! Discovery of compilation databases under the repository root

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::paths;

/// File name every compilation database is stored under.
pub const DATABASE_FILE_NAME: &str = "compile_commands.json";

/// Collect every `compile_commands.json` under `root`, skipping
/// excluded prefixes. Results are sorted by path so everything
/// downstream sees databases in a stable order.
///
/// Build trees are routinely gitignored, so gitignore semantics are
/// disabled; hidden directories are walked; symlinks are not followed.
pub fn discover_databases(root: &Path, excluded_prefixes: &[String]) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .hidden(false)
        .follow_links(false)
        .build();

    let mut discovered = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("walk error under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if entry.file_name() != DATABASE_FILE_NAME {
            continue;
        }
        let Some(rel) = paths::relative_to_root(entry.path(), root) else {
            continue;
        };
        if paths::is_excluded(&rel, excluded_prefixes) {
            continue;
        }
        discovered.push(entry.into_path());
    }
    discovered.sort();
    discovered
}

/// Database key for a database file: its parent directory relative to
/// the root, forward slashes. A database sitting at the root itself
/// gets the key `.`.
pub fn database_key(db_path: &Path, root: &Path) -> String {
    let parent = db_path.parent().unwrap_or(root);
    paths::relative_to_root(parent, root).unwrap_or_else(|| ".".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_db(root: &Path, rel_dir: &str) -> PathBuf {
        let dir = root.join(rel_dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(DATABASE_FILE_NAME);
        fs::write(&path, "[]").unwrap();
        path
    }

    #[test]
    fn test_discovery_is_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        write_db(root, "build/zeta");
        write_db(root, "build/alpha");
        write_db(root, "out");

        let found = discover_databases(root, &[]);
        let keys: Vec<String> = found.iter().map(|p| database_key(p, root)).collect();
        assert_eq!(keys, vec!["build/alpha", "build/zeta", "out"]);
    }

    #[test]
    fn test_discovery_ignores_other_files() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        write_db(root, "build");
        fs::write(root.join("build").join("compile_flags.txt"), "-Wall").unwrap();

        let found = discover_databases(root, &[]);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_discovery_applies_exclusions() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        write_db(root, "build/keep");
        write_db(root, "build/skip");

        let excludes = vec!["build/skip/".to_string()];
        let found = discover_databases(root, &excludes);
        let keys: Vec<String> = found.iter().map(|p| database_key(p, root)).collect();
        assert_eq!(keys, vec!["build/keep"]);
    }

    #[test]
    fn test_discovery_walks_hidden_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        write_db(root, ".build/debug");

        let found = discover_databases(root, &[]);
        let keys: Vec<String> = found.iter().map(|p| database_key(p, root)).collect();
        assert_eq!(keys, vec![".build/debug"]);
    }

    #[test]
    fn test_database_key_at_root() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        let path = write_db(root, ".");
        assert_eq!(database_key(&path, root), ".");
    }
}
