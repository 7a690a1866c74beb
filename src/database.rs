//! Compilation-database reading: one JSON document into claims
//!
//! A claim is a database's assertion that a root-relative file belongs
//! to it. Reading is tolerant at two levels: a record that is not an
//! object or has no `file` field is skipped, and a document that is
//! not valid JSON or not a top-level array is skipped in its entirety
//! with no partial results. Neither stops the run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::{discover, paths};

/// One (file, claiming database key) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    /// Root-relative file path, forward slashes.
    pub file: String,
    /// Key of the database claiming the file.
    pub db_key: String,
}

/// Tolerant view of one compile_commands.json record.
///
/// Compiler-invocation fields (`command`, `arguments`, `output`) are
/// opaque to the generator and never examined.
#[derive(Debug, Deserialize)]
struct CommandEntry {
    #[serde(default)]
    file: Option<String>,
    #[serde(default)]
    directory: Option<String>,
}

/// Read one database document into claims against `root`.
///
/// Resolved paths outside `root` and paths under an excluded prefix
/// are dropped: from the generator's perspective no database claims
/// them.
pub fn read_claims(db_path: &Path, root: &Path, excluded_prefixes: &[String]) -> Vec<Claim> {
    let db_key = discover::database_key(db_path, root);
    let db_dir = db_path.parent().unwrap_or(root);

    let text = match fs::read_to_string(db_path) {
        Ok(text) => text,
        Err(e) => {
            warn!("skipping unreadable database {}: {}", db_path.display(), e);
            return Vec::new();
        }
    };

    let document: serde_json::Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => {
            warn!("skipping malformed database {}: {}", db_path.display(), e);
            return Vec::new();
        }
    };
    let Some(records) = document.as_array() else {
        warn!(
            "skipping database {}: top level is not an array",
            db_path.display()
        );
        return Vec::new();
    };

    let mut claims = Vec::new();
    for record in records {
        let entry: CommandEntry = match serde_json::from_value(record.clone()) {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        let Some(resolved) = resolve_entry_file(&entry, db_dir) else {
            continue;
        };
        let Some(rel) = paths::relative_to_root(&resolved, root) else {
            continue;
        };
        if paths::is_excluded(&rel, excluded_prefixes) {
            continue;
        }
        claims.push(Claim {
            file: rel,
            db_key: db_key.clone(),
        });
    }
    claims
}

/// Resolve the absolute path a record refers to.
///
/// A relative `file` resolves against the record's `directory` when
/// present (itself resolved against the database directory when
/// relative), otherwise against the database directory. Resolution is
/// lexical: the target does not have to exist on disk.
fn resolve_entry_file(entry: &CommandEntry, db_dir: &Path) -> Option<PathBuf> {
    let file_value = entry.file.as_deref().filter(|f| !f.is_empty())?;
    let file_path = Path::new(file_value);
    if file_path.is_absolute() {
        return Some(paths::lexical_normalize(file_path));
    }

    let base = match entry.directory.as_deref().filter(|d| !d.is_empty()) {
        Some(dir) if Path::new(dir).is_absolute() => PathBuf::from(dir),
        Some(dir) => paths::lexical_normalize(&db_dir.join(dir)),
        None => db_dir.to_path_buf(),
    };
    Some(paths::lexical_normalize(&base.join(file_path)))
}
