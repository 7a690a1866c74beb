//! Pattern rendering: boundary selections to anchored regexes and the
//! final `.clangd` document
//!
//! The renderer does no cross-database reasoning: non-overlap of the
//! selections is guaranteed upstream by the trie. Its own job is
//! textual: escape, group, order, deduplicate, and emit. The `.clangd`
//! output is multi-document YAML produced as text; it is never parsed
//! back.

use std::collections::{BTreeMap, BTreeSet};

use crate::trie::Selection;

/// Regex for one boundary selection.
///
/// A file leaf matches the exact path; a directory boundary matches
/// everything beneath it. The trie root (empty path) covers the whole
/// tree.
pub fn pattern_for(path: &str, is_file_leaf: bool) -> String {
    if path.is_empty() {
        return ".*".to_string();
    }
    let escaped = regex::escape(path);
    if is_file_leaf {
        format!("^{}$", escaped)
    } else {
        format!("^{}/.*", escaped)
    }
}

/// Group selection patterns per database key.
///
/// Every database in `db_keys` that contributed no selection still
/// gets exactly one fallback pattern over its own key, so a database
/// present on disk stays addressable even when no file resolved to it.
/// Within a database, patterns are deduplicated and ordered longest
/// first, then lexicographically, so greedy first-match consumers
/// behave predictably. Groups iterate in database-key order.
pub fn build_fragments(
    selections: &[Selection],
    db_keys: &[String],
) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<&str, BTreeSet<String>> = BTreeMap::new();
    for sel in selections {
        grouped
            .entry(sel.db_key.as_str())
            .or_default()
            .insert(pattern_for(&sel.path, sel.is_file_leaf));
    }
    for key in db_keys {
        grouped
            .entry(key.as_str())
            .or_insert_with(|| BTreeSet::from([format!("^{}/.*", regex::escape(key))]));
    }

    grouped
        .into_iter()
        .map(|(key, patterns)| {
            let mut ordered: Vec<String> = patterns.into_iter().collect();
            ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
            (key.to_string(), ordered)
        })
        .collect()
}

/// Render the final `.clangd` multi-document YAML.
///
/// Layout: a header comment (plus a conflict-count prelude when any
/// file had multiple claimants, counted but never named), one
/// `Index.Background: Skip` document per background-skip prefix, then
/// one document per database carrying the PathMatch alternation, the
/// shared PathExclude (when exclusions are configured), and the
/// database key as `CompileFlags.CompilationDatabase`.
pub fn render_clangd(
    fragments: &BTreeMap<String, Vec<String>>,
    conflict_count: usize,
    excluded_prefixes: &[String],
    background_skip_prefixes: &[String],
) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("# This file is auto-generated by clangd-gen; do not edit.".to_string());
    if conflict_count > 0 {
        lines.push(format!(
            "# Conflicts: {} files were found in multiple compile databases.",
            conflict_count
        ));
        lines.push("# The generator selected one database deterministically per file.".to_string());
    }
    lines.push(String::new());

    let mut first = true;
    for prefix in background_skip_prefixes {
        if !first {
            lines.push("---".to_string());
        }
        first = false;
        let trimmed = prefix.strip_suffix('/').unwrap_or(prefix);
        lines.push("If:".to_string());
        lines.push(format!("  PathMatch: ^{}/.*", regex::escape(trimmed)));
        lines.push("Index:".to_string());
        lines.push("  Background: Skip".to_string());
    }

    let exclude_pattern = exclusion_pattern(excluded_prefixes);
    for (db_key, patterns) in fragments {
        if !first {
            lines.push("---".to_string());
        }
        first = false;
        lines.push("If:".to_string());
        lines.push(format!("  PathMatch: {}", patterns.join("|")));
        if let Some(pattern) = &exclude_pattern {
            lines.push(format!("  PathExclude: {}", pattern));
        }
        lines.push("CompileFlags:".to_string());
        lines.push(format!("  CompilationDatabase: {}", db_key));
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Combined `PathExclude` alternation over the exclusion prefixes, or
/// `None` when there is nothing to exclude. Each prefix matches both
/// the bare directory and its subtree.
fn exclusion_pattern(excluded_prefixes: &[String]) -> Option<String> {
    if excluded_prefixes.is_empty() {
        return None;
    }
    let parts: Vec<String> = excluded_prefixes
        .iter()
        .map(|prefix| {
            let trimmed = prefix.strip_suffix('/').unwrap_or(prefix);
            format!("{}(?:/.*)?", regex::escape(trimmed))
        })
        .collect();
    Some(format!("^(?:{})$", parts.join("|")))
}
