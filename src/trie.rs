//! Path compression trie
//!
//! Compresses the per-file assignment into the minimal set of boundary
//! nodes: directory prefixes or single files whose owning database
//! differs from their parent's. The trie is built once per run: insert
//! every assignment, label bottom-up, select top-down, discard.
//!
//! Labels are never stored on the mutable nodes. The selection pass
//! first computes an immutable labeled view of the whole tree in a
//! single post-order pass, so "label reflects current subtree
//! contents" holds by construction.

use std::collections::{BTreeMap, BTreeSet};

/// One path segment. Children are keyed by segment name; the terminal
/// set is non-empty only if some file's path ends exactly here.
#[derive(Debug, Default)]
struct Node {
    children: BTreeMap<String, Node>,
    terminal_dbs: BTreeSet<String>,
}

/// Labeled view of a node, produced bottom-up during selection.
///
/// `label` is the single database key owning the entire subtree, or
/// `None` when the subtree is mixed.
struct Labeled<'a> {
    label: Option<&'a str>,
    children: BTreeMap<&'a str, Labeled<'a>>,
}

/// A boundary node chosen for output: its subtree is wholly owned by
/// `db_key` while its parent's subtree is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Root-relative path of the node; empty for the trie root.
    pub path: String,
    /// True when the node has no children: render as an exact file
    /// match rather than a directory prefix.
    pub is_file_leaf: bool,
    /// Owning database key for the node's whole subtree.
    pub db_key: String,
}

/// Trie over root-relative paths, one node per path segment.
///
/// Segments are never aliased across unrelated subtrees: `a/x` and
/// `b/x` produce two distinct `x` nodes.
#[derive(Debug, Default)]
pub struct PathTrie {
    root: Node,
}

impl PathTrie {
    /// Build a trie from a complete assignment.
    pub fn from_assignment<'a, I>(assignment: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut trie = Self::default();
        for (file, db_key) in assignment {
            trie.insert(file, db_key);
        }
        trie
    }

    /// Insert one file under its owning database key. Inserting the
    /// same pair twice leaves the trie unchanged.
    pub fn insert(&mut self, file: &str, db_key: &str) {
        let mut node = &mut self.root;
        for segment in file.split('/').filter(|s| !s.is_empty()) {
            node = node.children.entry(segment.to_string()).or_default();
        }
        node.terminal_dbs.insert(db_key.to_string());
    }

    /// Label the tree bottom-up, then select boundary nodes top-down.
    ///
    /// Selections cover each database's assigned files exactly (no
    /// more, no less), do not overlap, and are minimal: a node is never
    /// emitted when its parent already conveys the same label. An
    /// assignment that is entirely one database yields exactly one
    /// selection at the root (empty path, non-leaf). Recursion depth is
    /// bounded by path segment count.
    pub fn select(&self) -> Vec<Selection> {
        let labeled = annotate(&self.root);
        let mut selections = Vec::new();
        let mut segments = Vec::new();
        select_into(&labeled, &mut segments, None, &mut selections);
        selections
    }
}

/// Post-order labeling: a node's label is the single database key
/// agreed on by its own terminal set and every child's label. A
/// multi-key terminal set, a disagreeing child, or an unlabeled child
/// leaves the node unlabeled.
fn annotate(node: &Node) -> Labeled<'_> {
    let mut labels: BTreeSet<&str> = node.terminal_dbs.iter().map(String::as_str).collect();
    let mut mixed = false;
    let mut children = BTreeMap::new();
    for (segment, child) in &node.children {
        let labeled = annotate(child);
        match labeled.label {
            Some(label) => {
                labels.insert(label);
            }
            None => mixed = true,
        }
        children.insert(segment.as_str(), labeled);
    }

    let label = if mixed || labels.len() != 1 {
        None
    } else {
        labels.iter().next().copied()
    };
    Labeled { label, children }
}

/// Pre-order selection with the parent label carried as context. A
/// labeled node differing from its parent is a boundary: emit it and
/// stop descending, since the emitted pattern already covers the
/// subtree.
fn select_into<'a>(
    node: &Labeled<'a>,
    segments: &mut Vec<&'a str>,
    parent_label: Option<&str>,
    selections: &mut Vec<Selection>,
) {
    if let Some(label) = node.label {
        if parent_label != Some(label) {
            selections.push(Selection {
                path: segments.join("/"),
                is_file_leaf: node.children.is_empty(),
                db_key: label.to_string(),
            });
            return;
        }
    }

    for (segment, child) in &node.children {
        segments.push(segment);
        select_into(child, segments, node.label, selections);
        segments.pop();
    }
}
