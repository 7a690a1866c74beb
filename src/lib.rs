//! clangd-gen: compilation-database reconciliation for clangd
//!
//! A repository with several build configurations ends up with several
//! `compile_commands.json` files covering overlapping or disjoint
//! subsets of the tree. clangd can only follow one database per file,
//! so this crate computes a single assignment (every claimed file maps
//! to exactly one database), compresses it into a minimal set of
//! `PathMatch` fragments, and emits the result as a `.clangd`
//! configuration.
//!
//! # Pipeline
//!
//! 1. [`discover`] walks the root for `compile_commands.json` files.
//! 2. [`database`] reads each one into claims, tolerating malformed
//!    records and documents.
//! 3. [`assign`] resolves each file to one database, recording
//!    conflicts and breaking ties deterministically.
//! 4. [`trie`] compresses the assignment into boundary selections.
//! 5. [`render`] turns selections into anchored regexes and the final
//!    multi-document YAML.
//!
//! The whole pipeline is synchronous, deterministic, and in-memory;
//! [`generate::generate`] runs it end to end.
//!
//! # Example
//!
//! ```no_run
//! use clangd_gen::{generate, ClangdConfig};
//! use std::path::Path;
//!
//! let root = Path::new("/path/to/repo");
//! let config = ClangdConfig::load(root);
//! let generation = generate(root, &config)?;
//! std::fs::write(root.join(".clangd"), &generation.content)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assign;
pub mod cli;
pub mod commands;
pub mod config;
pub mod database;
pub mod discover;
pub mod error;
pub mod generate;
pub mod paths;
pub mod render;
pub mod trie;

// Re-export commonly used types
pub use assign::{resolve, resolve_with, specificity_order, Resolution};
pub use cli::{Cli, Commands, OutputFormat};
pub use config::ClangdConfig;
pub use database::{read_claims, Claim};
pub use discover::{database_key, discover_databases, DATABASE_FILE_NAME};
pub use error::{ClangdGenError, Result};
pub use generate::{generate, Generation, RunStats};
pub use render::{build_fragments, pattern_for, render_clangd};
pub use trie::{PathTrie, Selection};
