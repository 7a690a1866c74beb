//! Conflicts command handler - files claimed by more than one database
//!
//! The generate command only reports a conflict count; this command
//! names the files, their claimants, and the winner the tie-break
//! picked, for when the count alone is not enough to debug a build
//! setup.

use serde::Serialize;

use crate::cli::{ConflictsArgs, OutputFormat};
use crate::commands::CommandContext;
use crate::error::{ClangdGenError, Result};
use crate::{assign, database, discover, paths, ClangdConfig};

/// One conflicted file in the report.
#[derive(Debug, Serialize)]
struct ConflictReport {
    file: String,
    claimants: Vec<String>,
    resolved: String,
}

/// Run the conflicts command.
pub fn run_conflicts(args: &ConflictsArgs, ctx: &CommandContext) -> Result<String> {
    let root = paths::resolve_root(args.root.as_ref())?;
    let config = ClangdConfig::load(&root);

    let databases = discover::discover_databases(&root, &config.exclude_path);
    if databases.is_empty() {
        return Err(ClangdGenError::NoDatabases { root });
    }

    let mut claims = Vec::new();
    for db_path in &databases {
        claims.extend(database::read_claims(db_path, &root, &config.exclude_path));
    }
    let resolution = assign::resolve(&claims);

    let reports: Vec<ConflictReport> = resolution
        .conflicts
        .iter()
        .map(|(file, claimants)| ConflictReport {
            file: file.clone(),
            claimants: claimants.iter().cloned().collect(),
            resolved: resolution
                .assignment
                .get(file)
                .cloned()
                .unwrap_or_default(),
        })
        .collect();

    match ctx.format {
        OutputFormat::Json => serde_json::to_string_pretty(&reports)
            .map(|s| format!("{}\n", s))
            .map_err(|e| ClangdGenError::ReportFailure {
                message: e.to_string(),
            }),
        OutputFormat::Text => {
            if reports.is_empty() {
                return Ok("No cross-database conflicts.\n".to_string());
            }
            let mut out = String::new();
            for report in &reports {
                out.push_str(&format!(
                    "{}: {} -> {}\n",
                    report.file,
                    report.claimants.join(", "),
                    report.resolved
                ));
            }
            Ok(out)
        }
    }
}
