//! Databases command handler - list discovered compilation databases

use serde::Serialize;

use crate::cli::{DatabasesArgs, OutputFormat};
use crate::commands::CommandContext;
use crate::error::{ClangdGenError, Result};
use crate::{database, discover, paths, ClangdConfig};

/// One discovered database in the report.
#[derive(Debug, Serialize)]
struct DatabaseReport {
    key: String,
    claims: usize,
}

/// Run the databases command: discovery plus per-database claim
/// counts. A database whose document is malformed reports zero claims
/// but still appears; it exists on disk and will receive a fallback
/// pattern at generation time.
pub fn run_databases(args: &DatabasesArgs, ctx: &CommandContext) -> Result<String> {
    let root = paths::resolve_root(args.root.as_ref())?;
    let config = ClangdConfig::load(&root);

    let databases = discover::discover_databases(&root, &config.exclude_path);
    if databases.is_empty() {
        return Err(ClangdGenError::NoDatabases { root });
    }

    let reports: Vec<DatabaseReport> = databases
        .iter()
        .map(|path| DatabaseReport {
            key: discover::database_key(path, &root),
            claims: database::read_claims(path, &root, &config.exclude_path).len(),
        })
        .collect();

    match ctx.format {
        OutputFormat::Json => serde_json::to_string_pretty(&reports)
            .map(|s| format!("{}\n", s))
            .map_err(|e| ClangdGenError::ReportFailure {
                message: e.to_string(),
            }),
        OutputFormat::Text => {
            let mut out = String::new();
            for report in &reports {
                out.push_str(&format!("{}: {} files\n", report.key, report.claims));
            }
            Ok(out)
        }
    }
}
