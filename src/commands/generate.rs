//! Generate command handler - the full pipeline plus the write

use std::fs;

use crate::cli::{GenerateArgs, OutputFormat};
use crate::commands::CommandContext;
use crate::error::{ClangdGenError, Result};
use crate::generate::generate;
use crate::{paths, ClangdConfig};

/// Run the generate command.
///
/// Writes `<root>/.clangd` (or `--output`) and returns the run
/// statistics; with `--dry-run` the rendered document itself is
/// returned and nothing touches the disk. The file is written only
/// after the whole pipeline succeeded, so a failing run never leaves a
/// partial artifact behind.
pub fn run_generate(args: &GenerateArgs, ctx: &CommandContext) -> Result<String> {
    let root = paths::resolve_root(args.root.as_ref())?;
    let config = ClangdConfig::load(&root);

    if ctx.verbose {
        eprintln!(
            "Scanning {} ({} exclusions, {} background skips)",
            root.display(),
            config.exclude_path.len(),
            config.background_skip_path.len()
        );
    }

    let generation = generate(&root, &config)?;

    if args.dry_run {
        return Ok(generation.content);
    }

    let output = match &args.output {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => root.join(path),
        None => root.join(".clangd"),
    };
    fs::write(&output, &generation.content).map_err(|e| ClangdGenError::WriteFailure {
        path: output.clone(),
        message: e.to_string(),
    })?;

    let stats = &generation.stats;
    match ctx.format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "output": output.display().to_string(),
                "stats": stats,
            });
            serde_json::to_string_pretty(&report)
                .map(|s| format!("{}\n", s))
                .map_err(|e| ClangdGenError::ReportFailure {
                    message: e.to_string(),
                })
        }
        OutputFormat::Text => Ok(format!(
            "Generated: {}\n\
             compile_commands.json files: {}\n\
             PathMatch fragments: {}\n\
             Cross-database file conflicts: {}\n\
             Excluded path prefixes: {}\n\
             Background-index skip prefixes: {}\n",
            output.display(),
            stats.databases,
            stats.fragments,
            stats.conflicts,
            stats.excluded_prefixes,
            stats.background_skip_prefixes
        )),
    }
}
