//! clangd-gen CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use clangd_gen::cli::{Cli, Commands};
use clangd_gen::commands::{run_conflicts, run_databases, run_generate, CommandContext};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = CommandContext {
        format: cli.format,
        verbose: cli.verbose,
    };
    let result = match &cli.command {
        Commands::Generate(args) => run_generate(args, &ctx),
        Commands::Databases(args) => run_databases(args, &ctx),
        Commands::Conflicts(args) => run_conflicts(args, &ctx),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Logs go to stderr so stdout stays clean for reports and --dry-run.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "clangd_gen=debug"
    } else {
        "clangd_gen=warn"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
