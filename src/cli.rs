//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Compilation-database reconciler for clangd
#[derive(Parser, Debug)]
#[command(name = "clangd-gen")]
#[command(about = "Reconciles compile_commands.json databases into a single minimal .clangd")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format for reports (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands for clangd-gen
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the .clangd configuration from discovered databases
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// List discovered compilation databases and their claim counts
    #[command(visible_alias = "db")]
    Databases(DatabasesArgs),

    /// Report files claimed by more than one database
    Conflicts(ConflictsArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Repository root to scan (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Output path (defaults to <root>/.clangd)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the rendered document to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the databases command
#[derive(Args, Debug)]
pub struct DatabasesArgs {
    /// Repository root to scan (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub root: Option<PathBuf>,
}

/// Arguments for the conflicts command
#[derive(Args, Debug)]
pub struct ConflictsArgs {
    /// Repository root to scan (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub root: Option<PathBuf>,
}

/// Output format for report commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text (default for terminal)
    #[default]
    #[value(alias = "pretty")]
    Text,
    /// JSON for machine parsing
    Json,
}
