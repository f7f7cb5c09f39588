//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// VendCheck - vendor onboarding compliance checks from the terminal.
#[derive(Debug, Parser)]
#[command(name = "vendcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Rule corpus JSON file (defaults to the bundled reference pack)
    #[arg(short, long, global = true, env = "VENDCHECK_RULES")]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a submission's documents against the rule pack
    Analyze(AnalyzeArgs),

    /// Redact contact PII from a text file
    Redact(RedactArgs),

    /// List the rules in the corpus
    Rules,
}

/// Arguments for `vendcheck analyze`.
#[derive(Debug, clap::Args)]
pub struct AnalyzeArgs {
    /// Plain-text document files, processed in the given order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Per-file class hint as `file=class`, e.g. `profile.txt=profile`
    /// (class is one of profile, past_performance, pricing)
    #[arg(long = "hint")]
    pub hints: Vec<String>,

    /// Also print the negotiation prep brief
    #[arg(long)]
    pub brief: bool,

    /// Also print the draft client email
    #[arg(long)]
    pub email: bool,
}

/// Arguments for `vendcheck redact`.
#[derive(Debug, clap::Args)]
pub struct RedactArgs {
    /// Text file to redact
    pub file: PathBuf,
}
