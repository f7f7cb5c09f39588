//! VendCheck CLI - vendor onboarding compliance checks from the terminal.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vendcheck_cli::{commands, Cli, Command, Formatter};
use vendcheck_sdk::Analyzer;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> vendcheck_cli::Result<()> {
    let cli = Cli::parse();
    let formatter = Formatter::new(cli.format, !cli.no_color);

    let analyzer = match &cli.rules {
        Some(path) => Analyzer::from_corpus_path(path)?,
        None => Analyzer::reference(),
    };

    let output = match &cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, &analyzer, &formatter)?,
        Command::Redact(args) => commands::execute_redact(args)?,
        Command::Rules => commands::execute_rules(&analyzer, &formatter)?,
    };
    println!("{output}");
    Ok(())
}
