//! # labki CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Logs go to stderr so stdout stays machine-readable.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use labki_cli::graph::{run_graph, GraphArgs};
use labki_cli::validate::{run_validate, ValidateArgs};
use labki_cli::OPERATIONAL_FAILURE;

/// Labki content-pack tooling.
///
/// Validates content-pack manifests against their declared schema version
/// and repository rules, and renders pack/page graphs.
#[derive(Parser, Debug)]
#[command(name = "labki", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a content-pack manifest and its page files.
    Validate(ValidateArgs),

    /// Generate a graph of packs and pages.
    Graph(GraphArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "labki CLI starting");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Graph(args) => run_graph(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(OPERATIONAL_FAILURE)
        }
    }
}
