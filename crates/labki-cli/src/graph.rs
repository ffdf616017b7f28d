//! # Graph Subcommand
//!
//! Renders the pack/page graph of a manifest as DOT, Mermaid, or JSON,
//! writing to stdout or a file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use labki_graph::{render_file, GraphFormat};

/// Arguments for the `labki graph` subcommand.
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Path to the manifest.
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Output format: dot, mermaid, or json.
    #[arg(long, default_value_t = GraphFormat::Dot)]
    pub format: GraphFormat,

    /// Output file path; `-` writes to stdout.
    #[arg(short, long, value_name = "PATH", default_value = "-")]
    pub output: PathBuf,
}

impl GraphArgs {
    /// Destination file, or `None` for stdout.
    pub fn destination(&self) -> Option<&Path> {
        let raw = self.output.as_os_str();
        if raw.is_empty() || raw == "-" {
            None
        } else {
            Some(&self.output)
        }
    }
}

/// Execute the graph subcommand.
pub fn run_graph(args: &GraphArgs) -> Result<u8> {
    let content = render_file(&args.manifest, args.format)
        .with_context(|| format!("failed to render graph for {}", args.manifest.display()))?;

    match args.destination() {
        Some(path) => {
            std::fs::write(path, &content)
                .with_context(|| format!("failed to write graph to {}", path.display()))?;
            tracing::info!(
                format = %args.format,
                output = %path.display(),
                "wrote graph"
            );
        }
        None => print!("{content}"),
    }
    Ok(0)
}
