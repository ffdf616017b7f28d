//! # Validate Subcommand
//!
//! Validates one manifest and prints the report to stdout, as text or JSON.
//! The exit code is `1` iff any error-level diagnostic was produced;
//! warnings never fail the run.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use labki_schema::SchemaCorpus;
use labki_validate::RepoValidator;

use crate::report::{render_human, render_json};

/// Arguments for the `labki validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the manifest (YAML, or JSON with a `.json` extension).
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Output results as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Schema corpus directory containing `index.json`. Defaults to the
    /// corpus built into the binary.
    #[arg(long, value_name = "DIR", env = "LABKI_SCHEMA_DIR")]
    pub schema_dir: Option<PathBuf>,
}

impl ValidateArgs {
    /// Schema corpus selected by `--schema-dir`.
    pub fn corpus(&self) -> Result<SchemaCorpus> {
        match &self.schema_dir {
            Some(dir) if !dir.is_dir() => {
                bail!("schema directory not found: {}", dir.display())
            }
            Some(dir) => Ok(SchemaCorpus::directory(dir)),
            None => Ok(SchemaCorpus::default()),
        }
    }
}

/// Execute the validate subcommand, returning the text it prints and the
/// exit code.
pub fn validate_to_string(args: &ValidateArgs) -> Result<(String, u8)> {
    if !args.manifest.exists() {
        bail!("manifest not found: {}", args.manifest.display());
    }
    let corpus = args.corpus()?;
    tracing::info!(
        manifest = %args.manifest.display(),
        corpus = %corpus.root().display(),
        "validating manifest"
    );

    let (code, diagnostics) = RepoValidator::new(corpus).validate(&args.manifest);
    tracing::info!(summary = %diagnostics.summary(), exit_code = code, "validation finished");

    let rendered = if args.json {
        render_json(&diagnostics)?
    } else {
        render_human(&diagnostics, Some("Validation results"))
    };
    Ok((rendered, code))
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure. Operational
/// failures (missing manifest or schema directory) are returned as `Err`.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let (rendered, code) = validate_to_string(args)?;
    print!("{rendered}");
    Ok(code)
}
