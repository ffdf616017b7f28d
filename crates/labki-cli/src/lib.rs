//! # labki-cli
//!
//! The `labki` command-line tool over the validation engine and the graph
//! emitters.
//!
//! ## Subcommands
//!
//! - `labki validate`: validate a manifest; human or `--json` report.
//! - `labki graph`: render packs and pages as DOT, Mermaid, or JSON.
//!
//! ```bash
//! labki validate manifest.yml
//! labki validate manifest.yml --json --schema-dir schemas/
//! labki graph manifest.yml --format mermaid -o graph.mmd
//! ```
//!
//! Exit codes: `0` success, `1` validation errors, `2` operational failure
//! (unreadable input, unwritable output, bad schema directory).

pub mod graph;
pub mod report;
pub mod validate;

/// Exit code for failures outside validation itself.
pub const OPERATIONAL_FAILURE: u8 = 2;
