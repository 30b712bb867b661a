#![deny(missing_docs)]

//! # Detect Command
//!
//! Reports which registered parser accepts a document.

use crate::error::{CliError, CliResult};
use postnorm_core::ParserRegistry;
use std::fs;
use std::path::PathBuf;

/// Arguments for the detect command.
#[derive(clap::Args, Debug, Clone)]
pub struct DetectArgs {
    /// Path to the collection document.
    pub input: PathBuf,
}

/// Executes detection, printing the version label.
pub fn execute(args: &DetectArgs) -> CliResult<()> {
    let contents = fs::read(&args.input)?;
    println!("{}", detect_version(&contents)?);
    Ok(())
}

fn detect_version(contents: &[u8]) -> CliResult<&'static str> {
    let registry = ParserRegistry::default();
    registry
        .find(contents)
        .map(|parser| parser.version())
        .ok_or_else(|| {
            CliError::General(format!(
                "unrecognized format; supported versions: {}",
                registry.versions().join(", ")
            ))
        })
}
