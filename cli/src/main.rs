#![deny(missing_docs)]

//! # Postnorm CLI
//!
//! Command Line Interface over the collection normalizer.
//!
//! Supported Commands:
//! - `convert`: Parse a collection and emit the canonical model as JSON or YAML.
//! - `detect`: Report which format version a document is recognized as.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;

mod convert;
mod detect;
mod error;

#[derive(Parser, Debug)]
#[clap(author, version, about = "API collection normalizer")]
struct Cli {
    /// Log at debug level regardless of `RUST_LOG`.
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a collection and write its canonical model.
    Convert(convert::ConvertArgs),
    /// Print the detected format version of a collection.
    Detect(detect::DetectArgs),
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Convert(args) => convert::execute(args)?,
        Commands::Detect(args) => detect::execute(args)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
