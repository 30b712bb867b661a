#![deny(missing_docs)]

//! # Convert Command
//!
//! Parses a collection document and writes the canonical model.

use crate::error::{CliError, CliResult};
use postnorm_core::{parse, Collection, HeaderMatching, ParseOptions};
use std::fs;
use std::path::{Path, PathBuf};

/// Output encodings.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

/// Arguments for the convert command.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Path to the collection document.
    pub input: PathBuf,

    /// Options file (.yaml/.yml or .json). Flags below are added to it.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Request header key to drop. Repeatable.
    #[clap(
        long = "ignore-request-header",
        env = "POSTNORM_IGNORE_REQUEST_HEADERS",
        value_delimiter = ','
    )]
    pub ignored_request_headers: Vec<String>,

    /// Response header key to drop. Repeatable.
    #[clap(
        long = "ignore-response-header",
        env = "POSTNORM_IGNORE_RESPONSE_HEADERS",
        value_delimiter = ','
    )]
    pub ignored_response_headers: Vec<String>,

    /// Compare header keys ignoring ASCII case.
    #[clap(long)]
    pub case_insensitive_headers: bool,

    /// Output encoding.
    #[clap(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output path. Prints to stdout if not provided.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

/// Executes the conversion.
pub fn execute(args: &ConvertArgs) -> CliResult<()> {
    let options = build_options(args)?;
    let contents = fs::read(&args.input)?;
    let collection = parse(&contents, &options)?;
    let rendered = render(&collection, args.format)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, rendered)?;
            tracing::info!(output = %path.display(), "wrote canonical model");
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn build_options(args: &ConvertArgs) -> CliResult<ParseOptions> {
    let mut options = match &args.config {
        Some(path) => load_options(path)?,
        None => ParseOptions::default(),
    };

    options
        .ignored_request_headers
        .extend(args.ignored_request_headers.iter().cloned());
    options
        .ignored_response_headers
        .extend(args.ignored_response_headers.iter().cloned());
    if args.case_insensitive_headers {
        options.header_matching = HeaderMatching::CaseInsensitive;
    }

    Ok(options)
}

fn load_options(path: &Path) -> CliResult<ParseOptions> {
    let content = fs::read_to_string(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    let options = match ext {
        "json" => ParseOptions::from_json_str(&content)?,
        _ => ParseOptions::from_yaml_str(&content)?,
    };
    Ok(options)
}

fn render(collection: &Collection, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(collection)
            .map_err(|e| CliError::General(format!("JSON serialization failed: {}", e))),
        OutputFormat::Yaml => serde_yaml::to_string(collection)
            .map_err(|e| CliError::General(format!("YAML serialization failed: {}", e))),
    }
}
