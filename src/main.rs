use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::{self, IsTerminal};

use yamlselect::config::Config;
use yamlselect::document::parser::parse_yaml;
use yamlselect::file::loader::{load_document_file, load_document_from_stdin};
use yamlselect::selection::{resolve_at, resolve_in_tree, Direction, ResolveOptions};

/// YAMLSelect - Resolve a selection in a YAML document to its enclosing node
#[derive(Parser)]
#[command(name = "yamlselect")]
#[command(version)]
#[command(
    about = "Resolve a text selection in a YAML document to the node that encloses it",
    long_about = None
)]
struct Cli {
    /// YAML file to read (omit to read from stdin)
    file: Option<String>,

    /// Character offset of the cursor, or of the selection start
    #[arg(short, long)]
    begin: usize,

    /// Character offset of the selection end
    #[arg(short, long)]
    end: Option<usize>,

    /// Widen a selected first key to the mapping it belongs to
    #[arg(short = 'k', long)]
    extend_keys: bool,

    /// Search backward out of whitespace when resolving a single offset
    #[arg(long, conflicts_with = "end")]
    backward: bool,

    /// Log the node paths compared during resolution
    #[arg(short, long)]
    debug: bool,

    /// Output format (default: from config, otherwise plain)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// "start end"
    Plain,
    /// {"start": .., "end": .., "text": ..}
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    start: usize,
    end: usize,
    text: &'a str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = Config::load();

    let document = match &cli.file {
        Some(path) => load_document_file(path)?,
        None => {
            if io::stdin().is_terminal() {
                bail!("No input: pass a YAML file or pipe a document on stdin");
            }
            load_document_from_stdin()?
        }
    };
    let tree = parse_yaml(&document)?;

    let mut options = ResolveOptions::from(&config);
    options.extend_keys |= cli.extend_keys;
    options.debug = cli.debug;

    let span = if cli.backward {
        resolve_at(&tree, cli.begin, Direction::Backward, &options)?
    } else {
        resolve_in_tree(&tree, cli.begin, cli.end, &options)?
    };

    let format = match cli.format {
        Some(format) => format,
        None => OutputFormat::from_str(&config.output_format, true).unwrap_or_else(|_| {
            log::warn!(
                "Unknown output format '{}' in config, using plain",
                config.output_format
            );
            OutputFormat::Plain
        }),
    };

    match format {
        OutputFormat::Plain => println!("{} {}", span.start, span.end),
        OutputFormat::Json => {
            let report = Report {
                start: span.start,
                end: span.end,
                text: span.slice(&document),
            };
            println!("{}", serde_json::to_string(&report)?);
        }
    }

    Ok(())
}
