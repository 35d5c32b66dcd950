//! packer — write the packed method document for a JSON list of analysed methods.
//!
//! - `packer methods.json -o methods.xml`
//! - `packer < methods.json` writes to stdout

use anyhow::{Context, Result};
use clap::Parser;
use packer::{input, render, WriterOptions};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "packer",
    about = "Pack method signatures, javadoc and inferred contracts into one XML document"
)]
struct Cli {
    /// JSON file of method entries. If omitted, reads from stdin.
    input: Option<PathBuf>,

    /// Output file. If omitted, writes to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Pretty-print with this many spaces per level
    #[arg(long)]
    indent: Option<usize>,

    /// Report skipped methods and progress
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let entries = match cli.input {
        Some(ref path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            input::read_entries(BufReader::new(file))
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        None => input::read_entries(io::stdin().lock()).context("failed to read stdin")?,
    };

    let options = WriterOptions { indent: cli.indent };
    let doc = match cli.output {
        Some(ref path) => render::pack_methods(path, &entries, options)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => render::pack_to_writer(io::stdout().lock(), &entries, options)
            .context("failed to write stdout")?,
    };

    tracing::info!(
        written = doc.methods.len(),
        skipped = doc.skipped,
        "packed methods"
    );
    Ok(())
}
