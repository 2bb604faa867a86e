//! slugref CLI - link-reference generator for MkDocs sites.
//!
//! Reads `mkdocs.yml`, collects page slugs and heading anchors, writes
//! `slugs.md` and `<docs_dir>/link-refs.md`, and injects the snippet include
//! into every navigation page.

mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::GenerateArgs;
use output::Output;

/// slugref - generate link references from page slugs and headings.
#[derive(Parser)]
#[command(name = "slugref", version, about)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.generate.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.generate.execute() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
