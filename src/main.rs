//! triplify CLI
//!
//! Converts JSON documents into Dgraph-ready RDF statements and renders
//! schema diagrams recovered from RDF statement files.

use clap::Parser;
use triplify::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    let runner = Runner::new(cli);
    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
