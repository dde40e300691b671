//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// JSON to Dgraph RDF converter and schema visualizer
#[derive(Parser, Debug)]
#[command(name = "triplify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a JSON file to Dgraph RDF statements
    Convert {
        /// Path to the input JSON file
        input: PathBuf,

        /// Path to the output RDF file
        output: PathBuf,

        /// Base prefix for blank node identifiers
        #[arg(long, default_value = "node")]
        base_prefix: String,

        /// Path to an optional DQL schema output file
        #[arg(long)]
        schema_file: Option<PathBuf>,
    },

    /// Generate a GraphViz DOT diagram from an RDF statement file
    Visualize {
        /// Path to the input RDF file
        input: PathBuf,

        /// Path to the output DOT file
        output: PathBuf,
    },
}
