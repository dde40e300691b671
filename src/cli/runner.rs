//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::encode::{encode, EncodeOptions};
use crate::error::{Error, Result, ResultExt};
use crate::graph::{extract, render_dot};
use crate::schema::synthesize;
use crate::triple::{parse_triples, Triple};
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Convert {
                input,
                output,
                base_prefix,
                schema_file,
            } => self.convert(input, output, base_prefix, schema_file.as_deref()),
            Commands::Visualize { input, output } => self.visualize(input, output),
        }
    }

    /// Forward pipeline: JSON file to RDF statements plus optional schema
    fn convert(
        &self,
        input: &Path,
        output: &Path,
        base_prefix: &str,
        schema_file: Option<&Path>,
    ) -> Result<()> {
        let json = read_input(input)?;
        let value: serde_json::Value = serde_json::from_str(&json)?;

        let options = EncodeOptions::new().with_base_prefix(base_prefix);
        let triples = encode(&value, &options);
        write_statements(output, &triples).context("failed to write RDF output")?;
        info!(
            statements = triples.len(),
            output = %output.display(),
            "converted JSON to RDF statements"
        );

        if let Some(schema_path) = schema_file {
            let schema = synthesize(&triples);
            fs::write(schema_path, schema.to_dql())
                .context("failed to write DQL schema output")?;
            info!(
                predicates = schema.len(),
                output = %schema_path.display(),
                "generated DQL schema"
            );
        }

        Ok(())
    }

    /// Reverse pipeline: RDF statements to a DOT schema diagram
    fn visualize(&self, input: &Path, output: &Path) -> Result<()> {
        let text = read_input(input)?;

        let report = parse_triples(&text);
        for line in &report.skipped {
            warn!(
                line = line.line_number,
                text = %line.text,
                "skipped malformed statement"
            );
        }

        let graph = extract(&report.triples);
        if !graph.dropped.is_empty() {
            warn!(
                count = graph.dropped.len(),
                "dropped statements with untyped subjects"
            );
        }

        fs::write(output, render_dot(&graph)).context("failed to write DOT output")?;
        info!(
            nodes = graph.len(),
            edges = graph.edges.len(),
            output = %output.display(),
            "generated DOT diagram"
        );
        info!("render a PNG with: dot -Tpng {} -o out.png", output.display());

        Ok(())
    }
}

fn read_input(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::file_not_found(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}

fn write_statements(path: &Path, triples: &[Triple]) -> Result<()> {
    let file = fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    for triple in triples {
        writeln!(writer, "{triple}")?;
    }
    writer.flush()?;
    Ok(())
}
