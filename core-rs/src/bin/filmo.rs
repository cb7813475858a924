//! filmo - Film Ontology CLI
//!
//! Builds the OWL film ontology from a CSV table and queries it

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;

use film_onto::{render, run_build, run_query, BuildSummary, PipelineConfig, ReportFormat};

#[derive(Parser)]
#[command(name = "filmo")]
#[command(version)]
#[command(about = "Film Ontology builder and query tool", long_about = None)]
struct Cli {
    /// Pipeline config file (YAML)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the film table into an OWL ontology file
    Build {
        /// CSV film table
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Ontology file to write (RDF/XML)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List directors who also hold story, screenplay or character credits
    Query {
        /// Ontology file to read (defaults to the configured output)
        #[arg(long)]
        ontology: Option<PathBuf>,
        /// Output format (table, json, yaml)
        #[arg(long, default_value = "table")]
        format: ReportFormat,
    },
    /// Build, then query the freshly written ontology
    Run {
        /// CSV film table
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Ontology file to write (RDF/XML)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Output format (table, json, yaml)
        #[arg(long, default_value = "table")]
        format: ReportFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    match cli.command {
        Commands::Build { input, output } => {
            let config = config.with_overrides(input, output);
            build(&config)?;
        }

        Commands::Query { ontology, format } => {
            let path = ontology.unwrap_or_else(|| config.output.clone());
            query(&path, &config, format)?;
        }

        Commands::Run { input, output, format } => {
            let config = config.with_overrides(input, output);
            let summary = build(&config)?;
            query(&summary.output, &config, format)?;
        }
    }

    Ok(())
}

fn build(config: &PipelineConfig) -> Result<BuildSummary> {
    let summary = run_build(config).with_context(|| {
        format!(
            "Failed to build ontology from {}",
            config.input.display()
        )
    })?;

    tracing::info!(
        triples = summary.triples,
        films = summary.stats.films,
        merged_films = summary.stats.merged_films,
        release_dates = summary.stats.release_dates,
        "Build finished"
    );
    println!("Successfully wrote OWL file: {}", summary.output.display());

    Ok(summary)
}

fn query(path: &Path, config: &PipelineConfig, format: ReportFormat) -> Result<()> {
    let table = run_query(path, &config.ontology_iri)
        .with_context(|| format!("Failed to query ontology {}", path.display()))?;

    print!("{}", render(&table, format)?);
    Ok(())
}
