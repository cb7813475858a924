/**
 * pipeline.rs
 * Build and query runs
 *
 * build: CSV → schema + instances → RDF/XML file
 * query: RDF/XML file → fresh graph → writer-directors table
 */

use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::PipelineConfig;
use crate::errors::Result;
use crate::ingest::{FilmSource, IngestStats, RecordIngester};
use crate::ontology::{OntologyGraph, QueryTable, SparqlQuery};

/// Outcome of a build run
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    pub output: PathBuf,
    pub triples: usize,
    pub stats: IngestStats,
}

/// Build the full graph from a CSV source held in memory or on disk
pub fn build_graph<R: Read>(
    source: &mut FilmSource<R>,
    ontology_iri: &str,
) -> Result<(OntologyGraph, IngestStats)> {
    let mut graph = OntologyGraph::new(ontology_iri)?;

    let stats = {
        let mut ingester = RecordIngester::new(&mut graph)?;
        ingester.ingest_all(source.records())?;
        ingester.stats()
    };

    info!(
        rows = stats.rows,
        films = stats.films,
        persons = stats.persons,
        companies = stats.companies,
        omitted = stats.omitted_fields,
        "Ingestion complete"
    );

    Ok((graph, stats))
}

/// Read `config.input`, write the ontology to `config.output`
pub fn run_build(config: &PipelineConfig) -> Result<BuildSummary> {
    config.validate()?;
    info!("Reading film table: {}", config.input.display());

    let mut source = FilmSource::open(&config.input)?;
    let (graph, stats) = build_graph(&mut source, &config.ontology_iri)?;
    graph.save(&config.output)?;

    Ok(BuildSummary {
        output: config.output.clone(),
        triples: graph.len()?,
        stats,
    })
}

/// Run the writer-directors query against a loaded graph
pub fn query_writer_directors(graph: &OntologyGraph) -> Result<QueryTable> {
    let query = SparqlQuery::writer_directors(graph.namespace());
    let table = graph.query(&query)?;
    info!(rows = table.len(), "Query complete");
    Ok(table)
}

/// Load an ontology file and run the writer-directors query
pub fn run_query<P: AsRef<Path>>(ontology: P, ontology_iri: &str) -> Result<QueryTable> {
    let graph = OntologyGraph::load(ontology, ontology_iri)?;
    query_writer_directors(&graph)
}
