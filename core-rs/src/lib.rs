//! # Film Ontology - tabular film records to an OWL instance graph
//!
//! Reads a film table (one row per film), declares a small OWL schema and
//! asserts every row as typed individuals: films, people in their director,
//! actor and writer roles, production companies and release dates. The graph
//! is written as RDF/XML and can be queried with SPARQL afterwards.
//!
//! ## Pipeline
//!
//! ```text
//!  films.csv ──► FilmSource ──► RecordIngester ──► OntologyGraph ──► batman.owl
//!                                   │    ▲                              │
//!                            IdentityCache  SchemaBuilder               ▼
//!                                                   SPARQL query ──► report table
//! ```
//!
//! People are shared across rows and roles: the same name always resolves to
//! the same resource, so a director who also writes shows up as one node
//! typed both `Director` and `Writer`.

pub mod config;
pub mod errors;
pub mod ingest;
pub mod ontology;
pub mod pipeline;
pub mod report;

pub use config::PipelineConfig;
pub use errors::{FilmOntoError, Result};
pub use ingest::{FilmRecord, FilmSource, IdentityCache, IngestStats, RecordIngester};
pub use ontology::{
    DatatypeProperty, Namespace, ObjectProperty, OntologyClass, OntologyGraph, QueryTable,
    SchemaBuilder, SparqlQuery, TypedValue,
};
pub use pipeline::{build_graph, query_writer_directors, run_build, run_query, BuildSummary};
pub use report::{render, render_table, ReportFormat};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default ontology IRI
pub const DEFAULT_ONTOLOGY_IRI: &str =
    "http://www.semanticweb.org/charleswan/ontologies/batman-ontology";

/// Default film table
pub const DEFAULT_INPUT: &str = "batman_films.csv";

/// Default ontology document
pub const DEFAULT_OUTPUT: &str = "batman.owl";
