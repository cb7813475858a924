/**
 * ontology module
 *
 * - schema: static class/property tables and the SchemaBuilder that declares them
 * - graph: OntologyGraph over an Oxigraph store (assertions, RDF/XML I/O, SPARQL)
 * - query: SPARQL query builders and tabular results
 */

pub mod graph;
pub mod query;
pub mod schema;

pub use graph::{Namespace, OntologyGraph, TypedValue};
pub use query::{QueryRecord, QueryTable, SparqlQuery};
pub use schema::{DatatypeProperty, ObjectProperty, OntologyClass, SchemaBuilder, ValueType};
