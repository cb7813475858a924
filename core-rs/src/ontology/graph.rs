/**
 * graph.rs
 * Film ontology graph backed by an in-memory Oxigraph store
 */

use oxigraph::io::RdfFormat;
use oxigraph::model::vocab::rdf;
use oxigraph::model::{
    GraphName, GraphNameRef, Literal, NamedNode, Quad, Subject, SubjectRef, Term, TermRef,
};
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{FilmOntoError, Result};
use crate::ontology::query::{QueryTable, SparqlQuery};
use crate::ontology::schema::{owl, DatatypeProperty, ObjectProperty, OntologyClass, ValueType};

/// Maps local names to IRIs under `<ontology IRI>#`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    base: String,
}

impl Namespace {
    pub fn new(ontology_iri: &str) -> Self {
        Self {
            base: format!("{}#", ontology_iri.trim_end_matches('#')),
        }
    }

    /// Namespace prefix including the trailing `#`
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn iri(&self, local_name: &str) -> Result<NamedNode> {
        let iri = format!("{}{}", self.base, local_name);
        NamedNode::new(iri.as_str()).map_err(|e| FilmOntoError::InvalidIri(format!("{}: {}", iri, e)))
    }
}

/// A literal value tagged with its XSD datatype
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    String(String),
    Integer(i64),
    Float(f64),
}

impl TypedValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            TypedValue::String(_) => ValueType::String,
            TypedValue::Integer(_) => ValueType::Integer,
            TypedValue::Float(_) => ValueType::Float,
        }
    }

    /// Literal typed with the schema datatype of [`Self::value_type`]
    pub fn to_literal(&self) -> Literal {
        let lexical = match self {
            TypedValue::String(value) => value.clone(),
            TypedValue::Integer(value) => value.to_string(),
            TypedValue::Float(value) => value.to_string(),
        };
        Literal::new_typed_literal(lexical, self.value_type().datatype())
    }
}

pub struct OntologyGraph {
    store: Store,
    ontology_iri: String,
    namespace: Namespace,
    schema_asserted: bool,
}

impl OntologyGraph {
    /// Create an empty graph for the given ontology IRI
    pub fn new(ontology_iri: &str) -> Result<Self> {
        let store = Store::new().map_err(|e| FilmOntoError::Store(e.to_string()))?;

        let graph = Self {
            store,
            ontology_iri: ontology_iri.trim_end_matches('#').to_string(),
            namespace: Namespace::new(ontology_iri),
            schema_asserted: false,
        };

        // Reject malformed IRIs before any triple is asserted
        graph.ontology_node()?;

        Ok(graph)
    }

    /// Load an RDF/XML ontology document into a fresh graph
    pub fn load<P: AsRef<Path>>(path: P, ontology_iri: &str) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading ontology file: {}", path.display());

        if !path.exists() {
            return Err(FilmOntoError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let mut graph = Self::new(ontology_iri)?;
        graph.load_from_reader(BufReader::new(file))?;

        debug!(triples = graph.len()?, "Ontology loaded");
        Ok(graph)
    }

    /// Parse RDF/XML from any reader into this graph
    pub fn load_from_reader<R: Read>(&mut self, reader: R) -> Result<()> {
        self.store
            .load_from_reader(RdfFormat::RdfXml, reader)
            .map_err(|e| FilmOntoError::Load(e.to_string()))?;

        let header = Quad::new(
            self.ontology_node()?,
            rdf::TYPE,
            owl::ONTOLOGY.into_owned(),
            GraphName::DefaultGraph,
        );
        if self.contains(&header)? {
            self.schema_asserted = true;
        }
        Ok(())
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn has_schema(&self) -> bool {
        self.schema_asserted
    }

    pub(crate) fn mark_schema_asserted(&mut self) {
        self.schema_asserted = true;
    }

    pub fn ontology_node(&self) -> Result<NamedNode> {
        NamedNode::new(self.ontology_iri.as_str())
            .map_err(|e| FilmOntoError::InvalidIri(format!("{}: {}", self.ontology_iri, e)))
    }

    pub fn class_node(&self, class: OntologyClass) -> Result<NamedNode> {
        self.namespace.iri(class.local_name())
    }

    pub fn object_property_node(&self, property: ObjectProperty) -> Result<NamedNode> {
        self.namespace.iri(property.local_name())
    }

    pub fn datatype_property_node(&self, property: DatatypeProperty) -> Result<NamedNode> {
        self.namespace.iri(property.local_name())
    }

    /// Assert one triple into the default graph
    pub fn insert(
        &mut self,
        subject: impl Into<Subject>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Term>,
    ) -> Result<()> {
        let quad = Quad::new(subject, predicate, object, GraphName::DefaultGraph);
        self.store
            .insert(&quad)
            .map_err(|e| FilmOntoError::Store(e.to_string()))?;
        Ok(())
    }

    /// `subject rdf:type <class>`
    pub fn assert_type(&mut self, subject: &NamedNode, class: OntologyClass) -> Result<()> {
        let class_node = self.class_node(class)?;
        self.insert(subject.clone(), rdf::TYPE, class_node)
    }

    /// `subject <property> target`
    pub fn assert_relation(
        &mut self,
        subject: &NamedNode,
        property: ObjectProperty,
        target: &NamedNode,
    ) -> Result<()> {
        let predicate = self.object_property_node(property)?;
        self.insert(subject.clone(), predicate, target.clone())
    }

    /// `subject <property> "value"^^datatype`
    ///
    /// The value must match the property's declared range.
    pub fn assert_literal(
        &mut self,
        subject: &NamedNode,
        property: DatatypeProperty,
        value: TypedValue,
    ) -> Result<()> {
        if value.value_type() != property.value_type() {
            return Err(FilmOntoError::ValidationError(format!(
                "{} expects {:?}, got {:?}",
                property.local_name(),
                property.value_type(),
                value
            )));
        }

        let predicate = self.datatype_property_node(property)?;
        self.insert(subject.clone(), predicate, value.to_literal())
    }

    pub fn contains(&self, quad: &Quad) -> Result<bool> {
        self.store
            .contains(quad)
            .map_err(|e| FilmOntoError::Store(e.to_string()))
    }

    pub fn len(&self) -> Result<usize> {
        self.store
            .len()
            .map_err(|e| FilmOntoError::Store(e.to_string()))
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Every triple of the default graph
    pub fn triples(&self) -> Result<Vec<Quad>> {
        self.store
            .quads_for_pattern(None, None, None, Some(GraphNameRef::DefaultGraph))
            .map(|quad| quad.map_err(|e| FilmOntoError::Store(e.to_string())))
            .collect()
    }

    /// All subjects typed with the given class
    pub fn instances_of(&self, class: OntologyClass) -> Result<Vec<NamedNode>> {
        let class_node = self.class_node(class)?;
        let mut instances = Vec::new();

        for quad in self.store.quads_for_pattern(
            None,
            Some(rdf::TYPE),
            Some(TermRef::from(class_node.as_ref())),
            Some(GraphNameRef::DefaultGraph),
        ) {
            let quad = quad.map_err(|e| FilmOntoError::Store(e.to_string()))?;
            if let Subject::NamedNode(node) = quad.subject {
                instances.push(node);
            }
        }

        Ok(instances)
    }

    /// Objects of `subject <predicate> ?o`
    pub fn objects(&self, subject: &NamedNode, predicate: &NamedNode) -> Result<Vec<Term>> {
        let mut objects = Vec::new();

        for quad in self.store.quads_for_pattern(
            Some(SubjectRef::from(subject.as_ref())),
            Some(predicate.as_ref()),
            None,
            Some(GraphNameRef::DefaultGraph),
        ) {
            let quad = quad.map_err(|e| FilmOntoError::Store(e.to_string()))?;
            objects.push(quad.object);
        }

        Ok(objects)
    }

    pub fn relation_targets(
        &self,
        subject: &NamedNode,
        property: ObjectProperty,
    ) -> Result<Vec<NamedNode>> {
        let predicate = self.object_property_node(property)?;
        Ok(self
            .objects(subject, &predicate)?
            .into_iter()
            .filter_map(|term| match term {
                Term::NamedNode(node) => Some(node),
                _ => None,
            })
            .collect())
    }

    pub fn literals(&self, subject: &NamedNode, property: DatatypeProperty) -> Result<Vec<Literal>> {
        let predicate = self.datatype_property_node(property)?;
        Ok(self
            .objects(subject, &predicate)?
            .into_iter()
            .filter_map(|term| match term {
                Term::Literal(literal) => Some(literal),
                _ => None,
            })
            .collect())
    }

    /// Serialize the default graph as RDF/XML
    pub fn write_rdf_xml<W: Write>(&self, writer: W) -> Result<W> {
        self.store
            .dump_graph_to_writer(GraphNameRef::DefaultGraph, RdfFormat::RdfXml, writer)
            .map_err(|e| FilmOntoError::Serialization(e.to_string()))
    }

    /// Write the graph to an `.owl` file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = self.write_rdf_xml(BufWriter::new(file))?;
        writer.flush()?;

        info!("Wrote ontology file: {}", path.display());
        Ok(())
    }

    /// Execute a SPARQL SELECT query
    pub fn query(&self, query: &SparqlQuery) -> Result<QueryTable> {
        let results = self
            .store
            .query(query.as_str())
            .map_err(|e| FilmOntoError::Query(e.to_string()))?;

        match results {
            QueryResults::Solutions(solutions) => {
                let columns: Vec<String> = solutions
                    .variables()
                    .iter()
                    .map(|v| v.as_str().to_string())
                    .collect();

                let mut rows = Vec::new();
                for solution in solutions {
                    let solution = solution.map_err(|e| FilmOntoError::Query(e.to_string()))?;
                    let row = columns
                        .iter()
                        .map(|column| solution.get(column.as_str()).map(term_to_cell))
                        .collect();
                    rows.push(row);
                }

                Ok(QueryTable::new(columns, rows))
            }
            QueryResults::Boolean(_) | QueryResults::Graph(_) => Err(FilmOntoError::Query(
                "expected a SELECT query returning solutions".to_string(),
            )),
        }
    }
}

/// Plain string form of a bound term: literal lexical value or IRI text
fn term_to_cell(term: &Term) -> String {
    match term {
        Term::NamedNode(node) => node.as_str().to_string(),
        Term::BlankNode(node) => node.as_str().to_string(),
        Term::Literal(literal) => literal.value().to_string(),
        #[allow(unreachable_patterns)]
        other => other.to_string(),
    }
}
