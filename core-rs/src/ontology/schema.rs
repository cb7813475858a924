//! Film ontology schema - static class and property tables
//!
//! The schema is declared once per graph by [`SchemaBuilder`], which walks
//! the enumerated tables below and asserts the OWL declarations for each row.
//!
//! ```text
//! Human ◄── Director, Writer, Actor        (rdfs:subClassOf)
//! Film ──hasDirector──────────► Director
//! Film ──hasActor─────────────► Actor
//! Film ──isProducedBy─────────► ProductionCompany
//! Film ──has{Story,Screenplay,Character}Writer──► Writer
//! Film ──hasReleaseDate───────► Date
//! ```

use oxigraph::model::vocab::{rdf, rdfs, xsd};
use oxigraph::model::{BlankNode, NamedNodeRef, Term};
use tracing::debug;

use crate::errors::Result;
use crate::ontology::graph::OntologyGraph;

/// OWL terms the schema needs (oxigraph ships rdf/rdfs/xsd only)
pub mod owl {
    use oxigraph::model::NamedNodeRef;

    pub const ONTOLOGY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Ontology");
    pub const CLASS: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Class");
    pub const OBJECT_PROPERTY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#ObjectProperty");
    pub const DATATYPE_PROPERTY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#DatatypeProperty");
    pub const UNION_OF: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#unionOf");
}

/// Ontology classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OntologyClass {
    Film,
    ProductionCompany,
    Human,
    Director,
    Writer,
    Actor,
    Date,
}

impl OntologyClass {
    pub const ALL: [OntologyClass; 7] = [
        OntologyClass::Film,
        OntologyClass::ProductionCompany,
        OntologyClass::Human,
        OntologyClass::Director,
        OntologyClass::Writer,
        OntologyClass::Actor,
        OntologyClass::Date,
    ];

    pub fn local_name(&self) -> &'static str {
        match self {
            OntologyClass::Film => "Film",
            OntologyClass::ProductionCompany => "ProductionCompany",
            OntologyClass::Human => "Human",
            OntologyClass::Director => "Director",
            OntologyClass::Writer => "Writer",
            OntologyClass::Actor => "Actor",
            OntologyClass::Date => "Date",
        }
    }

    /// Direct superclass, if declared
    pub fn parent(&self) -> Option<OntologyClass> {
        match self {
            OntologyClass::Director | OntologyClass::Writer | OntologyClass::Actor => {
                Some(OntologyClass::Human)
            }
            _ => None,
        }
    }
}

/// Object properties (Film → resource)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectProperty {
    HasDirector,
    HasActor,
    IsProducedBy,
    HasStoryWriter,
    HasScreenplayWriter,
    HasCharacterWriter,
    HasReleaseDate,
}

impl ObjectProperty {
    pub const ALL: [ObjectProperty; 7] = [
        ObjectProperty::HasDirector,
        ObjectProperty::HasActor,
        ObjectProperty::IsProducedBy,
        ObjectProperty::HasStoryWriter,
        ObjectProperty::HasScreenplayWriter,
        ObjectProperty::HasCharacterWriter,
        ObjectProperty::HasReleaseDate,
    ];

    pub fn local_name(&self) -> &'static str {
        match self {
            ObjectProperty::HasDirector => "hasDirector",
            ObjectProperty::HasActor => "hasActor",
            ObjectProperty::IsProducedBy => "isProducedBy",
            ObjectProperty::HasStoryWriter => "hasStoryWriter",
            ObjectProperty::HasScreenplayWriter => "hasScreenplayWriter",
            ObjectProperty::HasCharacterWriter => "hasCharacterWriter",
            ObjectProperty::HasReleaseDate => "hasReleaseDate",
        }
    }

    pub fn domain(&self) -> OntologyClass {
        OntologyClass::Film
    }

    pub fn range(&self) -> OntologyClass {
        match self {
            ObjectProperty::HasDirector => OntologyClass::Director,
            ObjectProperty::HasActor => OntologyClass::Actor,
            ObjectProperty::IsProducedBy => OntologyClass::ProductionCompany,
            ObjectProperty::HasStoryWriter
            | ObjectProperty::HasScreenplayWriter
            | ObjectProperty::HasCharacterWriter => OntologyClass::Writer,
            ObjectProperty::HasReleaseDate => OntologyClass::Date,
        }
    }
}

/// Literal value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Integer,
    Float,
}

impl ValueType {
    pub fn datatype(&self) -> NamedNodeRef<'static> {
        match self {
            ValueType::String => xsd::STRING,
            ValueType::Integer => xsd::INTEGER,
            ValueType::Float => xsd::FLOAT,
        }
    }
}

/// Datatype properties (resource → typed literal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatatypeProperty {
    HasTitle,
    HasRating,
    HasRuntime,
    HasImdbRating,
    HasRottenTomatoScore,
    HasMetascore,
    HasYear,
    HasMonth,
    HasDay,
    Name,
}

impl DatatypeProperty {
    pub const ALL: [DatatypeProperty; 10] = [
        DatatypeProperty::HasTitle,
        DatatypeProperty::HasRating,
        DatatypeProperty::HasRuntime,
        DatatypeProperty::HasImdbRating,
        DatatypeProperty::HasRottenTomatoScore,
        DatatypeProperty::HasMetascore,
        DatatypeProperty::HasYear,
        DatatypeProperty::HasMonth,
        DatatypeProperty::HasDay,
        DatatypeProperty::Name,
    ];

    pub fn local_name(&self) -> &'static str {
        match self {
            DatatypeProperty::HasTitle => "hasTitle",
            DatatypeProperty::HasRating => "hasRating",
            DatatypeProperty::HasRuntime => "hasRuntime",
            DatatypeProperty::HasImdbRating => "hasImdbRating",
            DatatypeProperty::HasRottenTomatoScore => "hasRottenTomatoScore",
            DatatypeProperty::HasMetascore => "hasMetascore",
            DatatypeProperty::HasYear => "hasYear",
            DatatypeProperty::HasMonth => "hasMonth",
            DatatypeProperty::HasDay => "hasDay",
            DatatypeProperty::Name => "name",
        }
    }

    /// Classes the property applies to. More than one entry means the
    /// domain is declared as their `owl:unionOf`.
    pub fn domain(&self) -> &'static [OntologyClass] {
        match self {
            DatatypeProperty::HasYear | DatatypeProperty::HasMonth | DatatypeProperty::HasDay => {
                &[OntologyClass::Date]
            }
            DatatypeProperty::Name => &[
                OntologyClass::Film,
                OntologyClass::ProductionCompany,
                OntologyClass::Human,
            ],
            _ => &[OntologyClass::Film],
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            DatatypeProperty::HasTitle | DatatypeProperty::Name => ValueType::String,
            DatatypeProperty::HasImdbRating => ValueType::Float,
            _ => ValueType::Integer,
        }
    }
}

/// Asserts the schema tables into a graph
pub struct SchemaBuilder;

impl SchemaBuilder {
    /// Declare ontology header, classes and properties.
    ///
    /// Idempotent: a graph that already carries the schema is left untouched.
    pub fn assert_schema(graph: &mut OntologyGraph) -> Result<()> {
        if graph.has_schema() {
            debug!("Schema already asserted, skipping");
            return Ok(());
        }

        let ontology = graph.ontology_node()?;
        graph.insert(ontology, rdf::TYPE, owl::ONTOLOGY.into_owned())?;

        for class in OntologyClass::ALL {
            let node = graph.class_node(class)?;
            graph.insert(node.clone(), rdf::TYPE, owl::CLASS.into_owned())?;
            if let Some(parent) = class.parent() {
                let parent_node = graph.class_node(parent)?;
                graph.insert(node, rdfs::SUB_CLASS_OF, parent_node)?;
            }
        }

        for property in ObjectProperty::ALL {
            let node = graph.object_property_node(property)?;
            let domain = graph.class_node(property.domain())?;
            let range = graph.class_node(property.range())?;
            graph.insert(node.clone(), rdf::TYPE, owl::OBJECT_PROPERTY.into_owned())?;
            graph.insert(node.clone(), rdfs::DOMAIN, domain)?;
            graph.insert(node, rdfs::RANGE, range)?;
        }

        for property in DatatypeProperty::ALL {
            let node = graph.datatype_property_node(property)?;
            graph.insert(node.clone(), rdf::TYPE, owl::DATATYPE_PROPERTY.into_owned())?;

            let domain: Term = match property.domain() {
                [single] => graph.class_node(*single)?.into(),
                classes => Self::assert_union(graph, property, classes)?.into(),
            };
            graph.insert(node.clone(), rdfs::DOMAIN, domain)?;
            graph.insert(node, rdfs::RANGE, property.value_type().datatype().into_owned())?;
        }

        graph.mark_schema_asserted();
        debug!(triples = graph.len()?, "Schema asserted");
        Ok(())
    }

    /// Build an anonymous `owl:Class` that is the `owl:unionOf` the given
    /// classes, encoded as an RDF collection.
    fn assert_union(
        graph: &mut OntologyGraph,
        property: DatatypeProperty,
        classes: &[OntologyClass],
    ) -> Result<BlankNode> {
        let union = BlankNode::new_unchecked(format!("{}DomainUnion", property.local_name()));
        graph.insert(union.clone(), rdf::TYPE, owl::CLASS.into_owned())?;

        let cells: Vec<BlankNode> = (0..classes.len())
            .map(|i| BlankNode::new_unchecked(format!("{}DomainList{}", property.local_name(), i)))
            .collect();

        for (i, class) in classes.iter().enumerate() {
            let member = graph.class_node(*class)?;
            graph.insert(cells[i].clone(), rdf::FIRST, member)?;
            let rest: Term = match cells.get(i + 1) {
                Some(next) => next.clone().into(),
                None => rdf::NIL.into_owned().into(),
            };
            graph.insert(cells[i].clone(), rdf::REST, rest)?;
        }

        graph.insert(union.clone(), owl::UNION_OF, cells[0].clone())?;
        Ok(union)
    }
}
