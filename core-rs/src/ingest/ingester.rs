/**
 * ingester.rs
 * Record ingester - turns film rows into typed individuals
 *
 * Per row:
 * 1. Film identifier from slug(title + "_" + year)
 * 2. Film type and literal attributes (unparsable values omitted)
 * 3. Release date → Date individual, only when all three parts parse
 * 4. Directors, actors, production companies
 * 5. Writers, linked by role annotation
 */

use oxigraph::model::NamedNode;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

use crate::errors::Result;
use crate::ingest::identity::IdentityCache;
use crate::ingest::parse::{
    extract_int, parse_decimal, parse_release_date, parse_whole, parse_writers, slugify,
    split_list, WriterRole,
};
use crate::ingest::record::FilmRecord;
use crate::ontology::{
    DatatypeProperty, ObjectProperty, OntologyClass, OntologyGraph, SchemaBuilder, TypedValue,
};

/// Counters reported at the end of a build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    pub rows: usize,
    pub films: usize,
    pub merged_films: usize,
    pub release_dates: usize,
    pub persons: usize,
    pub companies: usize,
    pub omitted_fields: usize,
    /// Omissions per property, keyed by local name
    pub omitted_by_field: BTreeMap<String, usize>,
}

pub struct RecordIngester<'g> {
    graph: &'g mut OntologyGraph,
    persons: IdentityCache,
    companies: IdentityCache,
    films: HashSet<String>,
    stats: IngestStats,
}

impl<'g> RecordIngester<'g> {
    /// Prepare a graph for ingestion; the schema is asserted first if the
    /// graph does not carry it yet.
    pub fn new(graph: &'g mut OntologyGraph) -> Result<Self> {
        SchemaBuilder::assert_schema(graph)?;

        let namespace = graph.namespace().clone();
        Ok(Self {
            graph,
            persons: IdentityCache::persons(namespace.clone()),
            companies: IdentityCache::companies(namespace),
            films: HashSet::new(),
            stats: IngestStats::default(),
        })
    }

    pub fn stats(&self) -> IngestStats {
        IngestStats {
            persons: self.persons.len(),
            companies: self.companies.len(),
            ..self.stats.clone()
        }
    }

    /// Ingest one row, returning the film resource
    pub fn ingest(&mut self, record: &FilmRecord) -> Result<NamedNode> {
        self.stats.rows += 1;

        let film_id = slugify(&format!("{}_{}", record.title, record.year));
        let film = self.graph.namespace().iri(&film_id)?;

        if self.films.insert(film_id.clone()) {
            self.stats.films += 1;
        } else {
            warn!(
                film = %film_id,
                title = %record.title,
                year = %record.year,
                "Film with the same title and year already ingested; merging rows"
            );
            self.stats.merged_films += 1;
        }

        self.graph.assert_type(&film, OntologyClass::Film)?;
        self.assert_film_attributes(&film, record)?;
        self.assert_release_date(&film, &film_id, &record.released)?;

        for name in split_list(&record.director) {
            let person = self.persons.resolve(name)?;
            self.assert_named(&person, OntologyClass::Director, name)?;
            self.graph.assert_relation(&film, ObjectProperty::HasDirector, &person)?;
        }

        for name in split_list(&record.actors) {
            let person = self.persons.resolve(name)?;
            self.assert_named(&person, OntologyClass::Actor, name)?;
            self.graph.assert_relation(&film, ObjectProperty::HasActor, &person)?;
        }

        for name in split_list(&record.production) {
            let company = self.companies.resolve(name)?;
            self.assert_named(&company, OntologyClass::ProductionCompany, name)?;
            self.graph.assert_relation(&film, ObjectProperty::IsProducedBy, &company)?;
        }

        self.assert_writers(&film, &record.writer)?;

        Ok(film)
    }

    /// Ingest every record in order
    pub fn ingest_all<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<FilmRecord>>,
    {
        for record in records {
            self.ingest(&record?)?;
        }
        Ok(())
    }

    fn assert_film_attributes(&mut self, film: &NamedNode, record: &FilmRecord) -> Result<()> {
        self.graph.assert_literal(
            film,
            DatatypeProperty::HasTitle,
            TypedValue::String(record.title.clone()),
        )?;

        let integers = [
            (DatatypeProperty::HasRating, extract_int(&record.rated), &record.rated),
            (DatatypeProperty::HasRuntime, extract_int(&record.runtime), &record.runtime),
            (
                DatatypeProperty::HasRottenTomatoScore,
                extract_int(&record.rotten_tomato_score),
                &record.rotten_tomato_score,
            ),
            (DatatypeProperty::HasMetascore, parse_whole(&record.metascore), &record.metascore),
        ];

        for (property, value, raw) in integers {
            match value {
                Some(value) => {
                    self.graph.assert_literal(film, property, TypedValue::Integer(value))?
                }
                None => self.omit(film, property.local_name(), raw),
            }
        }

        match parse_decimal(&record.imdb_rating) {
            Some(value) => self.graph.assert_literal(
                film,
                DatatypeProperty::HasImdbRating,
                TypedValue::Float(value),
            )?,
            None => self.omit(
                film,
                DatatypeProperty::HasImdbRating.local_name(),
                &record.imdb_rating,
            ),
        }

        self.graph.assert_literal(
            film,
            DatatypeProperty::Name,
            TypedValue::String(record.title.clone()),
        )
    }

    fn assert_release_date(&mut self, film: &NamedNode, film_id: &str, raw: &str) -> Result<()> {
        let Some(date) = parse_release_date(raw) else {
            self.omit(film, ObjectProperty::HasReleaseDate.local_name(), raw);
            return Ok(());
        };

        let date_node = self.graph.namespace().iri(&format!("releaseDate_{}", film_id))?;
        self.graph.assert_type(&date_node, OntologyClass::Date)?;
        self.graph.assert_relation(film, ObjectProperty::HasReleaseDate, &date_node)?;
        self.graph.assert_literal(&date_node, DatatypeProperty::HasYear, TypedValue::Integer(date.year))?;
        self.graph.assert_literal(&date_node, DatatypeProperty::HasMonth, TypedValue::Integer(date.month))?;
        self.graph.assert_literal(&date_node, DatatypeProperty::HasDay, TypedValue::Integer(date.day))?;
        self.stats.release_dates += 1;

        Ok(())
    }

    fn assert_writers(&mut self, film: &NamedNode, raw: &str) -> Result<()> {
        for credit in parse_writers(raw) {
            if credit.name.is_empty() {
                continue;
            }

            let person = self.persons.resolve(&credit.name)?;
            self.assert_named(&person, OntologyClass::Writer, &credit.name)?;

            let property = match WriterRole::classify(&credit.role) {
                Some(WriterRole::Story) => ObjectProperty::HasStoryWriter,
                Some(WriterRole::Screenplay) => ObjectProperty::HasScreenplayWriter,
                Some(WriterRole::Character) => ObjectProperty::HasCharacterWriter,
                None => {
                    debug!(
                        writer = %credit.name,
                        role = %credit.role,
                        "Writer role not linked to film"
                    );
                    continue;
                }
            };
            self.graph.assert_relation(film, property, &person)?;
        }
        Ok(())
    }

    /// `rdf:type` plus `name` literal
    fn assert_named(&mut self, node: &NamedNode, class: OntologyClass, name: &str) -> Result<()> {
        self.graph.assert_type(node, class)?;
        self.graph
            .assert_literal(node, DatatypeProperty::Name, TypedValue::String(name.to_string()))
    }

    fn omit(&mut self, film: &NamedNode, property: &'static str, raw: &str) {
        debug!(
            film = %film.as_str(),
            property,
            raw = %raw,
            "Unparsable value omitted"
        );
        self.stats.omitted_fields += 1;
        *self
            .stats
            .omitted_by_field
            .entry(property.to_string())
            .or_default() += 1;
    }
}
