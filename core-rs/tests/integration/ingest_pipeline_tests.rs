//! Integration tests for the build pipeline
//!
//! Covers:
//! - CSV → graph ingestion across several rows
//! - Shared person resources across films and roles
//! - Identical triple sets for identical input
//! - RDF/XML output on disk and reloading it

use film_onto::{
    build_graph, run_build, DatatypeProperty, FilmOntoError, FilmSource, ObjectProperty,
    OntologyClass, OntologyGraph, PipelineConfig,
};
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

const IRI: &str = "http://www.semanticweb.org/charleswan/ontologies/batman-ontology";

const FILMS: &str = "\
Title,Year,Rated,Runtime,Imdb Rating,RottenTomatoScore,Metascore,Released,Director,Actors,Production,Writer
Batman,1989,PG-13,126 min,7.5,72%,69,6/23/1989,Tim Burton,\"Michael Keaton, Jack Nicholson, Kim Basinger\",Warner Bros. Pictures,\"Bob Kane (Batman characters), Sam Hamm (story), Sam Hamm (screenplay), Warren Skaaren (screenplay)\"
Batman Returns,1992,PG-13,126 min,7.0,81%,68,6/19/1992,Tim Burton,\"Michael Keaton, Danny DeVito, Michelle Pfeiffer\",Warner Bros. Pictures,\"Bob Kane (Batman characters), Daniel Waters (story), Sam Hamm (story), Daniel Waters (screenplay)\"
Batman Forever,1995,PG-13,121 min,5.4,39%,51,June 1995,Joel Schumacher,\"Val Kilmer, Tommy Lee Jones, Jim Carrey\",Warner Bros. Pictures,\"Bob Kane (characters), Lee Batchler (story), Janet Scott Batchler (story), Lee Batchler (screenplay), Akiva Goldsman\"
";

fn build() -> OntologyGraph {
    let mut source = FilmSource::from_reader(FILMS.as_bytes());
    build_graph(&mut source, IRI).unwrap().0
}

fn triple_set(graph: &OntologyGraph) -> BTreeSet<String> {
    graph
        .triples()
        .unwrap()
        .into_iter()
        .map(|quad| quad.to_string())
        .collect()
}

fn node(graph: &OntologyGraph, id: &str) -> oxigraph::model::NamedNode {
    graph.namespace().iri(id).unwrap()
}

#[test]
fn test_one_director_resource_shared_by_films() {
    let graph = build();

    let directors = graph.instances_of(OntologyClass::Director).unwrap();
    let burton: Vec<_> = directors
        .iter()
        .filter(|d| d.as_str().ends_with("#person_tim_burton"))
        .collect();
    assert_eq!(burton.len(), 1);

    let names = graph.literals(burton[0], DatatypeProperty::Name).unwrap();
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].value(), "Tim Burton");

    for id in ["batman_1989", "batman_returns_1992"] {
        let targets = graph
            .relation_targets(&node(&graph, id), ObjectProperty::HasDirector)
            .unwrap();
        assert_eq!(targets, vec![burton[0].clone()]);
    }
}

#[test]
fn test_film_count_and_identifiers() {
    let graph = build();

    let mut films: Vec<String> = graph
        .instances_of(OntologyClass::Film)
        .unwrap()
        .into_iter()
        .map(|f| f.as_str().rsplit('#').next().unwrap().to_string())
        .collect();
    films.sort();

    assert_eq!(
        films,
        vec!["batman_1989", "batman_forever_1995", "batman_returns_1992"]
    );
}

#[test]
fn test_unparsable_release_date_is_skipped() {
    let graph = build();

    let forever = node(&graph, "batman_forever_1995");
    assert!(graph
        .relation_targets(&forever, ObjectProperty::HasReleaseDate)
        .unwrap()
        .is_empty());
    assert_eq!(graph.instances_of(OntologyClass::Date).unwrap().len(), 2);
}

#[test]
fn test_company_shared_across_films() {
    let graph = build();

    let companies = graph.instances_of(OntologyClass::ProductionCompany).unwrap();
    assert_eq!(companies.len(), 1);
    assert!(companies[0]
        .as_str()
        .ends_with("#company_warner_bros_pictures"));
}

#[test]
fn test_writer_without_role_is_unlinked() {
    let graph = build();

    let goldsman = node(&graph, "person_akiva_goldsman");
    let writers = graph.instances_of(OntologyClass::Writer).unwrap();
    assert!(writers.contains(&goldsman));

    let forever = node(&graph, "batman_forever_1995");
    for property in [
        ObjectProperty::HasStoryWriter,
        ObjectProperty::HasScreenplayWriter,
        ObjectProperty::HasCharacterWriter,
    ] {
        assert!(!graph
            .relation_targets(&forever, property)
            .unwrap()
            .contains(&goldsman));
    }
}

#[test]
fn test_identical_input_gives_identical_graph() {
    let first = triple_set(&build());
    let second = triple_set(&build());

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_row_order_gives_identical_graph() {
    let mut lines: Vec<&str> = FILMS.lines().collect();
    lines[1..].reverse();
    let reordered = format!("{}\n", lines.join("\n"));

    let mut source = FilmSource::from_reader(reordered.as_bytes());
    let (graph, _) = build_graph(&mut source, IRI).unwrap();

    assert_eq!(triple_set(&graph), triple_set(&build()));
}

#[test]
fn test_run_build_writes_owl_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("films.csv");
    let output = temp_dir.path().join("films.owl");
    fs::write(&input, FILMS).unwrap();

    let config = PipelineConfig {
        ontology_iri: IRI.to_string(),
        input,
        output: output.clone(),
    };
    let summary = run_build(&config).unwrap();

    assert_eq!(summary.output, output);
    assert_eq!(summary.stats.rows, 3);
    assert_eq!(summary.stats.films, 3);
    assert_eq!(summary.stats.release_dates, 2);

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains("rdf:RDF"));
    assert!(xml.contains("person_tim_burton"));

    let reloaded = OntologyGraph::load(&output, IRI).unwrap();
    assert!(reloaded.has_schema());
    assert_eq!(reloaded.len().unwrap(), summary.triples);
}

#[test]
fn test_run_build_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let config = PipelineConfig {
        ontology_iri: IRI.to_string(),
        input: temp_dir.path().join("missing.csv"),
        output: temp_dir.path().join("out.owl"),
    };

    let result = run_build(&config);
    assert!(matches!(result, Err(FilmOntoError::FileNotFound(_))));
    assert!(!temp_dir.path().join("out.owl").exists());
}
