//! Integration tests for the writer-directors query and its report
//!
//! Graphs are built from small CSV tables, written to disk, reloaded and
//! queried the same way the `filmo query` command does.

use film_onto::{
    build_graph, query_writer_directors, render, render_table, run_build, run_query,
    FilmSource, OntologyGraph, PipelineConfig, ReportFormat,
};
use std::fs;
use tempfile::TempDir;

const IRI: &str = "http://www.semanticweb.org/charleswan/ontologies/batman-ontology";

const HEADER: &str = "Title,Year,Rated,Runtime,Imdb Rating,RottenTomatoScore,Metascore,Released,Director,Actors,Production,Writer\n";

fn graph_from(rows: &str) -> OntologyGraph {
    let csv = format!("{}{}", HEADER, rows);
    let mut source = FilmSource::from_reader(csv.as_bytes());
    build_graph(&mut source, IRI).unwrap().0
}

fn director_names(graph: &OntologyGraph) -> Vec<String> {
    let table = query_writer_directors(graph).unwrap();
    let mut names: Vec<String> = table
        .column_values("directorName")
        .into_iter()
        .map(str::to_string)
        .collect();
    names.sort();
    names
}

#[test]
fn test_director_with_many_writer_credits_listed_once() {
    let graph = graph_from(
        "\
The Dark Knight,2008,PG-13,152 min,9.0,94%,84,7/18/2008,Christopher Nolan,Christian Bale,Warner Bros.,\"Jonathan Nolan (screenplay), Christopher Nolan (screenplay), Christopher Nolan (story), David S. Goyer (story)\"
Batman Begins,2005,PG-13,140 min,8.2,84%,70,6/15/2005,Christopher Nolan,Christian Bale,Warner Bros.,\"Bob Kane (characters), David S. Goyer (story), Christopher Nolan (screenplay)\"
",
    );

    assert_eq!(director_names(&graph), vec!["Christopher Nolan"]);
}

#[test]
fn test_director_who_only_acts_is_not_listed() {
    let graph = graph_from(
        "\
Batman,1989,PG-13,126 min,7.5,72%,69,6/23/1989,Tim Burton,\"Michael Keaton, Tim Burton\",Warner Bros.,\"Sam Hamm (story)\"
",
    );

    assert!(director_names(&graph).is_empty());
}

#[test]
fn test_unannotated_writer_credit_does_not_qualify() {
    let graph = graph_from(
        "\
Batman,1989,PG-13,126 min,7.5,72%,69,6/23/1989,Tim Burton,Michael Keaton,Warner Bros.,\"Tim Burton, Sam Hamm (story)\"
",
    );

    assert!(director_names(&graph).is_empty());
}

#[test]
fn test_credit_on_another_film_qualifies() {
    let graph = graph_from(
        "\
Batman,1989,PG-13,126 min,7.5,72%,69,6/23/1989,Tim Burton,Michael Keaton,Warner Bros.,\"Sam Hamm (story)\"
Beetlejuice,1988,PG,92 min,7.5,85%,71,3/30/1988,Beetle Director,Michael Keaton,Geffen,\"Tim Burton (character)\"
",
    );

    assert_eq!(director_names(&graph), vec!["Tim Burton"]);
}

#[test]
fn test_several_writer_directors() {
    let graph = graph_from(
        "\
Batman,1989,PG-13,126 min,7.5,72%,69,6/23/1989,Tim Burton,Michael Keaton,Warner Bros.,\"Tim Burton (story)\"
Batman Begins,2005,PG-13,140 min,8.2,84%,70,6/15/2005,Christopher Nolan,Christian Bale,Warner Bros.,\"Christopher Nolan (screenplay)\"
Batman Forever,1995,PG-13,121 min,5.4,39%,51,6/16/1995,Joel Schumacher,Val Kilmer,Warner Bros.,\"Akiva Goldsman (screenplay)\"
",
    );

    assert_eq!(
        director_names(&graph),
        vec!["Christopher Nolan", "Tim Burton"]
    );
}

#[test]
fn test_query_after_reload_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("films.csv");
    let output = temp_dir.path().join("films.owl");
    fs::write(
        &input,
        format!(
            "{}Batman Begins,2005,PG-13,140 min,8.2,84%,70,6/15/2005,Christopher Nolan,Christian Bale,Warner Bros.,\"Christopher Nolan (screenplay)\"\n",
            HEADER
        ),
    )
    .unwrap();

    let config = PipelineConfig {
        ontology_iri: IRI.to_string(),
        input,
        output: output.clone(),
    };
    run_build(&config).unwrap();

    let table = run_query(&output, IRI).unwrap();
    assert_eq!(table.columns(), &["directorName".to_string()]);
    assert_eq!(table.column_values("directorName"), vec!["Christopher Nolan"]);
}

#[test]
fn test_report_table_for_query_result() {
    let graph = graph_from(
        "\
Batman,1989,PG-13,126 min,7.5,72%,69,6/23/1989,Tim Burton,Michael Keaton,Warner Bros.,\"Tim Burton (story)\"
",
    );

    let table = query_writer_directors(&graph).unwrap();
    let rendered = render_table(&table);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines,
        vec![
            "----------------",
            "| directorName |",
            "================",
            "| Tim Burton   |",
            "----------------",
        ]
    );
}

#[test]
fn test_report_json_for_query_result() {
    let graph = graph_from(
        "\
Batman,1989,PG-13,126 min,7.5,72%,69,6/23/1989,Tim Burton,Michael Keaton,Warner Bros.,\"Tim Burton (screenplay)\"
",
    );

    let table = query_writer_directors(&graph).unwrap();
    let rendered = render(&table, ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value, serde_json::json!([{ "directorName": "Tim Burton" }]));
}

#[test]
fn test_empty_result_renders_header_only() {
    let graph = graph_from("");

    let table = query_writer_directors(&graph).unwrap();
    assert!(table.is_empty());
    assert_eq!(
        render_table(&table),
        "----------------\n| directorName |\n================\n----------------\n"
    );
}
