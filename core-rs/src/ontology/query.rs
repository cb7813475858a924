/**
 * query.rs
 * SPARQL query builders and tabular results
 */

use serde::Serialize;
use std::collections::BTreeMap;

use crate::ontology::graph::Namespace;

/// One result row keyed by variable name; unbound variables are `None`
pub type QueryRecord = BTreeMap<String, Option<String>>;

pub struct SparqlQuery {
    query: String,
}

impl SparqlQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }

    /// Find directors who are also credited as story, screenplay or
    /// character writers on at least one film
    pub fn writer_directors(namespace: &Namespace) -> Self {
        Self::new(format!(
            r#"
            PREFIX ns: <{}>
            PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>

            SELECT DISTINCT ?directorName
            WHERE {{
                ?dir rdf:type ns:Director .
                ?dir ns:name ?directorName .
                {{ ?f ns:hasStoryWriter ?dir }}
                UNION
                {{ ?f ns:hasScreenplayWriter ?dir }}
                UNION
                {{ ?f ns:hasCharacterWriter ?dir }}
            }}
            "#,
            namespace.base()
        ))
    }
}

/// Solutions of a SELECT query, columns in projection order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl QueryTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bound values of one column, skipping unbound rows
    pub fn column_values(&self, column: &str) -> Vec<&str> {
        match self.columns.iter().position(|c| c == column) {
            Some(index) => self
                .rows
                .iter()
                .filter_map(|row| row.get(index).and_then(|cell| cell.as_deref()))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Rows as `{column: value}` maps
    pub fn records(&self) -> Vec<QueryRecord> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }
}
