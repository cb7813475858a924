//! Error types for the film ontology builder

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilmOntoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed row {row}: {message}")]
    MalformedRow { row: u64, message: String },

    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Failed to load ontology: {0}")]
    Load(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, FilmOntoError>;
