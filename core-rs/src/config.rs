/**
 * config.rs
 * Pipeline configuration (YAML format)
 *
 * Format:
 * ```yaml
 * ontologyIri: http://www.semanticweb.org/charleswan/ontologies/batman-ontology
 * input: batman_films.csv
 * output: batman.owl
 * ```
 *
 * Every key is optional; missing keys fall back to the defaults above.
 */

use oxigraph::model::NamedNode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::FilmOntoError;
use crate::{DEFAULT_INPUT, DEFAULT_ONTOLOGY_IRI, DEFAULT_OUTPUT};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    /// Ontology IRI; terms live under `<ontologyIri>#`
    pub ontology_iri: String,
    /// CSV film table
    pub input: PathBuf,
    /// RDF/XML ontology document written by `build` and read by `query`
    pub output: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            ontology_iri: DEFAULT_ONTOLOGY_IRI.to_string(),
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl PipelineConfig {
    /// Load a pipeline config from a YAML file
    ///
    /// # Example
    /// ```no_run
    /// # use film_onto::PipelineConfig;
    /// let config = PipelineConfig::load("filmo.yaml")?;
    /// println!("reading {}", config.input.display());
    /// # Ok::<(), film_onto::FilmOntoError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FilmOntoError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(FilmOntoError::FileNotFound(
                path.to_string_lossy().to_string(),
            ));
        }

        let content = fs::read_to_string(path)?;

        let config: PipelineConfig = serde_yaml::from_str(&content).map_err(|e| {
            FilmOntoError::ParseError(format!("Invalid pipeline config YAML: {}", e))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Write the config back as YAML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), FilmOntoError> {
        self.validate()?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Ensures:
    /// - ontologyIri is an absolute IRI without a fragment
    /// - input and output paths are non-empty
    pub fn validate(&self) -> Result<(), FilmOntoError> {
        if self.ontology_iri.contains('#') {
            return Err(FilmOntoError::ValidationError(format!(
                "ontologyIri must not contain a fragment: '{}'",
                self.ontology_iri
            )));
        }

        NamedNode::new(self.ontology_iri.as_str()).map_err(|e| {
            FilmOntoError::ValidationError(format!(
                "ontologyIri '{}' is not an absolute IRI: {}",
                self.ontology_iri, e
            ))
        })?;

        if self.input.as_os_str().is_empty() {
            return Err(FilmOntoError::ValidationError(
                "input cannot be empty".to_string(),
            ));
        }

        if self.output.as_os_str().is_empty() {
            return Err(FilmOntoError::ValidationError(
                "output cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}
