/**
 * record.rs
 * CSV film rows with named columns
 */

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::{FilmOntoError, Result};

/// One row of the film table. Every column is required; cells may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilmRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Rated")]
    pub rated: String,
    #[serde(rename = "Runtime")]
    pub runtime: String,
    #[serde(rename = "Imdb Rating")]
    pub imdb_rating: String,
    #[serde(rename = "RottenTomatoScore")]
    pub rotten_tomato_score: String,
    #[serde(rename = "Metascore")]
    pub metascore: String,
    #[serde(rename = "Released")]
    pub released: String,
    #[serde(rename = "Director")]
    pub director: String,
    #[serde(rename = "Actors")]
    pub actors: String,
    #[serde(rename = "Production")]
    pub production: String,
    #[serde(rename = "Writer")]
    pub writer: String,
}

/// Reads [`FilmRecord`]s from a headed CSV source
pub struct FilmSource<R: Read> {
    reader: csv::Reader<R>,
}

impl FilmSource<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FilmOntoError::FileNotFound(path.display().to_string()));
        }
        Ok(Self {
            reader: csv::ReaderBuilder::new().has_headers(true).from_path(path)?,
        })
    }
}

impl<R: Read> FilmSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: csv::ReaderBuilder::new().has_headers(true).from_reader(reader),
        }
    }

    /// Records in source order. A row that cannot be decoded (missing
    /// column, bad quoting, invalid UTF-8) yields a `MalformedRow` error.
    pub fn records(&mut self) -> impl Iterator<Item = Result<FilmRecord>> + '_ {
        self.reader
            .deserialize::<FilmRecord>()
            .enumerate()
            .map(|(index, row)| {
                row.map_err(|e| FilmOntoError::MalformedRow {
                    row: e
                        .position()
                        .map(|p| p.record())
                        .unwrap_or(index as u64 + 1),
                    message: e.to_string(),
                })
            })
    }
}
