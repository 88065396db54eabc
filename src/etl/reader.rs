//! CSV readers for the movies and credits source tables.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::CinegraphResult;

/// One row of the movies table.
///
/// Only the columns the pipeline uses are kept; any other column in the
/// source file is ignored. Empty cells deserialize to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMovie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    /// Serialized JSON sequence of genre records.
    #[serde(default)]
    pub genres: Option<String>,
}

/// One row of the credits table.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCredit {
    pub movie_id: i64,
    /// Duplicate of the movie title; the movies table is authoritative,
    /// so this column is carried only to be discarded by the join.
    #[serde(default)]
    pub title: Option<String>,
    /// Serialized JSON sequence of cast records.
    #[serde(default)]
    pub cast: Option<String>,
    /// Serialized JSON sequence of crew records.
    #[serde(default)]
    pub crew: Option<String>,
}

/// Read the movies table.
pub fn read_movies(path: &Path) -> CinegraphResult<Vec<RawMovie>> {
    read_table(path)
}

/// Read the credits table.
pub fn read_credits(path: &Path) -> CinegraphResult<Vec<RawCredit>> {
    read_table(path)
}

fn read_table<T: DeserializeOwned>(path: &Path) -> CinegraphResult<Vec<T>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
