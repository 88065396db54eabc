//! Join the raw tables and decode the embedded JSON columns.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::reader::{RawCredit, RawMovie};
use crate::error::{CinegraphError, CinegraphResult};

/// Entry of the `genres` column.
#[derive(Debug, Clone, Deserialize)]
pub struct GenreEntry {
    pub name: String,
}

/// Entry of the `cast` column.
#[derive(Debug, Clone, Deserialize)]
pub struct CastEntry {
    pub name: Option<String>,
    /// Billing order; lower is more prominent. Absent for some entries.
    pub order: Option<i64>,
}

/// Entry of the `crew` column.
#[derive(Debug, Clone, Deserialize)]
pub struct CrewEntry {
    pub name: Option<String>,
    pub job: Option<String>,
}

/// A movie joined with its credits row, structured columns decoded.
#[derive(Debug, Clone)]
pub struct JoinedMovie {
    pub title: String,
    pub release_date: Option<String>,
    pub genres: Vec<GenreEntry>,
    pub cast: Vec<CastEntry>,
    pub crew: Vec<CrewEntry>,
}

/// Inner-join the movies and credits tables on the shared movie
/// identifier and decode the three structured columns.
///
/// A movie with no matching credits row produces no output, and vice
/// versa. The movies table's title wins over the credits duplicate.
pub fn normalize(
    movies: Vec<RawMovie>,
    credits: Vec<RawCredit>,
) -> CinegraphResult<Vec<JoinedMovie>> {
    let by_movie_id: HashMap<i64, RawCredit> =
        credits.into_iter().map(|c| (c.movie_id, c)).collect();

    let mut joined = Vec::with_capacity(movies.len());
    for movie in movies {
        let Some(credit) = by_movie_id.get(&movie.id) else {
            debug!(id = movie.id, title = %movie.title, "no credits row, dropped");
            continue;
        };

        joined.push(JoinedMovie {
            genres: decode_column("genres", movie.genres.as_deref())?,
            cast: decode_column("cast", credit.cast.as_deref())?,
            crew: decode_column("crew", credit.crew.as_deref())?,
            title: movie.title,
            release_date: movie.release_date,
        });
    }
    Ok(joined)
}

/// Decode one serialized JSON column into an ordered sequence of records.
///
/// An absent or blank column decodes to an empty sequence; a present but
/// malformed payload is an error carrying the column name.
fn decode_column<T: DeserializeOwned>(
    column: &'static str,
    raw: Option<&str>,
) -> CinegraphResult<Vec<T>> {
    match raw {
        None => Ok(Vec::new()),
        Some(s) if s.trim().is_empty() => Ok(Vec::new()),
        Some(s) => {
            serde_json::from_str(s).map_err(|source| CinegraphError::Decode { column, source })
        }
    }
}
