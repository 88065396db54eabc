//! Derive the canonical per-movie fields and apply the data-quality
//! filters.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::normalize::{CastEntry, JoinedMovie};

/// How many top-billed cast members are kept per movie.
const TOP_BILLED: usize = 5;

/// Billing order for cast entries that lack one; sorts them after every
/// entry with an explicit order. The sort is stable, so equally-missing
/// entries keep their source order.
const MISSING_ORDER: i64 = i64::MAX;

/// A fully derived movie, ready for loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub director: String,
    pub actors: Vec<String>,
}

/// Derive year, primary genre, director and top-billed actors for every
/// joined movie.
///
/// Rows missing the title, year, genre or director, and rows whose actor
/// list comes out empty, are dropped here. These exclusions are a silent
/// data-quality filter, not errors.
pub fn extract_records(joined: Vec<JoinedMovie>) -> Vec<MovieRecord> {
    joined.into_iter().filter_map(extract_one).collect()
}

fn extract_one(movie: JoinedMovie) -> Option<MovieRecord> {
    if movie.title.trim().is_empty() {
        debug!("row dropped: empty title");
        return None;
    }

    let year = movie.release_date.as_deref().and_then(parse_year);
    let genre = movie.genres.first().map(|g| g.name.clone());
    let director = movie
        .crew
        .iter()
        .find(|c| c.job.as_deref() == Some("Director"))
        .and_then(|c| c.name.clone());
    let actors = top_billed_actors(movie.cast);

    let (Some(year), Some(genre), Some(director)) = (year, genre, director) else {
        debug!(title = %movie.title, "row dropped: missing year, genre or director");
        return None;
    };
    if actors.is_empty() {
        debug!(title = %movie.title, "row dropped: no billed actors");
        return None;
    }

    Some(MovieRecord {
        title: movie.title,
        year,
        genre,
        director,
        actors,
    })
}

/// Parse the calendar year out of a release date.
///
/// Accepts a full `YYYY-MM-DD` date or a bare year; anything else is
/// treated as absent, which excludes the row downstream.
fn parse_year(date: &str) -> Option<i32> {
    let date = date.trim();
    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(parsed.year());
    }
    if date.len() == 4 {
        return date.parse().ok();
    }
    None
}

/// The names of the top [`TOP_BILLED`] cast records by ascending billing
/// order. The window is taken over records; names are extracted after,
/// so a nameless record inside the window contributes nothing.
fn top_billed_actors(mut cast: Vec<CastEntry>) -> Vec<String> {
    cast.sort_by_key(|c| c.order.unwrap_or(MISSING_ORDER));
    cast.into_iter()
        .take(TOP_BILLED)
        .filter_map(|c| c.name)
        .collect()
}
