//! ETL pipeline: flat movie tables → property graph.
//!
//! Stages, in order: read the two CSV tables, inner-join them on the
//! shared movie identifier and decode the embedded JSON columns, derive
//! the per-movie entities (year, genre, director, top-billed actors),
//! then merge everything into the external store. Each stage is exposed
//! on its own so the offline parts can be exercised without a store.

mod extract;
mod load;
mod normalize;
mod reader;

pub use extract::{extract_records, MovieRecord};
pub use load::{load_graph, LoadSummary};
pub use normalize::{normalize, CastEntry, CrewEntry, GenreEntry, JoinedMovie};
pub use reader::{read_credits, read_movies, RawCredit, RawMovie};

use std::path::Path;

use tracing::info;

use crate::client::GraphClient;
use crate::error::CinegraphResult;

/// Run the full pipeline: read, normalize, extract, load.
pub async fn run_load(
    client: &GraphClient,
    movies_csv: &Path,
    credits_csv: &Path,
) -> CinegraphResult<LoadSummary> {
    let movies = read_movies(movies_csv)?;
    let credits = read_credits(credits_csv)?;
    info!(movies = movies.len(), credits = credits.len(), "source tables read");

    let joined = normalize(movies, credits)?;
    let records = extract_records(joined);
    info!(records = records.len(), "records survived extraction");

    load_graph(client, &records).await
}
