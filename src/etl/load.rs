//! Graph upsert emitter: merge the derived records into the store.
//!
//! Every statement is an idempotent MERGE keyed on the node identity
//! (`Movie.title`, `Person.name`, `Genre.name`), so re-running a load,
//! including one that failed partway, never duplicates nodes or edges.

use neo4rs::query;
use tracing::{debug, info};

use super::extract::MovieRecord;
use crate::client::GraphClient;
use crate::error::CinegraphResult;

/// Rows between progress log lines during a bulk load.
const PROGRESS_EVERY: usize = 100;

/// `SET` rather than `ON CREATE SET` so repeated loads refresh the year.
const MERGE_MOVIE: &str = "MERGE (m:Movie {title: $title}) SET m.year = $year";

const MERGE_GENRE: &str = "MERGE (g:Genre {name: $genre}) \
     WITH g MATCH (m:Movie {title: $title}) \
     MERGE (m)-[:HAS_GENRE]->(g)";

const MERGE_DIRECTOR: &str = "MERGE (p:Person {name: $director}) \
     WITH p MATCH (m:Movie {title: $title}) \
     MERGE (p)-[:DIRECTED]->(m)";

const MERGE_ACTOR: &str = "MERGE (a:Person {name: $actor}) \
     WITH a MATCH (m:Movie {title: $title}) \
     MERGE (a)-[:ACTED_IN]->(m)";

/// Counts reported after a bulk load pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Movie nodes merged.
    pub movies: usize,
    /// Relationships merged (genre + director + actor edges).
    pub relationships: usize,
}

/// Merge every record into the store, one statement per node/edge.
///
/// The movie node is merged before any of its edges; a relationship
/// MERGE needs both endpoints resolvable. A remote failure aborts the
/// remaining rows; rows already loaded stay consistent and a rerun
/// completes the remainder.
pub async fn load_graph(
    client: &GraphClient,
    records: &[MovieRecord],
) -> CinegraphResult<LoadSummary> {
    let mut summary = LoadSummary::default();

    for (i, record) in records.iter().enumerate() {
        load_one(client, record, &mut summary).await?;
        if (i + 1) % PROGRESS_EVERY == 0 {
            info!(loaded = i + 1, total = records.len(), "bulk load progress");
        }
    }

    info!(
        movies = summary.movies,
        relationships = summary.relationships,
        "bulk load complete"
    );
    Ok(summary)
}

async fn load_one(
    client: &GraphClient,
    record: &MovieRecord,
    summary: &mut LoadSummary,
) -> CinegraphResult<()> {
    debug!(title = %record.title, year = record.year, "merging movie");

    client
        .run(
            query(MERGE_MOVIE)
                .param("title", record.title.as_str())
                .param("year", i64::from(record.year)),
        )
        .await?;
    summary.movies += 1;

    client
        .run(
            query(MERGE_GENRE)
                .param("genre", record.genre.as_str())
                .param("title", record.title.as_str()),
        )
        .await?;
    summary.relationships += 1;

    client
        .run(
            query(MERGE_DIRECTOR)
                .param("director", record.director.as_str())
                .param("title", record.title.as_str()),
        )
        .await?;
    summary.relationships += 1;

    for actor in &record.actors {
        client
            .run(
                query(MERGE_ACTOR)
                    .param("actor", actor.as_str())
                    .param("title", record.title.as_str()),
            )
            .await?;
        summary.relationships += 1;
    }

    Ok(())
}
