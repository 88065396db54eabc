//! Ad-hoc graph updates issued outside the bulk load.
//!
//! Both operations follow the loader's idempotency rule: endpoints and
//! the edge are MERGEd, so repeating an update never duplicates anything.
//! The store's confirmation row is returned; its absence is an error.

use neo4rs::query;
use serde::Serialize;
use tracing::info;

use crate::client::GraphClient;
use crate::error::CinegraphResult;

/// Confirmation returned after adding an ACTED_IN edge.
#[derive(Debug, Clone, Serialize)]
pub struct ActedInConfirmation {
    pub actor: String,
    pub movie: String,
}

/// Confirmation returned after adding a HAS_GENRE edge.
#[derive(Debug, Clone, Serialize)]
pub struct HasGenreConfirmation {
    pub movie: String,
    pub genre: String,
}

/// Create an ACTED_IN relationship between an actor and a movie,
/// creating either endpoint if absent.
pub async fn add_actor_to_movie(
    client: &GraphClient,
    actor: &str,
    movie: &str,
) -> CinegraphResult<ActedInConfirmation> {
    let q = query(
        "MERGE (a:Person {name: $actor}) \
         MERGE (m:Movie {title: $movie}) \
         MERGE (a)-[:ACTED_IN]->(m) \
         RETURN a.name AS actor, m.title AS movie",
    )
    .param("actor", actor)
    .param("movie", movie);

    let row = client.single(q).await?;
    let confirmation = ActedInConfirmation {
        actor: row.get("actor")?,
        movie: row.get("movie")?,
    };
    info!(actor = %confirmation.actor, movie = %confirmation.movie, "ACTED_IN edge merged");
    Ok(confirmation)
}

/// Create a HAS_GENRE relationship between a movie and a genre, creating
/// either endpoint if absent.
pub async fn add_genre_to_movie(
    client: &GraphClient,
    movie: &str,
    genre: &str,
) -> CinegraphResult<HasGenreConfirmation> {
    let q = query(
        "MERGE (m:Movie {title: $movie}) \
         MERGE (g:Genre {name: $genre}) \
         MERGE (m)-[:HAS_GENRE]->(g) \
         RETURN m.title AS movie, g.name AS genre",
    )
    .param("movie", movie)
    .param("genre", genre);

    let row = client.single(q).await?;
    let confirmation = HasGenreConfirmation {
        movie: row.get("movie")?,
        genre: row.get("genre")?,
    };
    info!(movie = %confirmation.movie, genre = %confirmation.genre, "HAS_GENRE edge merged");
    Ok(confirmation)
}
