//! Fixed catalog of read queries over the movie graph.
//!
//! Each operation is a single parameterized Cypher statement executed
//! through [`GraphClient::query`] and mapped into a typed row.

use neo4rs::query;
use serde::Serialize;

use crate::client::GraphClient;
use crate::error::CinegraphResult;

/// An actor/director pair and how many movies they share.
#[derive(Debug, Clone, Serialize)]
pub struct Collaboration {
    pub actor: String,
    pub director: String,
    pub collaborations: i64,
}

/// A genre and how many movies carry it.
#[derive(Debug, Clone, Serialize)]
pub struct GenrePopularity {
    pub genre: String,
    pub movie_count: i64,
}

/// An actor and the number of distinct co-stars.
#[derive(Debug, Clone, Serialize)]
pub struct ActorConnections {
    pub actor: String,
    pub connections: i64,
}

/// A movie title with its release year.
#[derive(Debug, Clone, Serialize)]
pub struct MovieYear {
    pub title: String,
    pub year: i64,
}

/// A co-star of the queried actor, with one movie they share.
#[derive(Debug, Clone, Serialize)]
pub struct CoActor {
    pub coactor: String,
    pub movie: String,
}

/// Top actor/director pairs by shared-movie count, descending.
pub async fn most_frequent_collaborators(
    client: &GraphClient,
    limit: i64,
) -> CinegraphResult<Vec<Collaboration>> {
    let q = query(
        "MATCH (a:Person)-[:ACTED_IN]->(m:Movie)<-[:DIRECTED]-(d:Person) \
         RETURN a.name AS actor, d.name AS director, count(m) AS collaborations \
         ORDER BY collaborations DESC \
         LIMIT $limit",
    )
    .param("limit", limit);

    client
        .query(q)
        .await?
        .iter()
        .map(|row| {
            Ok(Collaboration {
                actor: row.get("actor")?,
                director: row.get("director")?,
                collaborations: row.get("collaborations")?,
            })
        })
        .collect()
}

/// Genres with the most movies, descending.
pub async fn most_popular_genres(
    client: &GraphClient,
    limit: i64,
) -> CinegraphResult<Vec<GenrePopularity>> {
    let q = query(
        "MATCH (m:Movie)-[:HAS_GENRE]->(g:Genre) \
         RETURN g.name AS genre, count(m) AS movie_count \
         ORDER BY movie_count DESC \
         LIMIT $limit",
    )
    .param("limit", limit);

    client
        .query(q)
        .await?
        .iter()
        .map(|row| {
            Ok(GenrePopularity {
                genre: row.get("genre")?,
                movie_count: row.get("movie_count")?,
            })
        })
        .collect()
}

/// Actors with the most distinct co-star connections, descending.
pub async fn actors_with_most_connections(
    client: &GraphClient,
    limit: i64,
) -> CinegraphResult<Vec<ActorConnections>> {
    let q = query(
        "MATCH (a:Person)-[:ACTED_IN]->(m:Movie)<-[:ACTED_IN]-(co:Person) \
         WHERE a <> co \
         RETURN a.name AS actor, count(DISTINCT co) AS connections \
         ORDER BY connections DESC \
         LIMIT $limit",
    )
    .param("limit", limit);

    client
        .query(q)
        .await?
        .iter()
        .map(|row| {
            Ok(ActorConnections {
                actor: row.get("actor")?,
                connections: row.get("connections")?,
            })
        })
        .collect()
}

/// All movies directed by the named person, ascending by year.
pub async fn movies_by_director(
    client: &GraphClient,
    director: &str,
) -> CinegraphResult<Vec<MovieYear>> {
    let q = query(
        "MATCH (d:Person)-[:DIRECTED]->(m:Movie) \
         WHERE d.name = $director \
         RETURN m.title AS title, m.year AS year \
         ORDER BY m.year",
    )
    .param("director", director);

    client.query(q).await?.iter().map(movie_year).collect()
}

/// Distinct co-stars of the named actor, ascending by co-actor name.
pub async fn coactors_of(client: &GraphClient, actor: &str) -> CinegraphResult<Vec<CoActor>> {
    let q = query(
        "MATCH (a:Person)-[:ACTED_IN]->(m:Movie)<-[:ACTED_IN]-(co:Person) \
         WHERE a.name = $actor AND a <> co \
         RETURN DISTINCT co.name AS coactor, m.title AS movie \
         ORDER BY coactor",
    )
    .param("actor", actor);

    client
        .query(q)
        .await?
        .iter()
        .map(|row| {
            Ok(CoActor {
                coactor: row.get("coactor")?,
                movie: row.get("movie")?,
            })
        })
        .collect()
}

/// Movies of the named genre released strictly after the given year,
/// ascending by year.
pub async fn movies_by_genre_after(
    client: &GraphClient,
    genre: &str,
    year: i64,
) -> CinegraphResult<Vec<MovieYear>> {
    let q = query(
        "MATCH (m:Movie)-[:HAS_GENRE]->(g:Genre) \
         WHERE g.name = $genre AND m.year > $year \
         RETURN m.title AS title, m.year AS year \
         ORDER BY m.year",
    )
    .param("genre", genre)
    .param("year", year);

    client.query(q).await?.iter().map(movie_year).collect()
}

fn movie_year(row: &neo4rs::Row) -> CinegraphResult<MovieYear> {
    Ok(MovieYear {
        title: row.get("title")?,
        year: row.get("year")?,
    })
}
