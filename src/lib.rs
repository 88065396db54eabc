//! Cinegraph
//!
//! ETL and query toolkit that turns the TMDB movies/credits CSV pair into
//! a property graph inside an external Neo4j store, then exposes a fixed
//! catalog of read queries and two ad-hoc write operations over it.
//!
//! # Architecture
//!
//! The graph engine is external; this crate only prepares and pushes data
//! into it:
//!
//! - [`etl`]: read the two tables, inner-join them, decode the embedded
//!   JSON columns, derive per-movie entities, and MERGE the result into
//!   the store (labels `Movie`, `Person`, `Genre`; relationships
//!   `ACTED_IN`, `DIRECTED`, `HAS_GENRE`).
//! - [`client`]: thin connection wrapper — one session per query, rows
//!   materialized before returning, explicit close.
//! - [`queries`]: the read-query catalog (collaborations, genre
//!   popularity, co-star connectivity, filtered lookups).
//! - [`updates`]: idempotent single-edge upserts outside the bulk load.
//!
//! Every mutation is a MERGE keyed on node identity, so loads can be
//! re-run safely: a second pass over the same data changes nothing.
//!
//! # Example
//!
//! ```no_run
//! use cinegraph::{etl, GraphClient, GraphConfig};
//! use std::path::Path;
//!
//! # async fn run() -> cinegraph::CinegraphResult<()> {
//! let config = GraphConfig::from_env()?;
//! let client = GraphClient::connect(&config).await?;
//!
//! let summary = etl::run_load(
//!     &client,
//!     Path::new("data/tmdb_5000_movies.csv"),
//!     Path::new("data/tmdb_5000_credits.csv"),
//! )
//! .await?;
//! println!("loaded {} movies", summary.movies);
//!
//! let top = cinegraph::queries::most_popular_genres(&client, 5).await?;
//! for entry in top {
//!     println!("{}: {}", entry.genre, entry.movie_count);
//! }
//!
//! client.close();
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod etl;
pub mod queries;
pub mod updates;

pub use client::GraphClient;
pub use config::GraphConfig;
pub use error::{CinegraphError, CinegraphResult};
