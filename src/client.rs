//! Connection wrapper for the external graph store.
//!
//! One logical session per call: every query is executed on its own
//! connection from the driver pool and its result is fully materialized
//! before returning, so the session is released on every exit path.

use neo4rs::{query, ConfigBuilder, Graph, Query, Row};
use tracing::debug;

use crate::config::GraphConfig;
use crate::error::{CinegraphError, CinegraphResult};

/// Client for the external property-graph store.
pub struct GraphClient {
    graph: Graph,
}

impl std::fmt::Debug for GraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphClient").finish_non_exhaustive()
    }
}

impl GraphClient {
    /// Connect with the given configuration.
    ///
    /// The driver pool is lazy, so a `RETURN 1` ping is issued here to
    /// force a real Bolt handshake; an unreachable store fails at startup
    /// instead of hanging on the first real query.
    pub async fn connect(config: &GraphConfig) -> CinegraphResult<Self> {
        let bolt_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db(config.database.as_str())
            .build()?;

        let graph = Graph::connect(bolt_config).await?;
        graph.run(query("RETURN 1")).await?;
        debug!(uri = %config.uri, db = %config.database, "connected to graph store");

        Ok(GraphClient { graph })
    }

    /// Execute a query and return all result rows.
    pub async fn query(&self, q: Query) -> CinegraphResult<Vec<Row>> {
        let mut stream = self.graph.execute(q).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a query, discarding any results.
    pub async fn run(&self, q: Query) -> CinegraphResult<()> {
        self.graph.run(q).await?;
        Ok(())
    }

    /// Execute a query that must return exactly one row.
    pub async fn single(&self, q: Query) -> CinegraphResult<Row> {
        let mut rows = self.query(q).await?;
        match rows.len() {
            1 => Ok(rows.remove(0)),
            0 => Err(CinegraphError::Query(
                "expected exactly one row, got none".to_string(),
            )),
            n => Err(CinegraphError::Query(format!(
                "expected exactly one row, got {n}"
            ))),
        }
    }

    /// Release the underlying driver.
    ///
    /// Consumes the client, so no further queries can be issued through
    /// it.
    pub fn close(self) {
        drop(self.graph);
        debug!("graph connection closed");
    }
}
