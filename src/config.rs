//! Connection configuration for the external graph store.
//!
//! Credentials are read from the environment, never from flags or source,
//! and are carried in an explicitly constructed [`GraphConfig`] that gets
//! passed down to the client.
//!
//! Environment variables:
//! - `NEO4J_URI`: Bolt connection URI (e.g. `bolt://localhost:7687`)
//! - `NEO4J_USER`: username
//! - `NEO4J_PASSWORD`: password
//! - `NEO4J_DATABASE`: database name (optional, default `neo4j`)

use std::env;

use crate::error::{CinegraphError, CinegraphResult};

/// Connection settings for the external graph store.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl GraphConfig {
    /// Load the configuration from the environment.
    ///
    /// A missing or blank URI, user or password is a fatal configuration
    /// error; only the database name has a default.
    pub fn from_env() -> CinegraphResult<Self> {
        Ok(GraphConfig {
            uri: require_env("NEO4J_URI")?,
            user: require_env("NEO4J_USER")?,
            password: require_env("NEO4J_PASSWORD")?,
            database: env::var("NEO4J_DATABASE").unwrap_or_else(|_| "neo4j".to_string()),
        })
    }
}

fn require_env(key: &str) -> CinegraphResult<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CinegraphError::Config(format!("{key} is not set"))),
    }
}
