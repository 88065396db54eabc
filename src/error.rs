//! Error types for cinegraph

use thiserror::Error;

/// Errors surfaced by the ETL pipeline and the graph client
#[derive(Error, Debug)]
pub enum CinegraphError {
    /// Missing or invalid connection configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reading one of the source tables
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON in a structured column. The null/absent case is not
    /// an error (it decodes to an empty sequence); this fires only for
    /// payloads that are present but unparseable.
    #[error("Malformed JSON in column '{column}': {source}")]
    Decode {
        column: &'static str,
        source: serde_json::Error,
    },

    /// Connection or query execution error from the external store
    #[error("Database error: {0}")]
    Database(#[from] neo4rs::Error),

    /// A result row did not decode into the expected columns
    #[error("Row decode error: {0}")]
    RowDecode(#[from] neo4rs::DeError),

    /// The store returned a result of unexpected shape
    #[error("Query error: {0}")]
    Query(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CinegraphResult<T> = Result<T, CinegraphError>;
