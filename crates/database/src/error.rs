use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid database connection settings: {0}")]
    ConnectionConfigError(String),

    #[error("Failed to connect to the database: {0}")]
    ConnectionError(sqlx::Error),

    #[error("Query failed: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Aggregation failed: {0}")]
    AggregationError(#[from] core_types::AggregationError),
}
