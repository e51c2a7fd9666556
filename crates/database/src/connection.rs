use crate::error::DbError;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Settings the connection pool is built from.
#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

/// Establishes a connection pool to the PostgreSQL database.
///
/// The pool is created once at startup and shared across all requests. The
/// initial connection is made eagerly so a misconfigured database fails the
/// process at boot rather than on the first request.
pub async fn connect(options: &DatabaseOptions) -> Result<PgPool, DbError> {
    if options.url.trim().is_empty() {
        return Err(DbError::ConnectionConfigError(
            "database URL must not be empty".to_string(),
        ));
    }

    let pool = PgPoolOptions::new()
        .max_connections(options.max_connections)
        .acquire_timeout(options.acquire_timeout)
        .connect(&options.url)
        .await
        .map_err(DbError::ConnectionError)?;

    tracing::debug!(max_connections = options.max_connections, "Database connection pool established.");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_url_is_rejected_before_connecting() {
        let options = DatabaseOptions {
            url: "  ".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(1),
        };
        assert!(matches!(
            connect(&options).await,
            Err(DbError::ConnectionConfigError(_))
        ));
    }
}
