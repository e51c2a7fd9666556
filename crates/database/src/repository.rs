use crate::DbError;
use async_trait::async_trait;
use core_types::{DailyAverage, DateRange, MIN_PRICE_SAMPLES};
use sqlx::postgres::PgPool;

/// Read-only access to ports, regions and prices.
///
/// The web server holds this as `Arc<dyn RateRepository>`, so any backing store
/// (PostgreSQL in production, fixtures in tests) can answer `/rates`.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across request tasks.
#[async_trait]
pub trait RateRepository: Send + Sync {
    /// Resolves a port code or region slug to the port codes it covers.
    ///
    /// A port code resolves to itself. A region slug resolves to the ports
    /// directly inside it and the ports of its immediate sub-regions; deeper
    /// nesting is not followed. Codes come back sorted and deduplicated.
    ///
    /// An unknown identifier yields an empty list, not an error.
    async fn resolve_port_codes(&self, identifier: &str) -> Result<Vec<String>, DbError>;

    /// Averages prices per day for every origin/destination pair in the given
    /// code sets, over an inclusive date range.
    ///
    /// Days appear in ascending order, once each, and only when at least one
    /// price matched. A day with fewer than `MIN_PRICE_SAMPLES` prices carries
    /// no average.
    async fn average_prices(
        &self,
        origin_codes: &[String],
        destination_codes: &[String],
        range: DateRange,
    ) -> Result<Vec<DailyAverage>, DbError>;
}

const RESOLVE_PORT_CODES: &str = r#"
    SELECT DISTINCT code
    FROM ports
    WHERE code = $1
       OR parent_slug IN (
            SELECT slug FROM regions WHERE slug = $1 OR parent_slug = $1
       )
    ORDER BY code
"#;

const AVERAGE_PRICES: &str = r#"
    SELECT
        day,
        CASE
            WHEN COUNT(price) >= $5 THEN AVG(price)::numeric
            ELSE NULL
        END AS average_price
    FROM prices
    WHERE orig_code = ANY($1)
      AND dest_code = ANY($2)
      AND day BETWEEN $3 AND $4
    GROUP BY day
    ORDER BY day
"#;

/// The PostgreSQL-backed `RateRepository`.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Closes the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl RateRepository for DbRepository {
    async fn resolve_port_codes(&self, identifier: &str) -> Result<Vec<String>, DbError> {
        let codes = sqlx::query_scalar::<_, String>(RESOLVE_PORT_CODES)
            .bind(identifier)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(identifier, matched = codes.len(), "Resolved port identifier.");
        Ok(codes)
    }

    async fn average_prices(
        &self,
        origin_codes: &[String],
        destination_codes: &[String],
        range: DateRange,
    ) -> Result<Vec<DailyAverage>, DbError> {
        let rows = sqlx::query_as::<_, DailyAverage>(AVERAGE_PRICES)
            .bind(origin_codes)
            .bind(destination_codes)
            .bind(range.from)
            .bind(range.to)
            .bind(MIN_PRICE_SAMPLES as i64)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
