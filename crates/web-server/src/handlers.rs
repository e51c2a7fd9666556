use crate::{error::AppError, AppState};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use core_types::{validate_date_range, DailyAverage, DateRange, DateRangeError};
use database::{DbError, RateRepository};
use serde::Deserialize;
use std::sync::Arc;
use tokio::task::JoinHandle;

#[derive(Debug, Deserialize)]
pub struct RatesQuery {
    pub date_from: String,
    pub date_to: String,
    /// Port code or region slug.
    pub origin: String,
    /// Port code or region slug.
    pub destination: String,
}

/// # GET /health
pub async fn health() -> &'static str {
    "OK"
}

/// # GET /rates
/// Returns the average price per day between two ports or regions.
///
/// Origin and destination are resolved concurrently while the dates are
/// validated. Every problem found is reported together; only a fully valid
/// request reaches the aggregation query.
pub async fn get_rates(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RatesQuery>, QueryRejection>,
) -> Result<Json<Vec<DailyAverage>>, AppError> {
    let Query(params) = query.map_err(|rejection| AppError::InvalidQuery(rejection.body_text()))?;

    let origin_lookup = spawn_resolution(&state.repository, &params.origin);
    let destination_lookup = spawn_resolution(&state.repository, &params.destination);
    let dates = validate_date_range(&params.date_from, &params.date_to);

    let (origin_codes, destination_codes) = tokio::try_join!(origin_lookup, destination_lookup)
        .map_err(|e| AppError::Unexpected(e.into()))?;
    let origin_codes = origin_codes?;
    let destination_codes = destination_codes?;

    let range = check_inputs(&params, &origin_codes, &destination_codes, dates).map_err(|details| {
        tracing::debug!(?details, "Rejected rates request.");
        AppError::InvalidInput(details)
    })?;

    let averages = state
        .repository
        .average_prices(&origin_codes, &destination_codes, range)
        .await?;
    Ok(Json(averages))
}

fn spawn_resolution(
    repository: &Arc<dyn RateRepository>,
    identifier: &str,
) -> JoinHandle<Result<Vec<String>, DbError>> {
    let repository = Arc::clone(repository);
    let identifier = identifier.to_string();
    tokio::spawn(async move { repository.resolve_port_codes(&identifier).await })
}

/// Collects every input problem, in origin, destination, dates order.
fn check_inputs(
    params: &RatesQuery,
    origin_codes: &[String],
    destination_codes: &[String],
    dates: Result<DateRange, DateRangeError>,
) -> Result<DateRange, Vec<String>> {
    let mut details = Vec::new();
    if origin_codes.is_empty() {
        details.push(format!(
            "Origin port code or slug name provided {} is not valid",
            params.origin
        ));
    }
    if destination_codes.is_empty() {
        details.push(format!(
            "Destination port code or slug name provided {} is not valid",
            params.destination
        ));
    }

    match dates {
        Ok(range) if details.is_empty() => Ok(range),
        Ok(_) => Err(details),
        Err(e) => {
            details.push(e.to_string());
            Err(details)
        }
    }
}
