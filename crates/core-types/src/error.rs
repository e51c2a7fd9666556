use thiserror::Error;

/// Reasons a requested `date_from`/`date_to` pair is rejected.
///
/// The display strings are returned verbatim to API clients.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Invalid date format. Use YYYY-MM-DD format.")]
    InvalidFormat,

    #[error("date_from must be earlier than or equal to date_to")]
    Inverted,
}

/// Raised when a day's prices cannot be summed without overflowing `Decimal`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Price total for {day} exceeds the decimal range")]
pub struct AggregationError {
    pub day: chrono::NaiveDate,
}
