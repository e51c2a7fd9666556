use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A terminal or harbour, a row of the `ports` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Port {
    pub code: String,
    /// Slug of the region this port belongs to.
    pub parent_slug: String,
}

/// A named grouping of ports and sub-regions, a row of the `regions` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Region {
    pub slug: String,
    pub parent_slug: Option<String>,
}

/// A single quoted price between two ports on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PriceRecord {
    pub orig_code: String,
    pub dest_code: String,
    pub day: NaiveDate,
    pub price: Decimal,
}

/// The average price for one day of the requested range.
///
/// `average_price` is `None` when the day had fewer than
/// [`MIN_PRICE_SAMPLES`](crate::MIN_PRICE_SAMPLES) matching prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DailyAverage {
    pub day: NaiveDate,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub average_price: Option<Decimal>,
}

impl PriceRecord {
    pub fn new(orig_code: &str, dest_code: &str, day: NaiveDate, price: Decimal) -> Self {
        Self {
            orig_code: orig_code.to_string(),
            dest_code: dest_code.to_string(),
            day,
            price,
        }
    }
}
