//! # Rate Calculator Core Types
//!
//! Layer 0 of the workspace. Holds the domain vocabulary shared by every other crate
//! and the pure logic that needs no I/O.
//!
//! ## Public API
//!
//! - `Port`, `Region`, `PriceRecord`: the read-only entities stored in the database.
//! - `DailyAverage`: one row of the `/rates` response.
//! - `validate_date_range` / `DateRange`: parses and orders the requested date window.
//! - `aggregation::daily_averages`: groups prices per day behind the sample floor.

pub mod aggregation;
pub mod error;
pub mod structs;
pub mod validation;

// Re-export the core types to provide a clean public API.
pub use aggregation::{daily_averages, MIN_PRICE_SAMPLES};
pub use error::{AggregationError, DateRangeError};
pub use structs::{DailyAverage, Port, PriceRecord, Region};
pub use validation::{validate_date_range, DateRange, DATE_FORMAT};
