//! A `RateRepository` over plain vectors.
//!
//! It applies the same resolution and aggregation rules as the SQL queries, so
//! the HTTP layer can be exercised without a running PostgreSQL.

use crate::{DbError, RateRepository};
use async_trait::async_trait;
use core_types::{daily_averages, DailyAverage, DateRange, Port, PriceRecord, Region, MIN_PRICE_SAMPLES};
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    ports: Vec<Port>,
    regions: Vec<Region>,
    prices: Vec<PriceRecord>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, slug: &str, parent_slug: Option<&str>) -> Self {
        self.regions.push(Region {
            slug: slug.to_string(),
            parent_slug: parent_slug.map(str::to_string),
        });
        self
    }

    pub fn with_port(mut self, code: &str, parent_slug: &str) -> Self {
        self.ports.push(Port {
            code: code.to_string(),
            parent_slug: parent_slug.to_string(),
        });
        self
    }

    pub fn with_price(mut self, record: PriceRecord) -> Self {
        self.prices.push(record);
        self
    }

    pub fn with_prices(mut self, records: impl IntoIterator<Item = PriceRecord>) -> Self {
        self.prices.extend(records);
        self
    }
}

#[async_trait]
impl RateRepository for InMemoryRepository {
    async fn resolve_port_codes(&self, identifier: &str) -> Result<Vec<String>, DbError> {
        // The region itself plus its direct children.
        let regions: HashSet<&str> = self
            .regions
            .iter()
            .filter(|r| r.slug == identifier || r.parent_slug.as_deref() == Some(identifier))
            .map(|r| r.slug.as_str())
            .collect();

        let codes: BTreeSet<&str> = self
            .ports
            .iter()
            .filter(|p| p.code == identifier || regions.contains(p.parent_slug.as_str()))
            .map(|p| p.code.as_str())
            .collect();

        Ok(codes.into_iter().map(str::to_string).collect())
    }

    async fn average_prices(
        &self,
        origin_codes: &[String],
        destination_codes: &[String],
        range: DateRange,
    ) -> Result<Vec<DailyAverage>, DbError> {
        let samples = self
            .prices
            .iter()
            .filter(|p| {
                origin_codes.contains(&p.orig_code)
                    && destination_codes.contains(&p.dest_code)
                    && range.contains(p.day)
            })
            .map(|p| (p.day, p.price));

        Ok(daily_averages(samples, MIN_PRICE_SAMPLES)?)
    }
}
