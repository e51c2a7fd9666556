use crate::error::AggregationError;
use crate::structs::DailyAverage;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Minimum number of prices a day needs before its average is reported.
pub const MIN_PRICE_SAMPLES: usize = 3;

/// Groups `(day, price)` samples by day and averages each group.
///
/// Days are returned in ascending order, once each. A day with fewer than
/// `min_samples` prices is still listed, with no average.
///
/// Fails if a day's running total leaves the `Decimal` range.
pub fn daily_averages<I>(samples: I, min_samples: usize) -> Result<Vec<DailyAverage>, AggregationError>
where
    I: IntoIterator<Item = (NaiveDate, Decimal)>,
{
    let mut by_day: BTreeMap<NaiveDate, (Decimal, usize)> = BTreeMap::new();
    for (day, price) in samples {
        let entry = by_day.entry(day).or_insert((Decimal::ZERO, 0));
        entry.0 = entry.0.checked_add(price).ok_or(AggregationError { day })?;
        entry.1 += 1;
    }

    Ok(by_day
        .into_iter()
        .map(|(day, (sum, count))| DailyAverage {
            day,
            average_price: (count >= min_samples)
                .then(|| sum / Decimal::from(count)),
        })
        .collect())
}
