use crate::error::DateRangeError;
use chrono::NaiveDate;

/// The only accepted date layout for request parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive, ordered window of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Returns true if `day` falls inside the range, bounds included.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }
}

/// Parses both ends of a requested date window and checks their ordering.
///
/// A format problem on either side wins over an ordering problem, since the
/// ordering cannot be judged until both dates parse.
pub fn validate_date_range(date_from: &str, date_to: &str) -> Result<DateRange, DateRangeError> {
    let from = parse_date(date_from)?;
    let to = parse_date(date_to)?;

    if from > to {
        return Err(DateRangeError::Inverted);
    }

    Ok(DateRange { from, to })
}

fn parse_date(raw: &str) -> Result<NaiveDate, DateRangeError> {
    // chrono's `%Y` takes signs, short years and leading blanks; pin the shape first.
    if !has_iso_shape(raw) {
        return Err(DateRangeError::InvalidFormat);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| DateRangeError::InvalidFormat)
}

/// True for exactly `dddd-dd-dd` in ASCII digits.
fn has_iso_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
