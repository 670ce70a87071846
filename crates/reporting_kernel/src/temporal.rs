//! Calendar periods and date ranges for report retrieval
//!
//! Reports cover exactly one calendar month, and backends are queried with
//! inclusive day ranges. Everything here is UTC; exchange timestamps are
//! normalized to millisecond precision before they enter the model.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    /// The end of a range lies before its start
    #[error("invalid date range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A month outside 1..=12 was supplied
    #[error("invalid month {0}, expected a value in 1..=12")]
    InvalidMonth(u32),

    /// A year outside the supported calendar range was supplied
    #[error("year {0} is outside the supported calendar range")]
    InvalidYear(i32),
}

/// One calendar month, the reporting period of both report types
///
/// Periods are compared and serialized as (year, month) pairs and render
/// as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReportPeriod {
    year: i32,
    month: u32,
}

impl ReportPeriod {
    /// Creates a period for the given year and month
    pub fn new(year: i32, month: u32) -> Result<Self, TemporalError> {
        if !(1..=12).contains(&month) {
            return Err(TemporalError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(TemporalError::InvalidYear(year));
        }
        Ok(Self { year, month })
    }

    /// Returns the period of the month containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first day of the period
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("period was validated on construction")
    }

    /// Returns the last day of the period
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .expect("period was validated on construction")
    }

    /// Returns true if the given date falls inside this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Expands the period to the inclusive day range it covers
    pub fn date_range(&self) -> DateRange {
        DateRange {
            start: self.first_day(),
            end: self.last_day(),
        }
    }
}

impl std::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// An inclusive day range used to query persisted reporting items
///
/// The only way to obtain a range is through [`DateRange::new`] or
/// [`ReportPeriod::date_range`], so `end >= start` always holds and backends
/// never see a malformed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range covering `start..=end`
    ///
    /// Fails with [`TemporalError::InvalidRange`] when `end < start`. This is
    /// checked eagerly, before any backend I/O happens.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if end < start {
            return Err(TemporalError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the given date falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, counting both endpoints
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl From<ReportPeriod> for DateRange {
    fn from(period: ReportPeriod) -> Self {
        period.date_range()
    }
}

/// Normalizes an exchange timestamp to UTC millisecond precision
///
/// Sub-millisecond digits are discarded. Persisted and in-memory items always
/// carry normalized instants, so equality across storage round-trips holds.
pub fn truncate_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(instant.timestamp_millis())
        .single()
        .unwrap_or(instant)
}
