//! Tests for period and date range behavior

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use reporting_kernel::{DateRange, ReportPeriod, TemporalError};

#[test]
fn test_period_display() {
    let period = ReportPeriod::new(2024, 3).unwrap();
    assert_eq!(period.to_string(), "2024-03");
}

#[test]
fn test_period_expands_to_inclusive_range() {
    let period = ReportPeriod::new(2024, 4).unwrap();
    let range: DateRange = period.into();
    assert_eq!(range.start(), NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    assert_eq!(range.end(), NaiveDate::from_ymd_opt(2024, 4, 30).unwrap());
    assert_eq!(range.days(), 30);
}

#[test]
fn test_year_boundary_period() {
    let period = ReportPeriod::new(2024, 12).unwrap();
    assert_eq!(
        period.last_day(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    );
    assert!(!period.contains(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
}

#[test]
fn test_reversed_range_is_a_precondition_error() {
    let start = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    assert!(matches!(
        DateRange::new(start, end),
        Err(TemporalError::InvalidRange { .. })
    ));
}

proptest! {
    #[test]
    fn prop_period_bounds_are_consistent(year in 1970i32..2200, month in 1u32..=12) {
        let period = ReportPeriod::new(year, month).unwrap();
        prop_assert!(period.first_day() <= period.last_day());
        prop_assert!(period.contains(period.first_day()));
        prop_assert!(period.contains(period.last_day()));
        prop_assert_eq!(period.first_day().day(), 1);
    }
}
