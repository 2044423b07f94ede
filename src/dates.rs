//! Calendar-month sequencing for forecast output.

use crate::error::{ForecastError, Result};
use chrono::{Datelike, Months, NaiveDate};

/// Normalize a date to the first day of its month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    // Day 1 always exists for a valid year/month.
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

/// Generate the calendar months associated with a forecast.
///
/// Produces `horizon` consecutive months starting the month immediately
/// after `last_historical_month`, each normalized to the first day of its
/// month. A zero horizon yields an empty sequence.
pub fn month_sequence(last_historical_month: NaiveDate, horizon: usize) -> Result<Vec<NaiveDate>> {
    let mut months = Vec::with_capacity(horizon);
    let mut current = month_start(last_historical_month);

    for _ in 0..horizon {
        current = current
            .checked_add_months(Months::new(1))
            .ok_or_else(|| {
                ForecastError::Timestamp(format!("month arithmetic overflow past {current}"))
            })?;
        months.push(current);
    }

    Ok(months)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_start_normalizes_to_first_day() {
        assert_eq!(month_start(ymd(2024, 3, 15)), ymd(2024, 3, 1));
        assert_eq!(month_start(ymd(2024, 12, 31)), ymd(2024, 12, 1));
        assert_eq!(month_start(ymd(2024, 1, 1)), ymd(2024, 1, 1));
    }

    #[test]
    fn sequence_starts_month_after_anchor() {
        let months = month_sequence(ymd(2024, 10, 1), 4).unwrap();
        assert_eq!(
            months,
            vec![
                ymd(2024, 11, 1),
                ymd(2024, 12, 1),
                ymd(2025, 1, 1),
                ymd(2025, 2, 1)
            ]
        );
    }

    #[test]
    fn sequence_normalizes_mid_month_anchor() {
        let months = month_sequence(ymd(2024, 1, 17), 2).unwrap();
        assert_eq!(months, vec![ymd(2024, 2, 1), ymd(2024, 3, 1)]);
    }

    #[test]
    fn sequence_is_strictly_increasing_and_consecutive() {
        let months = month_sequence(ymd(2023, 6, 1), 24).unwrap();
        assert_eq!(months.len(), 24);
        for pair in months.windows(2) {
            assert!(pair[1] > pair[0]);
            assert_eq!(pair[0].checked_add_months(Months::new(1)).unwrap(), pair[1]);
        }
    }

    #[test]
    fn zero_horizon_yields_empty_sequence() {
        let months = month_sequence(ymd(2024, 5, 1), 0).unwrap();
        assert!(months.is_empty());
    }
}
