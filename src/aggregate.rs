//! Aggregation of raw accident records into monthly series.

use crate::core::{AccidentRecord, MonthlySeries};
use crate::dates::month_start;
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// The metric a monthly series is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metric {
    /// Number of accidents per month.
    Count,
    /// Sum of a named numeric record field per month (e.g. `"casualties"`).
    Sum(String),
}

/// Collapse an accident log into a monthly series of the chosen metric.
///
/// Records are grouped by calendar month (year and month, ignoring day).
/// Output is ascending by month with no interpolation of missing months.
/// Aggregation is stateless: the same records and metric always produce
/// the same series.
pub fn aggregate(records: &[AccidentRecord], metric: &Metric) -> Result<MonthlySeries> {
    if let Metric::Sum(field) = metric {
        if !AccidentRecord::has_numeric_field(field) {
            return Err(ForecastError::InvalidMetric(field.clone()));
        }
    }

    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        let month = month_start(record.date);
        let contribution = match metric {
            Metric::Count => 1.0,
            // Field existence was validated above.
            Metric::Sum(field) => record.numeric_field(field).unwrap_or(0.0),
        };
        *buckets.entry(month).or_insert(0.0) += contribution;
    }

    debug!(
        records = records.len(),
        months = buckets.len(),
        ?metric,
        "aggregated accident log into monthly series"
    );

    let (months, values): (Vec<NaiveDate>, Vec<f64>) = buckets.into_iter().unzip();
    MonthlySeries::new(months, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(date: NaiveDate, casualties: u32) -> AccidentRecord {
        AccidentRecord {
            date,
            time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            city: "Paris".to_string(),
            country: "France".to_string(),
            latitude: 48.85,
            longitude: 2.35,
            casualties,
            vehicles_involved: 2,
            weather_condition: "Clear".to_string(),
            road_condition: "Dry".to_string(),
            cause: "Distraction".to_string(),
        }
    }

    fn sample_records() -> Vec<AccidentRecord> {
        vec![
            record(ymd(2024, 1, 3), 2),
            record(ymd(2024, 1, 28), 1),
            record(ymd(2024, 2, 14), 4),
            // March absent on purpose.
            record(ymd(2024, 4, 9), 3),
        ]
    }

    #[test]
    fn count_metric_counts_records_per_month() {
        let series = aggregate(&sample_records(), &Metric::Count).unwrap();

        assert_eq!(
            series.months(),
            &[ymd(2024, 1, 1), ymd(2024, 2, 1), ymd(2024, 4, 1)]
        );
        assert_eq!(series.values(), &[2.0, 1.0, 1.0]);
    }

    #[test]
    fn sum_metric_sums_named_field_per_month() {
        let series =
            aggregate(&sample_records(), &Metric::Sum("casualties".to_string())).unwrap();

        assert_eq!(series.values(), &[3.0, 4.0, 3.0]);
    }

    #[test]
    fn missing_months_are_not_interpolated() {
        let series = aggregate(&sample_records(), &Metric::Count).unwrap();
        // Three months present in the data, March skipped entirely.
        assert_eq!(series.len(), 3);
        assert!(!series.months().contains(&ymd(2024, 3, 1)));
    }

    #[test]
    fn unknown_sum_field_is_invalid_metric() {
        let result = aggregate(&sample_records(), &Metric::Sum("speed".to_string()));
        assert_eq!(
            result,
            Err(ForecastError::InvalidMetric("speed".to_string()))
        );
    }

    #[test]
    fn aggregation_is_idempotent() {
        let records = sample_records();
        let metric = Metric::Sum("casualties".to_string());

        let first = aggregate(&records, &metric).unwrap();
        let second = aggregate(&records, &metric).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let series = aggregate(&[], &Metric::Count).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn record_order_does_not_affect_output() {
        let mut records = sample_records();
        records.reverse();
        let shuffled = aggregate(&records, &Metric::Count).unwrap();
        let ordered = aggregate(&sample_records(), &Metric::Count).unwrap();
        assert_eq!(shuffled, ordered);
    }
}
