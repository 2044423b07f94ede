//! Monthly time series derived from the accident log.

use crate::dates::month_start;
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// An ordered monthly series of a single metric.
///
/// Months are first-of-month dates in strictly increasing order, one entry
/// per calendar month present in the source data. Months absent from the
/// source are simply absent here; the series is never gap-filled.
/// Serialize-only: construction always goes through [`MonthlySeries::new`]
/// so the ordering invariant cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySeries {
    months: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl MonthlySeries {
    /// Create a series from parallel month and value vectors.
    ///
    /// Months are normalized to the first of their month and must be
    /// strictly increasing afterwards.
    pub fn new(months: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if months.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: months.len(),
                got: values.len(),
            });
        }

        let months: Vec<NaiveDate> = months.into_iter().map(month_start).collect();
        for pair in months.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ForecastError::Timestamp(
                    "months must be strictly increasing".to_string(),
                ));
            }
        }

        Ok(Self { months, values })
    }

    /// Number of monthly observations.
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// The month of each observation, ascending.
    pub fn months(&self) -> &[NaiveDate] {
        &self.months
    }

    /// The observed values, index-aligned with [`months`](Self::months).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The most recent month in the series.
    pub fn last_month(&self) -> Option<NaiveDate> {
        self.months.last().copied()
    }

    /// The most recent observed value.
    pub fn last_value(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Iterate over `(month, value)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.months.iter().copied().zip(self.values.iter().copied())
    }
}
