//! Lag-feature construction for autoregressive forecasting.
//!
//! The feature order is an explicit, versioned contract shared with the
//! offline training step: `lag_1` is the most recent prior value, `lag_2`
//! the one before it, and so on. Models trained against a different order
//! will produce systematically wrong forecasts.

use crate::core::MonthlySeries;
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;

/// Version of the lag-feature ordering contract.
pub const LAG_SCHEMA_VERSION: u32 = 1;

/// Default number of lag features.
pub const DEFAULT_LAGS: usize = 3;

/// Feature column names for the default 3-lag scheme, in model input order.
pub const LAG_FEATURE_ORDER: [&str; DEFAULT_LAGS] = ["lag_1", "lag_2", "lag_3"];

/// Feature column names for an arbitrary lag count, in model input order.
pub fn lag_feature_names(lags: usize) -> Vec<String> {
    (1..=lags).map(|k| format!("lag_{k}")).collect()
}

/// One row of a lag-feature table.
#[derive(Debug, Clone, PartialEq)]
pub struct LagRow {
    /// Month of the target value.
    pub month: NaiveDate,
    /// Target value for this month.
    pub value: f64,
    /// Lag features in model input order: `lags[0]` is `lag_1`.
    pub lags: Vec<f64>,
}

/// A lag-feature table derived from a monthly series.
///
/// Each row pairs a target value with the `lags` values preceding it in
/// the table's own row ordering (not calendar-adjusted). Rows whose lags
/// would be undefined are excluded, so the table holds exactly
/// `series length - lags` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct LagTable {
    lags: usize,
    rows: Vec<LagRow>,
}

impl LagTable {
    /// Number of lag features per row.
    pub fn lags(&self) -> usize {
        self.lags
    }

    /// Feature column names for this table, in model input order.
    pub fn feature_names(&self) -> Vec<String> {
        lag_feature_names(self.lags)
    }

    /// The table rows, ascending by month.
    pub fn rows(&self) -> &[LagRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The seed window for recursive forecasting.
///
/// Holds the last `lags` raw values of the historical series in
/// chronological order (oldest first). The forecaster clones it on entry;
/// a window is never shared across forecast calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastWindow {
    values: Vec<f64>,
}

impl ForecastWindow {
    /// Create a window from chronologically ordered values.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "forecast window must not be empty".to_string(),
            ));
        }
        Ok(Self { values })
    }

    /// The window values in chronological order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values in the window.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the window is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append a predicted value, rolling the window forward.
    pub(crate) fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Single-row feature vector over the last `lags` values,
    /// reverse-chronological per the lag schema.
    pub(crate) fn feature_row(&self, lags: usize) -> Vec<f64> {
        self.values.iter().rev().take(lags).copied().collect()
    }
}

/// Derive a lag-feature table and seed window from a monthly series.
///
/// The window is taken directly from the last `lags` raw values of
/// `series`, independent of the table rows.
pub fn build(series: &MonthlySeries, lags: usize) -> Result<(LagTable, ForecastWindow)> {
    if lags == 0 {
        return Err(ForecastError::InvalidParameter(
            "lags must be at least 1".to_string(),
        ));
    }
    if series.len() < lags + 1 {
        return Err(ForecastError::InsufficientHistory {
            needed: lags + 1,
            got: series.len(),
        });
    }

    let months = series.months();
    let values = series.values();

    let rows = (lags..series.len())
        .map(|i| LagRow {
            month: months[i],
            value: values[i],
            // lags[k-1] = lag_k = value k rows prior.
            lags: (1..=lags).map(|k| values[i - k]).collect(),
        })
        .collect();

    let window = ForecastWindow::new(values[series.len() - lags..].to_vec())?;

    Ok((LagTable { lags, rows }, window))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(values: &[f64]) -> MonthlySeries {
        let months = (0..values.len())
            .map(|i| ymd(2024, 1 + i as u32, 1))
            .collect();
        MonthlySeries::new(months, values.to_vec()).unwrap()
    }

    #[test]
    fn table_has_len_minus_lags_rows() {
        let s = series(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);
        let (table, _) = build(&s, 3).unwrap();
        assert_eq!(table.len(), s.len() - 3);
    }

    #[test]
    fn lag_columns_reference_prior_rows() {
        let s = series(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        let (table, _) = build(&s, 3).unwrap();

        let first = &table.rows()[0];
        assert_eq!(first.month, ymd(2024, 4, 1));
        assert_eq!(first.value, 13.0);
        // lag_1 = most recent prior, then further back.
        assert_eq!(first.lags, vec![12.0, 11.0, 10.0]);

        let second = &table.rows()[1];
        assert_eq!(second.value, 14.0);
        assert_eq!(second.lags, vec![13.0, 12.0, 11.0]);
    }

    #[test]
    fn window_is_last_raw_values_chronological() {
        let s = series(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        let (_, window) = build(&s, 3).unwrap();
        assert_eq!(window.values(), &[12.0, 13.0, 14.0]);
    }

    #[test]
    fn minimal_series_yields_single_row() {
        let s = series(&[1.0, 2.0, 3.0, 4.0]);
        let (table, window) = build(&s, 3).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(window.values(), &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn short_series_is_insufficient_history() {
        let s = series(&[1.0, 2.0]);
        let result = build(&s, 3);
        assert_eq!(
            result,
            Err(ForecastError::InsufficientHistory { needed: 4, got: 2 })
        );
    }

    #[test]
    fn zero_lags_is_invalid() {
        let s = series(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            build(&s, 0),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn feature_row_is_reverse_chronological() {
        let window = ForecastWindow::new(vec![10.0, 11.0, 12.0]).unwrap();
        assert_eq!(window.feature_row(3), vec![12.0, 11.0, 10.0]);
    }

    #[test]
    fn feature_names_follow_schema_order() {
        let s = series(&[1.0, 2.0, 3.0, 4.0]);
        let (table, _) = build(&s, 3).unwrap();
        assert_eq!(table.feature_names(), vec!["lag_1", "lag_2", "lag_3"]);
        assert_eq!(lag_feature_names(2), vec!["lag_1", "lag_2"]);
        assert_eq!(table.feature_names(), LAG_FEATURE_ORDER.to_vec());
    }

    #[test]
    fn empty_window_is_rejected() {
        assert!(matches!(
            ForecastWindow::new(vec![]),
            Err(ForecastError::InvalidParameter(_))
        ));
    }
}
