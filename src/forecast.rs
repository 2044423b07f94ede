//! Recursive multi-step forecasting over monthly series.

use crate::aggregate::{aggregate, Metric};
use crate::core::{AccidentRecord, MonthlySeries};
use crate::dates::month_sequence;
use crate::error::{ForecastError, Result};
use crate::features::{self, ForecastWindow, DEFAULT_LAGS};
use crate::model::PointModel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Upper bound on the forecast horizon.
///
/// The horizon is caller-controlled; the cap bounds both compute and the
/// compounding of recursive forecast error.
pub const MAX_HORIZON: i64 = 24;

/// Index-aligned forecast output: one predicted value per future month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Future months, ascending, each the first day of its month.
    pub months: Vec<NaiveDate>,
    /// Predicted values, index-aligned with `months`.
    pub values: Vec<f64>,
}

impl ForecastResult {
    /// Number of forecasted months.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the forecast is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(month, prediction)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.months.iter().copied().zip(self.values.iter().copied())
    }
}

/// Iterative autoregressive forecaster.
///
/// Each step's feature row is built from the most recent window values
/// (reverse-chronological, per the lag schema) and each prediction is fed
/// back into the window as input to the following steps. Forecast errors
/// therefore compound across the horizon; no step ever sees ground truth.
#[derive(Debug, Clone, PartialEq)]
pub struct RecursiveForecaster {
    lags: usize,
}

impl RecursiveForecaster {
    /// Forecaster over the default 3-lag scheme.
    pub fn new() -> Self {
        Self { lags: DEFAULT_LAGS }
    }

    /// Forecaster over a custom lag count.
    pub fn with_lags(lags: usize) -> Result<Self> {
        if lags == 0 {
            return Err(ForecastError::InvalidParameter(
                "lags must be at least 1".to_string(),
            ));
        }
        Ok(Self { lags })
    }

    /// Number of lag features per prediction step.
    pub fn lags(&self) -> usize {
        self.lags
    }

    /// Produce `horizon` future predictions from a seed window.
    ///
    /// The seed window is cloned on entry; the caller's data is never
    /// mutated. A model failure aborts the whole call with
    /// [`ForecastError::ModelInvocation`] and discards any partial
    /// results. A zero horizon returns an empty vector without invoking
    /// the model.
    pub fn forecast(
        &self,
        model: &dyn PointModel,
        window: &ForecastWindow,
        horizon: i64,
    ) -> Result<Vec<f64>> {
        if !(0..=MAX_HORIZON).contains(&horizon) {
            return Err(ForecastError::InvalidHorizon {
                got: horizon,
                max: MAX_HORIZON,
            });
        }
        if window.len() < self.lags {
            return Err(ForecastError::InsufficientHistory {
                needed: self.lags,
                got: window.len(),
            });
        }

        let horizon = horizon as usize;
        let mut working = window.clone();
        let mut predictions = Vec::with_capacity(horizon);

        for step in 0..horizon {
            let features = working.feature_row(self.lags);
            let predicted = model
                .predict(&features)
                .map_err(|e| ForecastError::ModelInvocation(e.to_string()))?;
            trace!(step, predicted, "recursive forecast step");

            predictions.push(predicted);
            working.push(predicted);
        }

        Ok(predictions)
    }
}

impl Default for RecursiveForecaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Forecast a monthly series end to end.
///
/// Builds the seed window from the last [`DEFAULT_LAGS`] values of
/// `series`, runs the recursive forecaster, and pairs the predictions
/// with the calendar months following the last historical month.
pub fn forecast_monthly(
    model: &dyn PointModel,
    series: &MonthlySeries,
    horizon: i64,
) -> Result<ForecastResult> {
    let (_, window) = features::build(series, DEFAULT_LAGS)?;
    let values = RecursiveForecaster::new().forecast(model, &window, horizon)?;

    // build() guarantees a non-empty series.
    let last_month = series
        .last_month()
        .expect("series validated non-empty by lag builder");
    let months = month_sequence(last_month, values.len())?;

    debug!(
        horizon = values.len(),
        %last_month,
        "generated monthly forecast"
    );

    Ok(ForecastResult { months, values })
}

/// Aggregate raw records into a monthly series and forecast it.
pub fn forecast_records(
    model: &dyn PointModel,
    records: &[AccidentRecord],
    metric: &Metric,
    horizon: i64,
) -> Result<ForecastResult> {
    let series = aggregate(records, metric)?;
    forecast_monthly(model, &series, horizon)
}
