//! Point-in-time casualty assessment for a single hypothetical accident.
//!
//! The feature layout is dictated by a training-time column schema: a list
//! of numeric base columns plus one-hot columns for the categorical inputs.
//! The input is expanded into a vector aligned to that schema and handed to
//! the opaque model in a single call.

use crate::error::{ForecastError, Result};
use crate::model::PointModel;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordered training-time column names for the assessment model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl FeatureSchema {
    /// Create a schema from column names in training order.
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// The column names in model input order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of feature columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Description of a hypothetical accident to assess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub country: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub vehicles_involved: u32,
    pub weather_condition: String,
    pub road_condition: String,
    pub cause: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl AssessmentInput {
    /// Expand the input into a feature vector aligned to `schema`.
    ///
    /// Numeric base columns are derived from the date, time, and location;
    /// one-hot columns are set to 1 only when their suffix matches the
    /// corresponding categorical input. Columns the input has no value for
    /// are filled with 0.
    pub fn feature_vector(&self, schema: &FeatureSchema) -> Vec<f64> {
        schema
            .columns()
            .iter()
            .map(|column| self.feature_value(column))
            .collect()
    }

    fn feature_value(&self, column: &str) -> f64 {
        match column {
            "Year" => f64::from(self.date.year()),
            "Month" => f64::from(self.date.month()),
            "Day" => f64::from(self.date.day()),
            // Monday = 0, matching the training pipeline.
            "DayOfWeek" => f64::from(self.date.weekday().num_days_from_monday()),
            "Hour" => f64::from(self.time.hour()),
            "Latitude" => self.latitude,
            "Longitude" => self.longitude,
            "Vehicles Involved" => f64::from(self.vehicles_involved),
            _ => {
                let one_hot = [
                    ("City_", self.city.as_str()),
                    ("Country_", self.country.as_str()),
                    ("Weather Condition_", self.weather_condition.as_str()),
                    ("Road Condition_", self.road_condition.as_str()),
                    ("Cause_", self.cause.as_str()),
                ];
                for (prefix, value) in one_hot {
                    if let Some(suffix) = column.strip_prefix(prefix) {
                        return if suffix == value { 1.0 } else { 0.0 };
                    }
                }
                0.0
            }
        }
    }
}

/// Assess expected casualties for a single accident.
///
/// Expands `input` against `schema` and invokes the opaque assessment
/// model once. Model failures surface as
/// [`ForecastError::ModelInvocation`].
pub fn assess(
    model: &dyn PointModel,
    schema: &FeatureSchema,
    input: &AssessmentInput,
) -> Result<f64> {
    let features = input.feature_vector(schema);
    debug!(columns = schema.len(), "assessing single accident");

    model
        .predict(&features)
        .map_err(|e| ForecastError::ModelInvocation(e.to_string()))
}
