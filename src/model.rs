//! The opaque point-prediction model boundary.
//!
//! The library never trains, validates, or versions a model; it is supplied
//! fully formed by the caller and treated as a black box mapping a lag
//! feature row to a single prediction.

use std::error::Error;

/// Opaque error type returned by model implementations.
pub type ModelError = Box<dyn Error + Send + Sync>;

/// A trained point-prediction model.
///
/// Implementations receive a feature row ordered per the lag schema
/// (see [`LAG_FEATURE_ORDER`](crate::features::LAG_FEATURE_ORDER)) and
/// return a single numeric prediction. The library only ever calls a model
/// through a shared reference; callers sharing one model across threads
/// must supply an implementation that is safe to call concurrently.
pub trait PointModel {
    /// Predict the next value from a single feature row.
    fn predict(&self, features: &[f64]) -> std::result::Result<f64, ModelError>;
}

/// Any infallible closure over a feature row is a model. Handy for stubs.
impl<F> PointModel for F
where
    F: Fn(&[f64]) -> f64,
{
    fn predict(&self, features: &[f64]) -> std::result::Result<f64, ModelError> {
        Ok(self(features))
    }
}

/// A linear model over lag features: `intercept + weights . features`.
///
/// Stands in for an offline-trained regressor in tests and examples.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearLagModel {
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearLagModel {
    /// Create a model with one weight per lag feature.
    pub fn new(weights: Vec<f64>, intercept: f64) -> Self {
        Self { weights, intercept }
    }

    /// Number of lag features the model expects.
    pub fn arity(&self) -> usize {
        self.weights.len()
    }
}

impl PointModel for LinearLagModel {
    fn predict(&self, features: &[f64]) -> std::result::Result<f64, ModelError> {
        if features.len() != self.weights.len() {
            return Err(format!(
                "feature row has {} values, model expects {}",
                features.len(),
                self.weights.len()
            )
            .into());
        }

        let dot: f64 = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum();
        Ok(self.intercept + dot)
    }
}
