//! # accident-forecast
//!
//! Monthly aggregation, lag features, and recursive forecasting for
//! traffic-accident data.
//!
//! The library collapses a raw accident log into monthly series, derives
//! lag-feature tables from them, and produces short-horizon autoregressive
//! forecasts through an opaque, caller-supplied prediction model. A small
//! assessment utility estimates casualties for a single hypothetical
//! accident against a training-time feature schema.
//!
//! Every computation is synchronous and self-contained: series, windows,
//! and forecasts are rebuilt per call from immutable inputs, so concurrent
//! calls need no coordination as long as the supplied model can be called
//! from multiple threads.

pub mod aggregate;
pub mod assess;
pub mod core;
pub mod dates;
pub mod error;
pub mod features;
pub mod forecast;
pub mod model;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::aggregate::{aggregate, Metric};
    pub use crate::assess::{assess, AssessmentInput, FeatureSchema};
    pub use crate::core::{AccidentRecord, MonthlySeries, Severity, TimeSegment};
    pub use crate::dates::month_sequence;
    pub use crate::error::{ForecastError, Result};
    pub use crate::features::{build, ForecastWindow, LagTable};
    pub use crate::forecast::{
        forecast_monthly, forecast_records, ForecastResult, RecursiveForecaster, MAX_HORIZON,
    };
    pub use crate::model::{LinearLagModel, PointModel};
}
