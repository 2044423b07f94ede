//! Core data structures shared across the library.

mod record;
mod series;

pub use record::{split_location, AccidentRecord, Severity, TimeSegment};
pub use series::MonthlySeries;
