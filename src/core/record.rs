//! Accident event records and derived classifications.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Accident severity, derived from casualty and vehicle counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Minor,
    Moderate,
    Severe,
}

impl Severity {
    /// Classify an accident by its casualty and vehicle counts.
    pub fn classify(casualties: u32, vehicles_involved: u32) -> Self {
        if casualties >= 6 || vehicles_involved >= 4 {
            Severity::Severe
        } else if (2..=5).contains(&casualties) && vehicles_involved <= 3 {
            Severity::Moderate
        } else {
            Severity::Minor
        }
    }
}

/// Time-of-day segment an accident falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSegment {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeSegment {
    /// Segment for an hour of day (0-23).
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeSegment::Morning,
            12..=16 => TimeSegment::Afternoon,
            17..=20 => TimeSegment::Evening,
            _ => TimeSegment::Night,
        }
    }
}

/// A single traffic-accident event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccidentRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub casualties: u32,
    pub vehicles_involved: u32,
    pub weather_condition: String,
    pub road_condition: String,
    pub cause: String,
}

impl AccidentRecord {
    /// Numeric field names addressable by [`Metric::Sum`](crate::aggregate::Metric).
    pub const NUMERIC_FIELDS: [&'static str; 4] =
        ["casualties", "vehicles_involved", "latitude", "longitude"];

    /// Look up a numeric field by name.
    pub fn numeric_field(&self, name: &str) -> Option<f64> {
        match name {
            "casualties" => Some(f64::from(self.casualties)),
            "vehicles_involved" => Some(f64::from(self.vehicles_involved)),
            "latitude" => Some(self.latitude),
            "longitude" => Some(self.longitude),
            _ => None,
        }
    }

    /// Check whether a numeric field with this name exists.
    pub fn has_numeric_field(name: &str) -> bool {
        Self::NUMERIC_FIELDS.contains(&name)
    }

    /// Severity classification of this accident.
    pub fn severity(&self) -> Severity {
        Severity::classify(self.casualties, self.vehicles_involved)
    }

    /// Time-of-day segment of this accident.
    pub fn time_segment(&self) -> TimeSegment {
        TimeSegment::from_hour(self.time.hour())
    }
}

/// Split a `"City, Country"` location string into its parts.
///
/// Returns `None` if the string has no comma separator.
pub fn split_location(location: &str) -> Option<(&str, &str)> {
    let (city, country) = location.split_once(',')?;
    Some((city.trim(), country.trim()))
}
