// src/location/sample.rs
//! Location data structures

use crate::error::{GeoError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A decoded GPS position in signed decimal degrees.
///
/// Immutable once constructed; the constructor rejects values outside
/// the valid latitude/longitude ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Create a coordinate, validating latitude [-90, 90] and
    /// longitude [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) || latitude.is_nan() {
            return Err(GeoError::OutOfRange(format!("latitude {}", latitude)));
        }
        if !(-180.0..=180.0).contains(&longitude) || longitude.is_nan() {
            return Err(GeoError::OutOfRange(format!("longitude {}", longitude)));
        }

        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// A last-known position reported by a single location provider.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationSample {
    pub provider: String,
    pub coordinate: GeoCoordinate,
    pub accuracy_meters: f32,
    pub age_millis: i64,
}

impl LocationSample {
    pub fn new(
        provider: &str,
        coordinate: GeoCoordinate,
        accuracy_meters: f32,
        age_millis: i64,
    ) -> Self {
        Self {
            provider: provider.to_string(),
            coordinate,
            accuracy_meters,
            age_millis,
        }
    }

    /// Build a sample from the instant the provider produced the fix,
    /// computing the age against the current wall clock.
    pub fn from_fix_time(
        provider: &str,
        coordinate: GeoCoordinate,
        accuracy_meters: f32,
        fixed_at: DateTime<Utc>,
    ) -> Self {
        let age_millis = Utc::now().signed_duration_since(fixed_at).num_milliseconds();
        Self::new(provider, coordinate, accuracy_meters, age_millis)
    }

    /// Check if the sample is newer than the given freshness threshold.
    pub fn is_recent(&self, min_time_millis: i64) -> bool {
        self.age_millis < min_time_millis
    }
}
