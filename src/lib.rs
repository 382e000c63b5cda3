// src/lib.rs
//! Geotag Library
//!
//! EXIF GPS tag codec plus best-known-location selection: convert between
//! the sexagesimal rational GPS representation and decimal degrees, pick
//! the best cached location across providers, and wait on one-shot fixes.

pub mod config;
pub mod error;
pub mod exif;
pub mod location;

// Re-export main types for convenience
pub use error::{GeoError, Result};
pub use exif::store::{ExifStore, TagStore};
pub use location::fix::{FixResolver, PendingFix};
pub use location::provider::{FixCriteria, ProviderRegistry};
pub use location::sample::{GeoCoordinate, LocationSample};
pub use location::selector::{LocationFinder, SelectionResult};
