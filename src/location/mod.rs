// src/location/mod.rs
//! Location sampling, selection, and one-shot fixes

pub mod fix;
pub mod provider;
pub mod sample;
pub mod selector;
pub mod simulated;

pub use sample::{GeoCoordinate, LocationSample};
pub use selector::SelectionResult;
