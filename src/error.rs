// src/error.rs
//! Error types for the geotag library

use std::fmt;

pub type Result<T> = std::result::Result<T, GeoError>;

#[derive(Debug)]
pub enum GeoError {
    Io(std::io::Error),
    Json(serde_json::Error),
    MalformedExif(String),
    OutOfRange(String),
    FixTimedOut,
    FixCancelled,
    Provider(String),
    Other(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::Io(e) => write!(f, "IO error: {}", e),
            GeoError::Json(e) => write!(f, "JSON error: {}", e),
            GeoError::MalformedExif(msg) => write!(f, "Malformed EXIF value: {}", msg),
            GeoError::OutOfRange(msg) => write!(f, "Coordinate out of range: {}", msg),
            GeoError::FixTimedOut => write!(f, "Location fix timed out"),
            GeoError::FixCancelled => write!(f, "Location fix was cancelled"),
            GeoError::Provider(msg) => write!(f, "Provider error: {}", msg),
            GeoError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {}

impl From<std::io::Error> for GeoError {
    fn from(error: std::io::Error) -> Self {
        GeoError::Io(error)
    }
}

impl From<serde_json::Error> for GeoError {
    fn from(error: serde_json::Error) -> Self {
        GeoError::Json(error)
    }
}

impl From<anyhow::Error> for GeoError {
    fn from(error: anyhow::Error) -> Self {
        GeoError::Other(error.to_string())
    }
}
