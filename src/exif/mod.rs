// src/exif/mod.rs
//! EXIF GPS tag handling

pub mod gps;
pub mod store;

pub use store::{ExifStore, TagStore};
