// src/exif/store.rs
//! String-keyed EXIF tag storage

use crate::error::{GeoError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A string-keyed EXIF attribute store.
///
/// The codec only needs get/set/save; anything that can hold tag strings
/// (an in-memory map, a JSON sidecar, a real EXIF block) qualifies.
pub trait ExifStore {
    /// Get a tag value, or `None` if the tag is absent.
    fn get_attribute(&self, tag: &str) -> Option<String>;

    /// Set or replace a tag value.
    fn set_attribute(&mut self, tag: &str, value: &str);

    /// Persist any modified attributes.
    fn save(&mut self) -> Result<()>;
}

/// JSON sidecar implementation of [`ExifStore`].
///
/// Tags live in a flat string-to-string JSON object next to the image
/// (or anywhere else); `save` writes the file back when a path is set.
#[derive(Debug, Clone, Default)]
pub struct TagStore {
    tags: BTreeMap<String, String>,
    path: Option<PathBuf>,
}

impl TagStore {
    /// Create an empty in-memory store with no backing file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON sidecar file. A missing file yields an
    /// empty store bound to that path.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                tags: BTreeMap::new(),
                path: Some(path.to_path_buf()),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let tags: BTreeMap<String, String> = serde_json::from_str(&contents)
            .map_err(|e| GeoError::MalformedExif(format!("invalid sidecar {}: {}", path.display(), e)))?;

        Ok(Self {
            tags,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

impl ExifStore for TagStore {
    fn get_attribute(&self, tag: &str) -> Option<String> {
        self.tags.get(tag).cloned()
    }

    fn set_attribute(&mut self, tag: &str, value: &str) {
        self.tags.insert(tag.to_string(), value.to_string());
    }

    fn save(&mut self) -> Result<()> {
        let path = match &self.path {
            Some(p) => p.clone(),
            None => return Ok(()), // purely in-memory store
        };

        let contents = serde_json::to_string_pretty(&self.tags)?;
        std::fs::write(&path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_attribute() {
        let mut store = TagStore::new();
        assert_eq!(store.get_attribute("GPSLatitude"), None);

        store.set_attribute("GPSLatitude", "59/1,56/1,24000/1000");
        assert_eq!(
            store.get_attribute("GPSLatitude"),
            Some("59/1,56/1,24000/1000".to_string())
        );

        store.set_attribute("GPSLatitude", "0/1,0/1,0/1000");
        assert_eq!(store.get_attribute("GPSLatitude"), Some("0/1,0/1,0/1000".to_string()));
        assert_eq!(store.tag_count(), 1);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.json");

        let mut store = TagStore::load(&path).unwrap();
        store.set_attribute("GPSLatitudeRef", "N");
        store.set_attribute("GPSLongitudeRef", "E");
        store.save().unwrap();

        let loaded = TagStore::load(&path).unwrap();
        assert_eq!(loaded.get_attribute("GPSLatitudeRef"), Some("N".to_string()));
        assert_eq!(loaded.get_attribute("GPSLongitudeRef"), Some("E".to_string()));
    }

    #[test]
    fn test_load_invalid_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(TagStore::load(&path).is_err());
    }
}
