//! JSON-file-backed content store.
//!
//! One file per collection in a data directory: `events.json`,
//! `restaurants.json`, `attractions.json`, `playgrounds.json`, each holding
//! a JSON array. A missing file is an empty collection, not an error, so a
//! partially seeded directory still serves.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use shared::{Attraction, Event, Playground, RestaurantOpening};
use tracing::debug;

use super::ContentStore;

#[derive(Clone)]
pub struct JsonContentStore {
    dir: PathBuf,
}

impl JsonContentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read_collection<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>> {
        let path: PathBuf = self.dir.join(file_name);
        if !path.exists() {
            debug!(file = file_name, "collection file missing, serving empty");
            return Ok(Vec::new());
        }
        read_json_array(&path)
    }
}

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let items = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(items)
}

impl ContentStore for JsonContentStore {
    fn events(&self) -> Result<Vec<Event>> {
        self.read_collection("events.json")
    }

    fn restaurant_openings(&self) -> Result<Vec<RestaurantOpening>> {
        self.read_collection("restaurants.json")
    }

    fn attractions(&self) -> Result<Vec<Attraction>> {
        self.read_collection("attractions.json")
    }

    fn playgrounds(&self) -> Result<Vec<Playground>> {
        self.read_collection("playgrounds.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_serve_empty_collections() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonContentStore::new(dir.path());
        assert!(store.events().unwrap().is_empty());
        assert!(store.playgrounds().unwrap().is_empty());
    }

    #[test]
    fn test_reads_seeded_collection() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("events.json"),
            r#"[{"id": "e1", "title": "Farmers Market", "date": "2025-06-14", "location": "Downtown"}]"#,
        )
        .unwrap();

        let store = JsonContentStore::new(dir.path());
        let events = store.events().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "e1");
        assert_eq!(events[0].date.as_deref(), Some("2025-06-14"));
        // Fields absent from the file are simply None.
        assert!(events[0].price.is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("attractions.json"), "not json").unwrap();

        let store = JsonContentStore::new(dir.path());
        assert!(store.attractions().is_err());
    }
}
