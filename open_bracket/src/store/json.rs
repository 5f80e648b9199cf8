//! JSON-file snapshot storage.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use super::{SnapshotStore, StoreError};
use crate::state::Snapshot;

/// One pretty-printed JSON document at a fixed path.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Snapshot, StoreError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, raw)?;
        debug!("saved records to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("records.json"));

        let mut snapshot = Snapshot::default();
        snapshot.tournament.team_size_limit = Some(1);
        snapshot.teams.create_team("Alice", vec!["Alice".to_string()], "Alice");
        snapshot.matches.add_match(
            "Final",
            Some("2014-01-21 11:36:52".to_string()),
            vec!["Alice".to_string()],
            None,
            None,
        );

        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), snapshot);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(matches!(store.load().unwrap_err(), StoreError::Io(_)));
    }

    #[test]
    fn test_load_garbage_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(path);
        assert!(matches!(store.load().unwrap_err(), StoreError::Parse(_)));
    }
}
