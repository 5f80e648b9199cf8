//! Snapshot persistence.
//!
//! The engine only sees the [`SnapshotStore`] seam; file mechanics live
//! in [`json`].

pub mod json;

pub use json::JsonFileStore;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

use crate::state::Snapshot;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("records I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("records parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load/save collaborator for the engine.
pub trait SnapshotStore: Send {
    fn load(&self) -> Result<Snapshot, StoreError>;
    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError>;
}

/// In-process store for tests, demos, and ephemeral tournaments.
///
/// Clones share the same backing slot, so a caller can hand one clone to
/// the engine and inspect saves through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Option<Snapshot>>>,
}

impl MemoryStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(snapshot))),
        }
    }

    /// The most recently saved (or seeded) snapshot, if any.
    pub fn saved(&self) -> Option<Snapshot> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Snapshot>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Snapshot, StoreError> {
        Ok(self.lock().clone().unwrap_or_default())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        *self.lock() = Some(snapshot.clone());
        Ok(())
    }
}
