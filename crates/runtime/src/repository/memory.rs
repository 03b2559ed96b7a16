//! In-memory MatchStore implementation for tests and ephemeral runs.

use std::sync::RwLock;

use serde_json::Value;
use strike_core::MatchState;

use crate::repository::{MatchStore, Result, StoreError};

/// In-memory implementation of MatchStore.
///
/// Holds the document as parsed JSON, the same shape a file round trip would
/// produce, so restore behaves identically to [`FileMatchStore`].
///
/// [`FileMatchStore`]: crate::repository::FileMatchStore
pub struct InMemoryMatchStore {
    document: RwLock<Option<Value>>,
}

impl InMemoryMatchStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            document: RwLock::new(None),
        }
    }

    /// Create a store preloaded with a raw document.
    pub fn with_document(document: Value) -> Self {
        Self {
            document: RwLock::new(Some(document)),
        }
    }
}

impl Default for InMemoryMatchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchStore for InMemoryMatchStore {
    fn save(&self, state: &MatchState) -> Result<()> {
        let document = serde_json::to_value(state)?;
        let mut slot = self
            .document
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        *slot = Some(document);
        Ok(())
    }

    fn load_raw(&self) -> Result<Option<Value>> {
        let slot = self
            .document
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(slot.clone())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .document
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        *slot = None;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.document
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}
