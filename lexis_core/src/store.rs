//! Insertion-ordered entry storage.

use std::sync::{Arc, RwLock};

use crate::entry::StringEntry;
use crate::error::{Error, Result};

/// Storage for analyzed entries, keyed by fingerprint.
///
/// Implementations keep insertion order and hold at most one entry per
/// fingerprint. Reads may run concurrently; `insert` and
/// `delete_by_fingerprint` are serialized against everything else.
pub trait EntryStore: Send + Sync {
    /// Append `entry`, failing with [`Error::Duplicate`] if its fingerprint
    /// is already present. The check and the append are one atomic step.
    fn insert(&self, entry: StringEntry) -> Result<()>;

    fn find_by_fingerprint(&self, fingerprint: &str) -> Result<Option<StringEntry>>;

    /// Snapshot of every entry in insertion order.
    fn all(&self) -> Result<Vec<StringEntry>>;

    /// Remove the entry with `fingerprint`. Returns whether one was removed.
    fn delete_by_fingerprint(&self, fingerprint: &str) -> Result<bool>;

    fn len(&self) -> Result<usize> {
        Ok(self.all()?.len())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Process-local store backed by `Arc<RwLock<Vec<_>>>`.
///
/// Cloning shares the underlying collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<Vec<StringEntry>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryStore for MemoryStore {
    fn insert(&self, entry: StringEntry) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| Error::LockPoisoned)?;
        if entries.iter().any(|e| e.fingerprint == entry.fingerprint) {
            return Err(Error::Duplicate(entry.fingerprint));
        }
        entries.push(entry);
        Ok(())
    }

    fn find_by_fingerprint(&self, fingerprint: &str) -> Result<Option<StringEntry>> {
        let entries = self.entries.read().map_err(|_| Error::LockPoisoned)?;
        Ok(entries.iter().find(|e| e.fingerprint == fingerprint).cloned())
    }

    fn all(&self) -> Result<Vec<StringEntry>> {
        let entries = self.entries.read().map_err(|_| Error::LockPoisoned)?;
        Ok(entries.clone())
    }

    fn delete_by_fingerprint(&self, fingerprint: &str) -> Result<bool> {
        let mut entries = self.entries.write().map_err(|_| Error::LockPoisoned)?;
        let Some(pos) = entries.iter().position(|e| e.fingerprint == fingerprint) else {
            return Ok(false);
        };
        entries.remove(pos);
        Ok(true)
    }

    fn len(&self) -> Result<usize> {
        let entries = self.entries.read().map_err(|_| Error::LockPoisoned)?;
        Ok(entries.len())
    }
}
