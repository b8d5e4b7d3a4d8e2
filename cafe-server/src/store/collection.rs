//! Generic in-memory collection
//!
//! Backing storage is a `Vec` behind a `parking_lot::RwLock`: listings
//! return a cloned snapshot in insertion order, which the projection layer
//! relies on for stable tie ordering. Each method takes the lock for the
//! duration of that single operation only - there are no multi-operation
//! transactions.

use std::fmt::Display;

use parking_lot::RwLock;
use thiserror::Error;

/// Storage-level failure surfaced by write operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record disappeared between read and write (optimistic concurrency)
    #[error("record {0} was modified or removed by another request")]
    Concurrency(String),
}

/// Records stored in a [`MemoryCollection`] expose their lookup key
pub trait Keyed {
    type Key: Clone + Eq + Display;

    fn key(&self) -> Self::Key;
}

/// In-memory record collection keyed by [`Keyed::Key`]
#[derive(Debug)]
pub struct MemoryCollection<T> {
    rows: RwLock<Vec<T>>,
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Keyed + Clone> MemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Cloned snapshot of all records, insertion order
    pub fn list(&self) -> Vec<T> {
        self.rows.read().clone()
    }

    pub fn get(&self, key: &T::Key) -> Option<T> {
        self.rows.read().iter().find(|r| r.key() == *key).cloned()
    }

    /// Append a record; uniqueness of the key is the caller's responsibility
    pub fn insert(&self, record: T) -> T {
        self.rows.write().push(record.clone());
        record
    }

    /// Full-record overwrite by key
    ///
    /// A missing key is the optimistic-concurrency failure: the record was
    /// removed (or never stored) by the time the write landed.
    pub fn replace(&self, key: &T::Key, record: T) -> Result<T, StoreError> {
        let mut rows = self.rows.write();
        match rows.iter_mut().find(|r| r.key() == *key) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(StoreError::Concurrency(key.to_string())),
        }
    }

    /// Remove by key; false when the key was absent
    pub fn remove(&self, key: &T::Key) -> bool {
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|r| r.key() != *key);
        rows.len() != before
    }

    /// Whether any record matches the predicate (single lock, no clone)
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.rows.read().iter().any(|r| predicate(r))
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}
