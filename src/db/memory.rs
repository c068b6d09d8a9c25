// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory storage slot for tests and offline use.

use crate::db::{StorageError, StorageSlot};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    contents: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

/// A slot held in memory.
///
/// Clones share the same contents, so a test can keep a handle after moving
/// one into a store.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    inner: Arc<Mutex<Inner>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-filled with `contents`.
    pub fn with_contents(contents: &str) -> Self {
        let slot = Self::new();
        slot.lock().contents = Some(contents.to_string());
        slot
    }

    /// Current raw contents.
    pub fn contents(&self) -> Option<String> {
        self.lock().contents.clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    /// Make subsequent reads fail with `StorageError::Unavailable`.
    pub fn fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    /// Make subsequent writes fail with `StorageError::Unavailable`.
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock cannot leave `Inner` half-updated
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let inner = self.lock();
        if inner.fail_reads {
            return Err(StorageError::Unavailable(
                "memory slot configured to fail reads".to_string(),
            ));
        }
        Ok(inner.contents.clone())
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(StorageError::Unavailable(
                "memory slot configured to fail writes".to_string(),
            ));
        }
        inner.contents = Some(contents.to_string());
        inner.writes += 1;
        Ok(())
    }
}
