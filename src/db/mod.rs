// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer: named slots holding a whole serialized value.

pub mod file;
pub mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

/// Slot names as constants.
pub mod slots {
    /// The full workout collection (JSON array)
    pub const WORKOUTS: &str = "polypulse_workouts";
}

/// A single named storage slot.
///
/// `write` replaces the whole content; a subsequent `read` must observe
/// either the old or the new value, never a mix.
pub trait StorageSlot: Send + Sync {
    /// Read the slot. `Ok(None)` means it was never written.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the slot's content.
    fn write(&self, contents: &str) -> Result<(), StorageError>;
}

/// Errors from storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Stored data is corrupt: {0}")]
    Corrupt(String),
}
