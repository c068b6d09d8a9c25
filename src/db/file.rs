// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed storage slot.
//!
//! Each slot is one JSON file under the data directory. Writes go to a temp
//! file that is then renamed over the slot, so readers never see a partial
//! write.

use crate::db::{StorageError, StorageSlot};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A slot stored at `<dir>/<name>.json`.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Open (and create the directory for) a slot.
    pub fn open<P: AsRef<Path>>(dir: P, name: &str) -> Result<Self, StorageError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| {
            StorageError::Unavailable(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let path = dir.join(format!("{}.json", name));
        tracing::info!(path = %path.display(), "Opened storage slot");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Unavailable(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        let temp_path = self.temp_path();

        fs::write(&temp_path, contents)
            .map_err(|e| StorageError::Unavailable(format!("Failed to write temp file: {}", e)))?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::Unavailable(format!("Failed to rename temp file: {}", e))
        })?;

        tracing::debug!(path = %self.path.display(), bytes = contents.len(), "Slot written");
        Ok(())
    }
}
