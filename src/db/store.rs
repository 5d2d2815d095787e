//! Flat-file storage for the task collection.
//!
//! The whole database is a single pretty-printed JSON array of task records.
//! Reads and writes always cover the entire collection; there is no appending
//! or in-place patching, so the file content is exactly what the last
//! successful [`TodoStore::write_all`] produced.

use crate::libs::error::TodoError;
use crate::libs::todo::Todo;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Whole-file reader/writer for the to-do database.
///
/// The store never creates the backing file on read and never retries; each
/// failure is translated into a [`TodoError`] for the caller to report. The
/// file itself is seeded with an empty collection by the `init` command.
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TodoStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the full task collection.
    ///
    /// An unreadable file (missing, permission denied, a directory) is
    /// [`TodoError::DbRead`]; readable but malformed content is
    /// [`TodoError::Json`]. A corrupt database is never treated as empty.
    pub fn read_all(&self) -> Result<Vec<Todo>, TodoError> {
        let raw = fs::read_to_string(&self.path).map_err(TodoError::DbRead)?;
        serde_json::from_str(&raw).map_err(TodoError::Json)
    }

    /// Serializes `todos` and overwrites the backing file in full.
    ///
    /// On [`TodoError::DbWrite`] the caller must treat the persisted state as
    /// indeterminate and the operation as fully failed.
    pub fn write_all(&self, todos: &[Todo]) -> Result<(), TodoError> {
        let file = File::create(&self.path).map_err(TodoError::DbWrite)?;
        serde_json::to_writer_pretty(&file, todos).map_err(|e| TodoError::DbWrite(e.into()))
    }
}
