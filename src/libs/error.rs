use std::io;
use thiserror::Error;

/// Outcome taxonomy of the storage layer.
///
/// Every record-store and task-manager call reports one of these variants on
/// failure instead of panicking; success is the plain `Ok` arm. The CLI maps
/// each variant to a user-facing message and a nonzero exit status.
#[derive(Debug, Error)]
pub enum TodoError {
    /// The database file could not be opened or read.
    #[error("failed to read from the to-do database")]
    DbRead(#[source] io::Error),

    /// The database file was readable but is not a valid task collection.
    #[error("failed to decode the to-do database")]
    Json(#[source] serde_json::Error),

    /// The database file could not be overwritten. The persisted state must
    /// be treated as unchanged; no partial write is ever left behind by the
    /// task manager pipeline.
    #[error("failed to write to the to-do database")]
    DbWrite(#[source] io::Error),

    /// The supplied task ID is outside the current collection.
    #[error("no to-do task found with ID {0}")]
    Id(usize),
}
