//! Append-only movement history store.

use std::path::PathBuf;

use stockroom_infra::{DataPaths, StorageError, load_table, save_table};

use crate::movement::Movement;

/// File-backed movement history.
///
/// The log is strictly append-only and is the system's sole audit trail:
/// no update or delete surface exists by design. `append` is a whole-file
/// read-modify-write, so it costs O(log size) and assumes at most one
/// writer at a time.
#[derive(Debug, Clone)]
pub struct MovementLog {
    path: PathBuf,
}

impl MovementLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open(paths: &DataPaths) -> Self {
        Self::new(paths.movements())
    }

    /// The full history in insertion order. A log never written to is empty.
    pub fn load(&self) -> Result<Vec<Movement>, StorageError> {
        load_table(&self.path)
    }

    /// Append one movement and rewrite the log.
    pub fn append(&self, movement: Movement) -> Result<(), StorageError> {
        let mut movements = self.load()?;
        movements.push(movement);
        save_table(&self.path, &movements)
    }
}
