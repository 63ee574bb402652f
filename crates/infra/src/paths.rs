//! Location of the backing files.

use std::path::{Path, PathBuf};

/// Resolves the per-store file paths under a single data directory.
///
/// The directory itself is created lazily by the first save; constructing
/// `DataPaths` has no filesystem side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    data_dir: PathBuf,
}

impl DataPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Product catalog table.
    pub fn catalog(&self) -> PathBuf {
        self.data_dir.join("catalog.csv")
    }

    /// Append-only movement history table.
    pub fn movements(&self) -> PathBuf {
        self.data_dir.join("movements.csv")
    }

    /// User account table.
    pub fn users(&self) -> PathBuf {
        self.data_dir.join("users.csv")
    }
}
