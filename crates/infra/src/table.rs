//! Whole-file tabular storage.
//!
//! Tables are small (a single storeroom), so every operation is a plain
//! read-everything / write-everything cycle. There is no partial update
//! surface and no cross-process locking: correctness assumes at most one
//! writer at a time.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage-layer error.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying file could not be read or written.
    #[error("storage i/o failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A row could not be decoded into the expected record shape.
    #[error("malformed row in {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A record could not be encoded as a row.
    #[error("failed to encode row for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Load a whole table into memory.
///
/// A missing file is an empty table, not an error: stores start existing on
/// their first save. Record types carry `#[serde(default)]` on their fields,
/// so columns absent from older or hand-edited files are backfilled with
/// type-appropriate defaults at load time.
pub fn load_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_owned(),
                source,
            });
        }
    };

    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|source| StorageError::Decode {
            path: path.to_owned(),
            source,
        })?);
    }
    Ok(rows)
}

/// Replace the persisted table with `rows`, header included.
///
/// Missing parent directories are created first. A write failure here is
/// fatal to the calling operation and must be propagated, never swallowed.
pub fn save_table<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StorageError::Io {
            path: parent.to_owned(),
            source,
        })?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|source| StorageError::Encode {
        path: path.to_owned(),
        source,
    })?;
    for row in rows {
        writer.serialize(row).map_err(|source| StorageError::Encode {
            path: path.to_owned(),
            source,
        })?;
    }
    writer.flush().map_err(|source| StorageError::Io {
        path: path.to_owned(),
        source,
    })?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "table saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        #[serde(default)]
        name: String,
        #[serde(default)]
        count: f64,
        #[serde(default)]
        note: Option<String>,
    }

    #[test]
    fn missing_file_loads_as_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let rows: Vec<Row> = load_table(&dir.path().join("nowhere.csv")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        let rows = vec![
            Row {
                name: "bolts".into(),
                count: 12.0,
                note: Some("m8".into()),
            },
            Row {
                name: "nuts".into(),
                count: 3.5,
                note: None,
            },
        ];

        save_table(&path, &rows).unwrap();
        let loaded: Vec<Row> = load_table(&path).unwrap();
        assert_eq!(loaded, rows);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("rows.csv");

        save_table(
            &path,
            &[Row {
                name: "washers".into(),
                count: 1.0,
                note: None,
            }],
        )
        .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn missing_columns_backfill_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.csv");
        std::fs::write(&path, "name\nbolts\n").unwrap();

        let loaded: Vec<Row> = load_table(&path).unwrap();
        assert_eq!(
            loaded,
            vec![Row {
                name: "bolts".into(),
                count: 0.0,
                note: None,
            }]
        );
    }
}
