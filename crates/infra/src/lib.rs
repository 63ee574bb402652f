//! `stockroom-infra` — file-backed table storage.
//!
//! Every entity set in the system (catalog, movement history, users) lives
//! in one flat CSV file with a named-column header, read and rewritten
//! wholesale. This crate owns that substrate.

pub mod paths;
pub mod table;

pub use paths::DataPaths;
pub use table::{StorageError, load_table, save_table};
